use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use gridsnake::config::{DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, THEME_CLASSIC};
use gridsnake::game::GameState;
use gridsnake::input::{GameInput, poll_input};
use gridsnake::renderer::{self, Screen};
use gridsnake::score::{load_high_score, save_high_score};
use gridsnake::terminal_runtime::{TerminalSession, install_panic_hook};
use gridsnake::ui::hud::HudInfo;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the game RNG for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    install_panic_hook();

    // Read the high score before entering raw mode so a corrupt file can be
    // reported on a normal screen.
    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("warning: could not read high score: {error}");
            0
        }
    };

    let warnings = run(&cli, high_score)?;
    for warning in warnings {
        eprintln!("{warning}");
    }

    Ok(())
}

fn run(cli: &Cli, mut high_score: u32) -> io::Result<Vec<String>> {
    let mut session = TerminalSession::enter()?;
    let mut warnings = Vec::new();

    let mut state = cli
        .seed
        .map_or_else(GameState::new, GameState::new_with_seed);
    let mut screen = Screen::Start;
    let tick_interval = Duration::from_millis(cli.tick_ms.max(MIN_TICK_INTERVAL_MS));
    let mut last_tick = Instant::now();

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &state,
                screen,
                HudInfo {
                    high_score,
                    theme: &THEME_CLASSIC,
                },
            )
        })?;

        if let Some(input) = poll_input(INPUT_POLL_INTERVAL)? {
            match input {
                GameInput::Quit => break,
                GameInput::Pause => {
                    screen = match screen {
                        Screen::Running if !state.status.is_terminal() => Screen::Paused,
                        Screen::Paused => Screen::Running,
                        other => other,
                    };
                }
                GameInput::Confirm => match screen {
                    Screen::Start | Screen::Paused => {
                        screen = Screen::Running;
                        last_tick = Instant::now();
                    }
                    Screen::Running if state.status.is_terminal() => {
                        state.start();
                        last_tick = Instant::now();
                    }
                    Screen::Running => {}
                },
                GameInput::Direction(direction) => {
                    if screen == Screen::Running {
                        state.set_direction(direction);
                    }
                }
            }
        }

        // The tick cadence is host-owned: pausing or a terminal state simply
        // stops the calls, the game state holds no timer of its own.
        if screen == Screen::Running
            && !state.status.is_terminal()
            && last_tick.elapsed() >= tick_interval
        {
            state.tick();
            last_tick = Instant::now();

            let snapshot = state.snapshot();
            if snapshot.terminal && snapshot.score > high_score {
                high_score = snapshot.score;
                if let Err(error) = save_high_score(high_score) {
                    // Raw mode is active; report after the session ends.
                    warnings.push(format!("warning: could not save high score: {error}"));
                }
            }
        }
    }

    Ok(warnings)
}
