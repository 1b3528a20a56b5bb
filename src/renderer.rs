use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, GRID_SIZE, Theme,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Which host screen the loop is currently showing.
///
/// Terminal game states are derived from `GameState` directly; `Screen` only
/// tracks the host-side states the core deliberately does not model.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Start,
    Running,
    Paused,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, screen: Screen, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, &hud_info);
    let board_area = centered_board(play_area);

    let theme = hud_info.theme;
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::default().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::default().bg(theme.play_bg));

    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match screen {
        Screen::Start => render_start_menu(frame, play_area, hud_info.high_score, theme),
        Screen::Paused => render_pause_menu(frame, play_area, theme),
        Screen::Running => match state.status {
            GameStatus::GameOver => render_game_over_menu(
                frame,
                play_area,
                state.score,
                hud_info.high_score,
                state.death_reason,
                theme,
            ),
            GameStatus::Won => render_victory_menu(frame, play_area, state.score, theme),
            GameStatus::Playing => {}
        },
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::default().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.tail();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.direction()),
                Style::default()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if *segment == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::default().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::default().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Returns the board rect (grid plus border) centered in `area`, clamped to
/// whatever space the terminal actually offers.
fn centered_board(area: Rect) -> Rect {
    let want_width = GRID_SIZE + 2;
    let want_height = GRID_SIZE + 2;

    let width = want_width.min(area.width);
    let height = want_height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}

fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;
    if x_offset >= GRID_SIZE || y_offset >= GRID_SIZE {
        return None;
    }

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
