use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Supplemental values displayed alongside the board.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let shown_high = info.high_score.max(state.score);
    let line = Line::from(vec![
        Span::styled(
            format!(" Score {:>4}", state.score),
            Style::default()
                .fg(info.theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Hi {shown_high:>4}   Length {:>3} ", state.snake.len()),
            Style::default().fg(info.theme.menu_footer),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}
