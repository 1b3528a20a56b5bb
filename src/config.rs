use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimension. The board is always `GRID_SIZE` x `GRID_SIZE`.
pub const GRID_SIZE: u16 = 15;

/// Default tick cadence driven by the host scheduler, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Fastest cadence accepted from the command line.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Points granted per food eaten.
pub const SCORE_PER_FOOD: u32 = 10;

/// Segments in a freshly started snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Head cell of a freshly started snake; the body extends leftward from here.
pub const INITIAL_HEAD_X: i32 = 3;
pub const INITIAL_HEAD_Y: i32 = 3;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Snake head glyphs per movement direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Solid block for body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Shaded block for the tail segment.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Food marker.
pub const GLYPH_FOOD: &str = "●";
