use ratatui::style::Color;

/// Side length of the square playfield, in cells.
pub const GRID_SIZE: u16 = 20;

/// Tick interval of a fresh game in milliseconds.
pub const INITIAL_SPEED_MS: u64 = 200;

/// Floor for the tick interval in milliseconds.
pub const MIN_SPEED_MS: u64 = 60;

/// Tick interval reduction applied per food eaten.
pub const SPEED_INCREMENT_MS: u64 = 5;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// The fixed `GRID_SIZE` x `GRID_SIZE` playfield.
    pub const DEFAULT: Self = Self {
        width: GRID_SIZE,
        height: GRID_SIZE,
    };

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

pub const THEME: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_CELL: &str = "██";
