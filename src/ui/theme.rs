use crate::colors::ColorToken;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub path: Color, // Yellow
    pub edge: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border while playing
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    path: Color::Rgb(249, 226, 175),
    edge: Color::Rgb(88, 91, 112),
};

impl Theme {
    /// Concrete color for an abstract token
    pub fn token(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Base => self.comment,
            ColorToken::Highlight | ColorToken::Current => self.error,
            ColorToken::Sorted | ColorToken::Settled => self.success,
            ColorToken::ActiveRange | ColorToken::Frontier => self.primary,
            ColorToken::Pivot | ColorToken::Goal => self.secondary,
            ColorToken::Path => self.path,
        }
    }
}
