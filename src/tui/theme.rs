//! Colour palettes for the dark and light themes

use ratatui::style::Color;

use crate::models::{ColorToken, Theme};

/// Colours used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub error: Color,
    pub warning: Color,
    pub ok: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            panel: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            error: Color::Rgb(200, 80, 80),
            warning: Color::Rgb(220, 180, 60),
            ok: Color::Rgb(90, 180, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 240),
            panel: Color::Rgb(230, 232, 228),
            text: Color::Rgb(30, 30, 30),
            dim: Color::Rgb(110, 110, 110),
            accent: Color::Rgb(20, 110, 130),
            error: Color::Rgb(180, 40, 40),
            warning: Color::Rgb(170, 110, 0),
            ok: Color::Rgb(30, 130, 60),
        }
    }

    /// Terminal colour for a category token
    pub fn category(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::CategoryFood => Color::Rgb(255, 99, 132),
            ColorToken::CategoryTravel => Color::Rgb(54, 162, 235),
            ColorToken::CategoryEntertainment => Color::Rgb(255, 206, 86),
            ColorToken::CategoryShopping => Color::Rgb(75, 192, 192),
            ColorToken::NeonBlue => self.accent,
        }
    }
}
