//! Colours for the two themes

use crate::prefs::Theme;
use ratatui::prelude::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Search box and table rows.
    pub surface: Color,
    pub header_background: Color,
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub muted: Color,
    pub price: Color,
    pub figures: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(28, 28, 30),
        surface: Color::Rgb(44, 44, 46),
        header_background: Color::Rgb(44, 44, 46),
        border: Color::Rgb(55, 65, 81),
        title: Color::Rgb(96, 165, 250),
        text: Color::White,
        muted: Color::Rgb(156, 163, 175),
        price: Color::Rgb(74, 222, 128),
        figures: Color::Rgb(209, 213, 219),
        accent: Color::Rgb(59, 130, 246),
        error: Color::Rgb(248, 113, 113),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 249, 250),
        surface: Color::White,
        header_background: Color::Rgb(243, 244, 246),
        border: Color::Rgb(209, 213, 219),
        title: Color::Rgb(31, 41, 55),
        text: Color::Black,
        muted: Color::Rgb(75, 85, 99),
        price: Color::Rgb(21, 128, 61),
        figures: Color::Rgb(75, 85, 99),
        accent: Color::Rgb(55, 65, 81),
        error: Color::Rgb(185, 28, 28),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }
}
