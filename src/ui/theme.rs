//! Color palette and reusable styles

use ratatui::prelude::*;

/// Default application theme
pub struct DefaultTheme;

impl DefaultTheme {
    pub const PRIMARY: Color = Color::Rgb(41, 121, 255);
    pub const TEXT: Color = Color::Rgb(224, 224, 224);
    pub const TEXT_DIM: Color = Color::Rgb(140, 140, 140);
    pub const TEXT_MUTED: Color = Color::Rgb(90, 90, 90);
    pub const SUCCESS: Color = Color::Rgb(80, 200, 120);
    pub const ERROR: Color = Color::Rgb(235, 87, 87);
    pub const WARNING: Color = Color::Rgb(242, 201, 76);
    pub const BG_PANEL: Color = Color::Rgb(24, 26, 32);

    pub fn title() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().bg(Self::BG_PANEL)
    }

    pub fn active_border() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn normal_text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dim_text() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn info() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_DIM).bg(Self::BG_PANEL)
    }

    pub fn popup() -> Style {
        Style::default().bg(Self::BG_PANEL)
    }

    pub fn popup_border() -> Style {
        Style::default().fg(Self::PRIMARY)
    }
}
