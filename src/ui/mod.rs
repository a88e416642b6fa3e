//! UI module — theme, layout and per-tab widgets

mod layout;
mod theme;
pub mod widgets;

pub use layout::{draw_help_popup, draw_layout};
pub use theme::DefaultTheme;

use crate::app::App;
use ratatui::prelude::*;

/// Top-level draw entry point.
pub fn draw(f: &mut Frame, app: &mut App) {
    draw_layout(f, app, f.size());

    if app.show_help {
        draw_help_popup(f, f.size());
    }
}
