//! View browser widget
//!
//! A scrollable read-only text region holding the rendered view table.

use crate::app::ViewBrowser;
use crate::ui::DefaultTheme;
use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

/// Draw one view tab
pub fn draw_view_browser(f: &mut Frame, browser: &ViewBrowser, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::active_border())
        .title(Span::styled(
            format!(" {} ", browser.name),
            DefaultTheme::title(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !browser.loaded {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", DefaultTheme::dim_text()),
                Span::styled("Enter", DefaultTheme::info()),
                Span::styled(" to load view data", DefaultTheme::dim_text()),
            ]),
        ])
        .alignment(Alignment::Center);
        f.render_widget(hint, inner);
        return;
    }

    let paragraph = Paragraph::new(browser.text.as_str())
        .style(DefaultTheme::normal_text())
        .scroll((browser.scroll_y, browser.scroll_x));
    f.render_widget(paragraph, inner);

    let line_count = browser.line_count();
    if line_count > inner.height as usize {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"));

        let mut scrollbar_state =
            ScrollbarState::new(line_count).position(browser.scroll_y as usize);

        f.render_stateful_widget(
            scrollbar,
            area.inner(&Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}
