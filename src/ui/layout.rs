//! Layout management

use crate::app::{App, Tab};
use crate::ui::widgets::{draw_procedure_form, draw_view_browser};
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};

/// Draw the main layout
pub fn draw_layout(f: &mut Frame, app: &mut App, area: Rect) {
    // Main vertical layout: header, tab strip, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Tab strip
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_tab_strip(f, app, chunks[1]);
    draw_content(f, app, chunks[2]);
    draw_status_bar(f, app, chunks[3]);
}

/// Draw the title header
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Title
            Constraint::Length(28), // Connection info
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " Business Supply Management System",
            DefaultTheme::title(),
        )),
        Line::from(""),
    ])
    .style(DefaultTheme::header());
    f.render_widget(title, header_chunks[0]);

    let conn_info = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("● ", DefaultTheme::success()),
            Span::styled(app.config.database.clone(), DefaultTheme::normal_text()),
            Span::styled(
                format!(" @ {} ", app.config.host),
                DefaultTheme::dim_text(),
            ),
        ]),
        Line::from(""),
    ])
    .style(DefaultTheme::header())
    .alignment(Alignment::Right);
    f.render_widget(conn_info, header_chunks[1]);
}

/// Draw the tab strip: one tab per catalog entry, procedures then views
fn draw_tab_strip(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .tabs
        .iter()
        .map(|tab| {
            let marker = match tab {
                Tab::Procedure(_) => "⚙ ",
                Tab::View(_) => "👁 ",
            };
            Line::from(vec![
                Span::styled(marker, DefaultTheme::dim_text()),
                Span::styled(tab.title(), DefaultTheme::normal_text()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.selected_tab)
        .highlight_style(DefaultTheme::selected())
        .divider(Span::styled("│", DefaultTheme::dim_text()));
    f.render_widget(tabs, area);
}

/// Draw the content area for the active tab
fn draw_content(f: &mut Frame, app: &mut App, area: Rect) {
    match &mut app.tabs[app.selected_tab] {
        Tab::Procedure(form) => draw_procedure_form(f, form, area),
        Tab::View(browser) => draw_view_browser(f, browser, area),
    }
}

/// Draw the status bar with key hints
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.is_busy {
        Line::from(Span::styled(" Working...", DefaultTheme::warning()))
    } else {
        Line::from(vec![
            Span::styled(" Tab", DefaultTheme::info()),
            Span::styled(":next tab  ", DefaultTheme::dim_text()),
            Span::styled("↑/↓", DefaultTheme::info()),
            Span::styled(":field/scroll  ", DefaultTheme::dim_text()),
            Span::styled("Enter", DefaultTheme::info()),
            Span::styled(":execute/load  ", DefaultTheme::dim_text()),
            Span::styled("F1", DefaultTheme::info()),
            Span::styled(":help  ", DefaultTheme::dim_text()),
            Span::styled("Ctrl+Q", DefaultTheme::info()),
            Span::styled(":quit", DefaultTheme::dim_text()),
        ])
    };

    f.render_widget(Paragraph::new(line).style(DefaultTheme::status_bar()), area);
}

/// Draw help popup
pub fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::popup_border())
        .title(Span::styled(" Help ", DefaultTheme::title()))
        .style(DefaultTheme::popup());
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("  Global", DefaultTheme::info())),
        Line::from("    Tab / Shift+Tab   switch tab"),
        Line::from("    Enter / Ctrl+E    execute procedure or load view"),
        Line::from("    F1                toggle this help"),
        Line::from("    Ctrl+C / Ctrl+Q   quit"),
        Line::from(""),
        Line::from(Span::styled("  Procedure tabs", DefaultTheme::info())),
        Line::from("    ↑ / ↓             move between fields"),
        Line::from("    type / Backspace  edit the focused field"),
        Line::from(""),
        Line::from(Span::styled("  View tabs", DefaultTheme::info())),
        Line::from("    ↑ / ↓             scroll rows"),
        Line::from("    ← / →             scroll columns"),
        Line::from(""),
        Line::from(Span::styled(
            "  Empty integer fields are sent as NULL.",
            DefaultTheme::dim_text(),
        )),
    ];
    f.render_widget(Paragraph::new(text), inner);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
