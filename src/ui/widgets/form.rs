//! Procedure form widget
//!
//! One labeled text field per parameter, in declaration order, plus the
//! status line from the last submit.

use crate::app::{FormState, FormStatus};
use crate::ui::DefaultTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const LABEL_WIDTH: usize = 26;

/// Draw one procedure tab
pub fn draw_procedure_form(f: &mut Frame, form: &FormState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::active_border())
        .title(Span::styled(
            format!(" {} ", form.descriptor.name),
            DefaultTheme::title(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible_height = inner.height as usize;
    // Keep the focused field on screen when the form is taller than the area.
    let scroll = if form.focus + 3 > visible_height {
        form.focus + 3 - visible_height
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, (spec, value)) in form
        .descriptor
        .params
        .iter()
        .zip(&form.inputs)
        .enumerate()
        .skip(scroll)
    {
        let focused = i == form.focus;
        let label_style = if focused {
            DefaultTheme::info()
        } else {
            DefaultTheme::dim_text()
        };
        let value_style = if focused {
            DefaultTheme::selected()
        } else {
            DefaultTheme::normal_text()
        };

        let label = format!(
            " {:<width$}",
            format!("{} ({})", spec.name, spec.declared_type),
            width = LABEL_WIDTH
        );
        let mut spans = vec![
            Span::styled(label, label_style),
            Span::styled(format!(" {}", value), value_style),
        ];
        if focused {
            spans.push(Span::styled("█", DefaultTheme::info()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Enter", DefaultTheme::info()),
        Span::styled(": Execute", DefaultTheme::dim_text()),
    ]));

    if let Some(status) = form.status {
        let style = match status {
            FormStatus::Success => DefaultTheme::success(),
            FormStatus::Failure => DefaultTheme::error(),
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", status.message()),
            style,
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
