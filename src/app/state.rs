//! Application state - core data structures and state management
//!
//! One tab per catalog entry, procedures first then views, built once at
//! startup. No state is shared across tabs; switching tabs has no side
//! effect. Async operations live in the actions module, key handling in
//! handlers.

use crate::catalog::{ProcedureDescriptor, PROCEDURES, VIEWS};
use crate::config::DbConfig;

/// Outcome of the last submit on a procedure form.
///
/// Both render as fixed generic texts; the underlying cause is deliberately
/// not carried here (business-rule rejections and real errors look the same).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Success,
    Failure,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            FormStatus::Success => "Procedure executed successfully (or halted by conditions).",
            FormStatus::Failure => "Execution halted. Check constraints or input.",
        }
    }
}

/// Mutable state of one procedure tab: raw text per parameter in declaration
/// order, the focused field, and the last status.
pub struct FormState {
    pub descriptor: &'static ProcedureDescriptor,
    pub inputs: Vec<String>,
    pub focus: usize,
    pub status: Option<FormStatus>,
}

impl FormState {
    pub fn new(descriptor: &'static ProcedureDescriptor) -> Self {
        Self {
            descriptor,
            inputs: vec![String::new(); descriptor.params.len()],
            focus: 0,
            status: None,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + 1) % self.inputs.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.pop();
        }
    }
}

/// Mutable state of one view tab: the rendered text (replaced wholesale on
/// each load) and scroll offsets.
pub struct ViewBrowser {
    pub name: &'static str,
    pub text: String,
    pub scroll_y: u16,
    pub scroll_x: u16,
    pub loaded: bool,
}

impl ViewBrowser {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            text: String::new(),
            scroll_y: 0,
            scroll_x: 0,
            loaded: false,
        }
    }

    /// Replace the buffer and reset scrolling.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.scroll_y = 0;
        self.scroll_x = 0;
        self.loaded = true;
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Content behind one tab.
pub enum Tab {
    Procedure(FormState),
    View(ViewBrowser),
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Procedure(form) => form.descriptor.name,
            Tab::View(browser) => browser.name,
        }
    }
}

/// Main application state
pub struct App {
    /// Connection settings, reused to open one connection per operation
    pub config: DbConfig,
    /// All tabs, procedures first then views, in catalog order
    pub tabs: Vec<Tab>,
    /// Index of the active tab
    pub selected_tab: usize,
    /// Is an Execute/Load in flight? The event loop sets this and draws one
    /// frame before awaiting the action, so the status bar shows it while
    /// the blocking round trip runs.
    pub is_busy: bool,
    /// Should quit?
    pub should_quit: bool,
    /// Show help popup
    pub show_help: bool,
}

impl App {
    /// Build the full tab set from the static catalog.
    pub fn new(config: DbConfig) -> Self {
        let mut tabs: Vec<Tab> = PROCEDURES
            .iter()
            .map(|d| Tab::Procedure(FormState::new(d)))
            .collect();
        tabs.extend(VIEWS.iter().map(|name| Tab::View(ViewBrowser::new(name))));

        Self {
            config,
            tabs,
            selected_tab: 0,
            is_busy: false,
            should_quit: false,
            show_help: false,
        }
    }

    pub fn next_tab(&mut self) {
        self.selected_tab = (self.selected_tab + 1) % self.tabs.len();
    }

    pub fn prev_tab(&mut self) {
        self.selected_tab = (self.selected_tab + self.tabs.len() - 1) % self.tabs.len();
    }

    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.selected_tab]
    }

    pub fn active_tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.selected_tab]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_procedures_then_views_in_catalog_order() {
        let app = App::new(DbConfig::default());
        assert_eq!(app.tabs.len(), PROCEDURES.len() + VIEWS.len());

        for (tab, descriptor) in app.tabs.iter().zip(PROCEDURES) {
            assert_eq!(tab.title(), descriptor.name);
            assert!(matches!(tab, Tab::Procedure(_)));
        }
        for (tab, name) in app.tabs.iter().skip(PROCEDURES.len()).zip(VIEWS) {
            assert_eq!(tab.title(), *name);
            assert!(matches!(tab, Tab::View(_)));
        }
    }

    #[test]
    fn form_inputs_parallel_descriptor_params() {
        let app = App::new(DbConfig::default());
        for tab in &app.tabs {
            if let Tab::Procedure(form) = tab {
                assert_eq!(form.inputs.len(), form.descriptor.params.len());
                assert!(form.inputs.iter().all(String::is_empty));
                assert_eq!(form.status, None);
            }
        }
    }

    #[test]
    fn field_focus_wraps_both_directions() {
        let mut form = FormState::new(&PROCEDURES[0]);
        let n = form.inputs.len();
        assert!(n > 1);

        form.focus_prev();
        assert_eq!(form.focus, n - 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn editing_touches_only_the_focused_field() {
        let mut form = FormState::new(&PROCEDURES[0]);
        form.push_char('a');
        form.focus_next();
        form.push_char('b');
        assert_eq!(form.inputs[0], "a");
        assert_eq!(form.inputs[1], "b");

        form.pop_char();
        assert_eq!(form.inputs[1], "");
        assert_eq!(form.inputs[0], "a");
    }

    #[test]
    fn tab_cycling_wraps() {
        let mut app = App::new(DbConfig::default());
        app.prev_tab();
        assert_eq!(app.selected_tab, app.tabs.len() - 1);
        app.next_tab();
        assert_eq!(app.selected_tab, 0);
    }

    #[test]
    fn status_messages_are_the_fixed_generic_texts() {
        assert_eq!(
            FormStatus::Success.message(),
            "Procedure executed successfully (or halted by conditions)."
        );
        assert_eq!(
            FormStatus::Failure.message(),
            "Execution halted. Check constraints or input."
        );
    }

    #[test]
    fn view_load_replaces_text_and_resets_scroll() {
        let mut browser = ViewBrowser::new("display_product_view");
        browser.scroll_y = 7;
        browser.set_text("a | b\n-----\n".to_string());
        assert!(browser.loaded);
        assert_eq!(browser.scroll_y, 0);

        browser.set_text("fresh".to_string());
        assert_eq!(browser.text, "fresh");
    }
}
