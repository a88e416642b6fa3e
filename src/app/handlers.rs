//! Event loop and key dispatch

use crate::app::{App, Tab};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

impl App {
    /// Main event loop: draw, poll, dispatch. An Execute/Load gets one busy
    /// frame drawn first, then runs to completion before the loop polls
    /// again.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| crate::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if self.wants_execute(&key) {
                            self.is_busy = true;
                            terminal.draw(|f| crate::ui::draw(f, self))?;
                            self.run_active().await;
                            self.is_busy = false;
                        } else {
                            self.handle_key(key);
                        }
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Does this key fire the active tab's Execute/Load?
    fn wants_execute(&self, key: &KeyEvent) -> bool {
        !self.show_help
            && (key.code == KeyCode::Enter
                || (key.code, key.modifiers) == (KeyCode::Char('e'), KeyModifiers::CONTROL))
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Quit shortcuts - always work
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // Help toggle
        if key.code == KeyCode::F(1) {
            self.show_help = !self.show_help;
            return;
        }
        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return;
        }

        // Tab switching
        match key.code {
            KeyCode::Tab => {
                self.next_tab();
                return;
            }
            KeyCode::BackTab => {
                self.prev_tab();
                return;
            }
            _ => {}
        }

        // Remaining keys act on the active tab's own state
        match self.active_tab_mut() {
            Tab::Procedure(form) => match key.code {
                KeyCode::Down => form.focus_next(),
                KeyCode::Up => form.focus_prev(),
                KeyCode::Backspace => form.pop_char(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.push_char(c)
                }
                _ => {}
            },
            Tab::View(browser) => match key.code {
                KeyCode::Down => {
                    let max = browser.line_count().saturating_sub(1) as u16;
                    browser.scroll_y = browser.scroll_y.saturating_add(1).min(max);
                }
                KeyCode::Up => browser.scroll_y = browser.scroll_y.saturating_sub(1),
                KeyCode::Right => browser.scroll_x = browser.scroll_x.saturating_add(4),
                KeyCode::Left => browser.scroll_x = browser.scroll_x.saturating_sub(4),
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_and_ctrl_e_request_execute() {
        let app = App::new(DbConfig::default());
        assert!(app.wants_execute(&key(KeyCode::Enter)));
        assert!(app.wants_execute(&KeyEvent::new(
            KeyCode::Char('e'),
            KeyModifiers::CONTROL
        )));
        assert!(!app.wants_execute(&key(KeyCode::Char('e'))));
        assert!(!app.wants_execute(&key(KeyCode::Tab)));
    }

    #[test]
    fn help_popup_swallows_execute_keys() {
        let mut app = App::new(DbConfig::default());
        app.handle_key(key(KeyCode::F(1)));
        assert!(app.show_help);
        assert!(!app.wants_execute(&key(KeyCode::Enter)));

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(app.wants_execute(&key(KeyCode::Enter)));
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut app = App::new(DbConfig::default());
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('d')));
        match app.active_tab() {
            Tab::Procedure(form) => assert_eq!(form.inputs[0], "jd"),
            Tab::View(_) => panic!("first tab should be a procedure"),
        }
    }
}
