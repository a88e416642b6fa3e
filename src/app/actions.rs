//! Application actions - the Execute and Load operations
//!
//! Each action opens its own connection, runs one statement and folds the
//! outcome into the active tab's state. Actions are awaited to completion
//! before the next event is processed, so there is never more than one in
//! flight.

use crate::app::{App, FormStatus, Tab};
use crate::db;

impl App {
    /// Submit the active procedure form.
    ///
    /// Coercion happens first; a bad integer field fails the submit without
    /// opening a connection. Every failure, whatever its cause, collapses
    /// into the one generic failure status.
    pub async fn submit_active(&mut self) {
        let config = self.config.clone();
        let Tab::Procedure(form) = self.active_tab_mut() else {
            return;
        };

        let outcome = match db::coerce_all(form.descriptor, &form.inputs) {
            Ok(values) => db::call_procedure(&config, form.descriptor, &values).await,
            Err(e) => Err(e),
        };

        form.status = Some(match outcome {
            Ok(()) => FormStatus::Success,
            Err(_) => FormStatus::Failure,
        });
    }

    /// Load the active view tab, replacing its text wholesale.
    ///
    /// This is the one path where the failure description is shown.
    pub async fn load_active(&mut self) {
        let config = self.config.clone();
        let Tab::View(browser) = self.active_tab_mut() else {
            return;
        };

        let text = match db::load_view(&config, browser.name).await {
            Ok(result) => db::render_table(&result),
            Err(e) => db::render_load_error(&e),
        };
        browser.set_text(text);
    }

    /// Fire the action bound to Enter for the active tab.
    pub async fn run_active(&mut self) {
        if matches!(self.active_tab(), Tab::Procedure(_)) {
            self.submit_active().await;
        } else {
            self.load_active().await;
        }
    }
}
