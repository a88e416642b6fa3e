//! Business Supply Terminal UI - entry point
//!
//! Owns the terminal lifecycle: raw mode + alternate screen on start, restore
//! on exit, including the error and panic paths.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use supply_tui::app::App;
use supply_tui::config::DbConfig;

/// Leave the alternate screen and raw mode. Safe to call more than once.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Chain a terminal restore in front of the previous panic handler so a
/// panic inside the event loop does not leave the terminal in raw mode.
/// Runs before the default handler, so it also fires under `panic = "abort"`.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env for DB_* overrides; absence is fine.
    let _ = dotenvy::dotenv();

    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(DbConfig::default());
    let result = app.run(&mut terminal).await;

    // Restore the terminal whether the loop ended cleanly or not.
    restore_terminal();
    terminal.show_cursor()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn panic_hook_restores_then_chains_to_previous_handler() {
        let chained = Arc::new(AtomicBool::new(false));
        let probe = Arc::clone(&chained);

        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |_| {
            probe.store(true, Ordering::SeqCst);
        }));
        install_panic_hook();

        let result = std::thread::spawn(|| panic!("boom")).join();
        std::panic::set_hook(original);

        assert!(result.is_err());
        assert!(chained.load(Ordering::SeqCst));
    }
}
