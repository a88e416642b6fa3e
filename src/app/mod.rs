//! Application state and logic

mod actions;
mod handlers;
mod state;

pub use state::*;
