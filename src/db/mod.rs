//! Database module — per-operation connections, procedure calls, view queries

mod call;
mod client;
mod query;

pub use call::*;
pub use client::*;
pub use query::*;
