//! Business Supply Terminal UI - Library
//!
//! A tabbed terminal front end over the business_supply database: one
//! auto-generated form per catalog stored procedure, one read-only browser
//! per catalog view. All business rules live in the database.

pub mod app;
pub mod catalog;
pub mod config;
pub mod db;
pub mod ui;
