//! UI widgets for the application

mod form;
mod viewer;

pub use form::draw_procedure_form;
pub use viewer::draw_view_browser;
