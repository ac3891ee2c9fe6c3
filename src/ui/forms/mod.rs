//! Form rendering module
//!
//! - `field_renderer`: one line per form input
//! - `request_form`: the request form panel with its buttons row

mod field_renderer;
mod request_form;

pub use request_form::draw_request_form;
