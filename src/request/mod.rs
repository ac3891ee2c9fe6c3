//! Request builder: form state, validation and the request document mapping
//!
//! - `form`: the editable form state and its row mutations
//! - `document`: the immutable request document built from a valid form
//! - `sql`: read-only SQL preview of a request document

mod document;
mod error;
mod form;
mod sql;

pub use document::{build_request_document, RequestDocument};
pub use error::RequestError;
pub use form::FormState;
pub use sql::preview_sql;
