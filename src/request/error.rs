//! Request builder errors

use thiserror::Error;

use super::form::RowList;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// One or more required inputs are empty
    #[error("Please fill in all required fields.")]
    Validation { missing: Vec<String> },

    /// A row removal named an index past the end of its list
    #[error("{list} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        list: RowList,
        index: usize,
        len: usize,
    },
}
