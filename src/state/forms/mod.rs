//! Form domain layer
//!
//! Binds the request form to focusable inputs for the terminal editor.

mod editor;
mod field;

pub use editor::{EditorState, FormButton, PreviewMode, COPIED_NOTICE, NOTHING_TO_COPY_NOTICE};
pub use field::{Slot, SlotKind};
