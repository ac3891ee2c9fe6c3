//! Application state module

mod forms;
mod toast;

pub use forms::*;
pub use toast::Toast;
