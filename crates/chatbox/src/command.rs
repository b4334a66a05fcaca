//! Input line parsing and normalization.

pub mod parser;
pub mod types;

pub use parser::{parse, DEFAULT_EXIT_COMMAND};
pub use types::Input;
