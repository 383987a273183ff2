//! Touchstone file I/O module
//!
//! Provides reading and writing of Touchstone v1.0 / v1.1 (.snp) files.

pub mod error;
pub mod format;
pub mod frame;
pub mod option_line;
pub mod parser;
pub mod resistance;
pub mod value;
pub mod writer;

pub use error::TouchstoneError;
pub use format::{ParameterType, TouchstoneFormat};
pub use option_line::OptionLine;
pub use parser::Touchstone;
pub use resistance::Resistance;
pub use writer::WriterOptions;
