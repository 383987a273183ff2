//! Touchstone error type
//!
//! Message texts are matched on by downstream tooling and must stay stable,
//! including the historical spellings `paramter` and `Uknown`.

use thiserror::Error;

/// Touchstone parsing and configuration errors
#[derive(Error, Debug)]
pub enum TouchstoneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file extension: expected .sNp format")]
    InvalidExtension,

    // Configuration errors, raised by the document mutators.
    #[error("Unknown Touchstone format: {0}")]
    UnknownFormat(String),

    #[error("Unknown Touchstone paramter: {0}")]
    UnknownParameter(String),

    #[error("Unknown Touchstone frequency unit: {0}")]
    UnknownFrequencyUnit(String),

    #[error("Unknown Touchstone impedance: {0}")]
    UnknownImpedance(String),

    #[error("Unknown ports number: {0}")]
    UnknownPorts(String),

    // Parse errors, raised while consuming text.
    #[error("Unable to find the option line starting with \"#\"")]
    MissingOptionLine,

    #[error("Only one option line starting with \"#\" is supported, but found {0} lines")]
    MultipleOptionLines(usize),

    #[error("Uknown Touchstone impedance: {0}")]
    InvalidImpedanceClause(String),

    #[error("Touchstone invalid data value: {0}")]
    InvalidDataValue(String),

    #[error("Touchstone invalid data number: {count}, which should be multiple of {frame_size}")]
    InvalidDataNumber { count: usize, frame_size: usize },

    // Binding errors, raised when a matrix meets the rest of the document.
    #[error("Touchstone impedance has {found} values, but the network has {nports} ports")]
    ImpedanceCount { found: usize, nports: usize },

    #[error("Touchstone matrix shape {found:?} does not match the expected {expected:?}")]
    MatrixShape {
        found: (usize, usize, usize),
        expected: (usize, usize, usize),
    },

    #[error("Touchstone {0} is not defined")]
    Undefined(&'static str),
}
