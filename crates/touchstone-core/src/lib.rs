//! touchstone-core: Touchstone (.sNp) codec
//!
//! Reads and writes the ASCII network-parameter files (S, Y, Z, H, G) of
//! Touchstone versions 1.0 and 1.1.
//!
//! ## Modules
//!
//! - `frequency` - Frequency points with their unit
//! - `math` - Complex number conversions (magnitude, dB, degrees)
//! - `touchstone` - Option line, data block framing, parser and writer
//!
//! ## Example
//!
//! ```
//! use touchstone_core::{Touchstone, TouchstoneFormat};
//!
//! let text = "! 1-port\n# MHz S MA R 50\n100 0.99 -4\n200 0.80 -22\n";
//! let ts = Touchstone::from_str(text, 1).unwrap();
//! assert_eq!(ts.frequency().unwrap().value(), &[100.0, 200.0]);
//!
//! let ri = ts.with_format(TouchstoneFormat::RI).to_touchstone_string().unwrap();
//! assert!(ri.contains("# MHz S RI R 50"));
//! ```

pub mod constants;
pub mod frequency;
pub mod math;
pub mod touchstone;

pub use frequency::{Frequency, FrequencyUnit};
pub use touchstone::{
    ParameterType, Resistance, Touchstone, TouchstoneError, TouchstoneFormat, WriterOptions,
};
