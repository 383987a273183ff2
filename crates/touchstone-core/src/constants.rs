//! Constants of the Touchstone v1.x format
//!
//! Defaults applied when the option line omits a field, plus the writer's
//! layout defaults.

use crate::frequency::FrequencyUnit;
use crate::touchstone::{ParameterType, TouchstoneFormat};

/// Reference resistance in ohms when the option line has no `R` clause.
pub const DEFAULT_RESISTANCE: f64 = 50.0;

/// Frequency unit when the option line omits it.
pub const DEFAULT_FREQUENCY_UNIT: FrequencyUnit = FrequencyUnit::GHz;

/// Parameter type when the option line omits it.
pub const DEFAULT_PARAMETER: ParameterType = ParameterType::S;

/// Data format when the option line omits it.
pub const DEFAULT_FORMAT: TouchstoneFormat = TouchstoneFormat::MA;

/// Decimal places written for each data value.
pub const DEFAULT_PRECISION: usize = 9;

/// Value pairs per physical line for networks with three or more ports.
/// Touchstone 1.1 limits a data line to four pairs.
pub const DEFAULT_PAIRS_PER_LINE: usize = 4;

/// Marker starting a comment, full-line or trailing.
pub const COMMENT_MARKER: char = '!';

/// Marker starting the option line.
pub const OPTION_MARKER: char = '#';
