//! Reference resistance of a Touchstone document
//!
//! Touchstone 1.0 states one resistance for every port; Touchstone 1.1 allows
//! one value per port after the `R` keyword.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::error::TouchstoneError;
use super::value::{as_finite, format_number, stringify};
use crate::constants::DEFAULT_RESISTANCE;

/// Reference resistance(s) in ohms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resistance {
    /// One value shared by all ports
    Single(f64),
    /// One value per port, in port order
    PerPort(Vec<f64>),
}

impl Default for Resistance {
    fn default() -> Self {
        Resistance::Single(DEFAULT_RESISTANCE)
    }
}

impl Resistance {
    /// Check the invariants: finite values, non-empty per-port list
    pub fn validate(self) -> Result<Self, TouchstoneError> {
        let valid = match &self {
            Resistance::Single(r) => r.is_finite(),
            Resistance::PerPort(rs) => !rs.is_empty() && rs.iter().all(|r| r.is_finite()),
        };
        if valid {
            Ok(self.collapse())
        } else {
            Err(TouchstoneError::UnknownImpedance(self.describe()))
        }
    }

    /// Build from a loosely typed value: a number or an array of numbers
    ///
    /// A one-element array becomes `Single`, as it reads back from the option line.
    pub fn from_value(value: Option<&Value>) -> Result<Self, TouchstoneError> {
        let rejected = || TouchstoneError::UnknownImpedance(stringify(value));
        match value {
            Some(Value::Array(items)) if !items.is_empty() => items
                .iter()
                .map(as_finite)
                .collect::<Option<Vec<f64>>>()
                .map(|rs| Resistance::PerPort(rs).collapse())
                .ok_or_else(rejected),
            Some(v @ Value::Number(_)) => as_finite(v).map(Resistance::Single).ok_or_else(rejected),
            _ => Err(rejected()),
        }
    }

    /// Parse the values following `R` on the option line
    ///
    /// Returns `None` when there is no value or any value is not a finite number.
    pub fn from_tokens(tokens: &[&str]) -> Option<Self> {
        let values = tokens
            .iter()
            .map(|t| t.parse::<f64>().ok().filter(|r| r.is_finite()))
            .collect::<Option<Vec<f64>>>()?;
        match values.len() {
            0 => None,
            1 => Some(Resistance::Single(values[0])),
            _ => Some(Resistance::PerPort(values)),
        }
    }

    /// Resistance seen by `port` (0-based)
    pub fn for_port(&self, port: usize) -> Option<f64> {
        match self {
            Resistance::Single(r) => Some(*r),
            Resistance::PerPort(rs) => rs.get(port).copied(),
        }
    }

    /// Stated values, in order
    pub fn values(&self) -> &[f64] {
        match self {
            Resistance::Single(r) => std::slice::from_ref(r),
            Resistance::PerPort(rs) => rs,
        }
    }

    /// A per-port list must name every port once the port count is known
    pub(crate) fn check_ports(&self, nports: usize) -> Result<(), TouchstoneError> {
        match self {
            Resistance::PerPort(rs) if rs.len() != nports => Err(TouchstoneError::ImpedanceCount {
                found: rs.len(),
                nports,
            }),
            _ => Ok(()),
        }
    }

    /// `R x` is one value for every port, so a lone per-port value is the same
    /// resistance and is stored as `Single`
    fn collapse(self) -> Self {
        match self {
            Resistance::PerPort(rs) if rs.len() == 1 => Resistance::Single(rs[0]),
            other => other,
        }
    }

    fn describe(&self) -> String {
        self.values()
            .iter()
            .map(|&r| format_number(r))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Space separated, as written after `R` on the option line
impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for r in self.values() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", r)?;
            first = false;
        }
        Ok(())
    }
}
