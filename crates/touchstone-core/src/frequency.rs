//! Frequency module - the frequency axis of a Touchstone document
//!
//! Values are stored in the unit stated by the option line, so a file written
//! back out reproduces its frequency column exactly. Hz values are derived on
//! demand.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::touchstone::TouchstoneError;

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hz,
    #[serde(rename = "kHz")]
    KHz,
    MHz,
    #[default]
    GHz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    /// Canonical spelling used in option lines
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
        }
    }
}

impl FromStr for FrequencyUnit {
    type Err = TouchstoneError;

    /// Parse from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hz" => Ok(FrequencyUnit::Hz),
            "khz" => Ok(FrequencyUnit::KHz),
            "mhz" => Ok(FrequencyUnit::MHz),
            "ghz" => Ok(FrequencyUnit::GHz),
            _ => Err(TouchstoneError::UnknownFrequencyUnit(s.to_string())),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sweep type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    #[default]
    Linear,
    Log,
}

/// Frequency points of a document, paired with their unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    /// Display unit
    unit: FrequencyUnit,
    /// Frequency values expressed in `unit`
    value: Vec<f64>,
}

impl Frequency {
    /// Create a new Frequency with start/stop/npoints
    ///
    /// # Arguments
    /// * `start` - Start frequency in the specified unit
    /// * `stop` - Stop frequency in the specified unit
    /// * `npoints` - Number of frequency points
    /// * `unit` - Frequency unit
    /// * `sweep_type` - Linear or logarithmic sweep
    ///
    /// # Example
    /// ```
    /// use touchstone_core::frequency::{Frequency, FrequencyUnit, SweepType};
    /// let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::GHz, SweepType::Linear);
    /// assert_eq!(freq.npoints(), 10);
    /// ```
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: FrequencyUnit,
        sweep_type: SweepType,
    ) -> Self {
        let value = match (sweep_type, npoints) {
            (_, 0) => Vec::new(),
            (_, 1) => vec![start],
            (SweepType::Linear, _) => {
                let step = (stop - start) / (npoints - 1) as f64;
                (0..npoints).map(|i| start + i as f64 * step).collect()
            }
            (SweepType::Log, _) => {
                let log_start = start.ln();
                let log_step = (stop.ln() - log_start) / (npoints - 1) as f64;
                (0..npoints)
                    .map(|i| (log_start + i as f64 * log_step).exp())
                    .collect()
            }
        };

        Self { unit, value }
    }

    /// Create from values already expressed in `unit`
    pub fn from_values(value: Vec<f64>, unit: FrequencyUnit) -> Self {
        Self { unit, value }
    }

    /// Get frequency values in the stated unit
    #[inline]
    pub fn value(&self) -> &[f64] {
        &self.value
    }

    /// Get frequency vector in Hz
    pub fn f(&self) -> Vec<f64> {
        let mult = self.unit.multiplier();
        self.value.iter().map(|&x| x * mult).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.value.len()
    }

    /// Get the current unit
    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Get the start frequency in Hz
    pub fn start(&self) -> f64 {
        self.value.first().map_or(0.0, |&x| x * self.unit.multiplier())
    }

    /// Get the stop frequency in Hz
    pub fn stop(&self) -> f64 {
        self.value.last().map_or(0.0, |&x| x * self.unit.multiplier())
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.value.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_create_linear_sweep() {
        let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::GHz, SweepType::Linear);

        assert_eq!(freq.npoints(), 10);
        assert_relative_eq!(freq.start(), 1e9, epsilon = 1.0);
        assert_relative_eq!(freq.stop(), 10e9, epsilon = 1.0);
        assert_relative_eq!(freq.value()[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(freq.value()[9], 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_create_log_sweep() {
        let freq = Frequency::new(1.0, 1000.0, 4, FrequencyUnit::MHz, SweepType::Log);

        let ratios: Vec<f64> = freq.value().windows(2).map(|w| w[1] / w[0]).collect();
        for r in &ratios {
            assert_relative_eq!(*r, 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degenerate_sweeps() {
        assert_eq!(
            Frequency::new(1.0, 2.0, 0, FrequencyUnit::Hz, SweepType::Linear).npoints(),
            0
        );
        let single = Frequency::new(3.0, 9.0, 1, FrequencyUnit::Hz, SweepType::Log);
        assert_eq!(single.value(), &[3.0]);
    }

    #[test]
    fn test_from_values_keeps_stated_unit() {
        let freq = Frequency::from_values(vec![100.0, 200.0, 300.0], FrequencyUnit::MHz);

        assert_eq!(freq.value(), &[100.0, 200.0, 300.0]);
        assert_eq!(freq.unit(), FrequencyUnit::MHz);
        assert_relative_eq!(freq.f()[2], 300e6, epsilon = 1e-6);
    }

    #[test]
    fn test_frequency_unit_multiplier() {
        assert_eq!(FrequencyUnit::Hz.multiplier(), 1.0);
        assert_eq!(FrequencyUnit::KHz.multiplier(), 1e3);
        assert_eq!(FrequencyUnit::MHz.multiplier(), 1e6);
        assert_eq!(FrequencyUnit::GHz.multiplier(), 1e9);
    }

    #[test]
    fn test_frequency_unit_from_str() {
        assert_eq!("ghz".parse::<FrequencyUnit>().unwrap(), FrequencyUnit::GHz);
        assert_eq!("KHZ".parse::<FrequencyUnit>().unwrap(), FrequencyUnit::KHz);
        assert_eq!("MHz".parse::<FrequencyUnit>().unwrap(), FrequencyUnit::MHz);
        assert_eq!(
            "THz".parse::<FrequencyUnit>().unwrap_err().to_string(),
            "Unknown Touchstone frequency unit: THz"
        );
    }

    #[test]
    fn test_frequency_unit_display() {
        assert_eq!(FrequencyUnit::KHz.to_string(), "kHz");
        assert_eq!(FrequencyUnit::default(), FrequencyUnit::GHz);
    }
}
