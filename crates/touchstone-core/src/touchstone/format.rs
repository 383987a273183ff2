//! Data formats and parameter types of the option line
//!
//! - RI: real and imaginary, `a + j b`
//! - MA: magnitude and angle in degrees, `a e^(j b pi / 180)`
//! - DB: decibels and angle in degrees, `10^(a / 20) e^(j b pi / 180)`

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TouchstoneError;
use crate::math::conversions::{
    complex_2_db, complex_2_degree, complex_2_magnitude, dbdeg_2_reim, magdeg_2_reim,
};

/// Numeric representation of each complex sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchstoneFormat {
    /// Real-Imaginary
    RI,
    /// Magnitude-Angle (degrees)
    MA,
    /// dB-Angle (degrees)
    DB,
}

impl TouchstoneFormat {
    pub const ALL: [TouchstoneFormat; 3] =
        [TouchstoneFormat::RI, TouchstoneFormat::MA, TouchstoneFormat::DB];

    pub fn as_str(self) -> &'static str {
        match self {
            TouchstoneFormat::RI => "RI",
            TouchstoneFormat::MA => "MA",
            TouchstoneFormat::DB => "DB",
        }
    }

    /// Convert a token pair into a complex value
    pub fn to_complex(self, a: f64, b: f64) -> Complex64 {
        match self {
            TouchstoneFormat::RI => Complex64::new(a, b),
            TouchstoneFormat::MA => magdeg_2_reim(a, b),
            TouchstoneFormat::DB => dbdeg_2_reim(a, b),
        }
    }

    /// Convert a complex value back into its token pair
    pub fn to_pair(self, z: Complex64) -> (f64, f64) {
        match self {
            TouchstoneFormat::RI => (z.re, z.im),
            TouchstoneFormat::MA => (complex_2_magnitude(z), complex_2_degree(z)),
            TouchstoneFormat::DB => (complex_2_db(z), complex_2_degree(z)),
        }
    }
}

impl FromStr for TouchstoneFormat {
    type Err = TouchstoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RI" => Ok(TouchstoneFormat::RI),
            "MA" => Ok(TouchstoneFormat::MA),
            "DB" => Ok(TouchstoneFormat::DB),
            _ => Err(TouchstoneError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TouchstoneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network parameter type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterType {
    /// Scattering parameters
    S,
    /// Admittance parameters
    Y,
    /// Impedance parameters
    Z,
    /// Hybrid-h parameters
    H,
    /// Hybrid-g parameters
    G,
}

impl ParameterType {
    pub const ALL: [ParameterType; 5] = [
        ParameterType::S,
        ParameterType::Y,
        ParameterType::Z,
        ParameterType::G,
        ParameterType::H,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterType::S => "S",
            ParameterType::Y => "Y",
            ParameterType::Z => "Z",
            ParameterType::H => "H",
            ParameterType::G => "G",
        }
    }
}

impl FromStr for ParameterType {
    type Err = TouchstoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" => Ok(ParameterType::S),
            "Y" => Ok(ParameterType::Y),
            "Z" => Ok(ParameterType::Z),
            "H" => Ok(ParameterType::H),
            "G" => Ok(ParameterType::G),
            _ => Err(TouchstoneError::UnknownParameter(s.to_string())),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
