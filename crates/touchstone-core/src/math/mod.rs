//! Mathematical functions module
//!
//! Conversions between complex numbers and magnitude / dB / phase forms.

pub mod conversions;

pub use conversions::*;
