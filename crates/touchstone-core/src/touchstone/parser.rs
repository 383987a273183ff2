//! Touchstone document and parser
//!
//! Implements reading of Touchstone v1.0 and v1.1 files.

use ndarray::{s, Array3, ArrayView1};
use num_complex::Complex64;
use serde_json::Value;
use std::path::Path;

use super::error::TouchstoneError;
use super::format::{ParameterType, TouchstoneFormat};
use super::frame;
use super::option_line::OptionLine;
use super::resistance::Resistance;
use super::value::{is_unset, stringify};
use crate::constants::{COMMENT_MARKER, OPTION_MARKER};
use crate::frequency::Frequency;

/// Touchstone document: header settings plus the network data
///
/// Fields are private so every assignment goes through a validating mutator.
/// The matrix is indexed `[[output_port, input_port, frequency_index]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Touchstone {
    /// Comments from the file, `!` stripped, in order of appearance
    comments: Vec<String>,
    /// Data format (RI, MA, DB)
    format: Option<TouchstoneFormat>,
    /// Parameter type (S, Y, Z, H, G)
    parameter: Option<ParameterType>,
    /// Reference resistance
    resistance: Resistance,
    /// Number of ports
    nports: Option<usize>,
    /// Frequency points
    frequency: Option<Frequency>,
    /// Network data [nports, nports, nfreq]
    matrix: Array3<Complex64>,
}

impl Default for Touchstone {
    fn default() -> Self {
        Self::new()
    }
}

impl Touchstone {
    /// An empty document: nothing set, 50 ohm reference, no data
    pub fn new() -> Self {
        Self {
            comments: Vec::new(),
            format: None,
            parameter: None,
            resistance: Resistance::default(),
            nports: None,
            frequency: None,
            matrix: Array3::zeros((0, 0, 0)),
        }
    }

    /// Parse a Touchstone file, taking the port count from its `.sNp` extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TouchstoneError> {
        let path = path.as_ref();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or(TouchstoneError::InvalidExtension)?;
        let nports = Self::parse_extension(ext)?;

        Self::from_file_with_ports(path, nports)
    }

    /// Parse a Touchstone file with an explicit port count
    pub fn from_file_with_ports<P: AsRef<Path>>(
        path: P,
        nports: usize,
    ) -> Result<Self, TouchstoneError> {
        let path = path.as_ref();

        let from_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| Self::parse_extension(ext).ok());
        if let Some(expected) = from_extension.filter(|&n| n != nports) {
            tracing::warn!(
                "Port count mismatch: extension of {:?} suggests {} ports, reading {}",
                path,
                expected,
                nports
            );
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content, nports)
    }

    /// Parse extension to get number of ports
    pub(crate) fn parse_extension(ext: &str) -> Result<usize, TouchstoneError> {
        let ext_lower = ext.to_lowercase();
        ext_lower
            .strip_prefix('s')
            .and_then(|rest| rest.strip_suffix('p'))
            .and_then(|num| num.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .ok_or(TouchstoneError::InvalidExtension)
    }

    /// Parse from string content
    ///
    /// # Arguments
    /// * `content` - Touchstone file content as string
    /// * `nports` - Number of ports (typically derived from file extension, e.g., .s2p = 2 ports)
    ///
    /// # Example
    /// ```
    /// use touchstone_core::Touchstone;
    /// let content = "# GHz S RI R 50\n1.0 0.1 0.0 0.9 0.0 0.9 0.0 0.1 0.0";
    /// let ts = Touchstone::from_str(content, 2).unwrap();
    /// assert_eq!(ts.nfreq(), 1);
    /// ```
    pub fn from_str(content: &str, nports: usize) -> Result<Self, TouchstoneError> {
        let mut ts = Self::new();
        ts.read_str(content, nports)?;
        Ok(ts)
    }

    /// Parse `content` into this document, replacing what it held
    ///
    /// Header fields are committed before the data block is checked, so after a
    /// data error the document still reports its comments, format, parameter,
    /// resistance, port count and frequency unit.
    pub fn read_str(&mut self, content: &str, nports: usize) -> Result<(), TouchstoneError> {
        *self = Self::new();

        let mut option_lines = Vec::new();
        let mut data_lines = Vec::new();
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(comment) = line.strip_prefix(COMMENT_MARKER) {
                self.comments.push(comment.trim().to_string());
            } else if line.starts_with(OPTION_MARKER) {
                option_lines.push(line);
            } else {
                data_lines.push(line);
            }
        }

        let option_line = match option_lines.as_slice() {
            [] => return Err(TouchstoneError::MissingOptionLine),
            [line] => *line,
            lines => return Err(TouchstoneError::MultipleOptionLines(lines.len())),
        };
        let options = OptionLine::parse(option_line)?;
        self.parameter = Some(options.parameter);
        self.format = Some(options.format);
        self.resistance = options.resistance;
        self.frequency = Some(Frequency::from_values(Vec::new(), options.unit));
        self.set_nports(Some(nports))?;

        let tokens = frame::tokenize(data_lines)?;
        let frames = frame::frames(&tokens, nports)?;
        self.resistance.check_ports(nports)?;

        let nfreq = frames.len();
        let mut frequency = Frequency::from_values(Vec::with_capacity(nfreq), options.unit);
        let mut matrix = Array3::zeros((nports, nports, nfreq));
        for (k, frame) in frames.enumerate() {
            frequency.push(frame[0]);
            let pairs = frame[1..].chunks_exact(2);
            for ((output, input), pair) in frame::port_order(nports).zip(pairs) {
                matrix[[output, input, k]] = options.format.to_complex(pair[0], pair[1]);
            }
        }
        self.frequency = Some(frequency);
        self.matrix = matrix;

        tracing::debug!(
            nports,
            nfreq,
            format = %options.format,
            parameter = %options.parameter,
            "parsed Touchstone data"
        );
        Ok(())
    }

    /// Comments in the file header with "!" symbol at the beginning of each row
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn set_comments(&mut self, comments: Vec<String>) {
        self.comments = comments;
    }

    pub fn format(&self) -> Option<TouchstoneFormat> {
        self.format
    }

    pub fn set_format(&mut self, format: Option<TouchstoneFormat>) {
        self.format = format;
    }

    /// Assign the format from a loosely typed value
    ///
    /// Strings are matched case-insensitively; absent or null clears the field.
    pub fn set_format_value(&mut self, value: Option<&Value>) -> Result<(), TouchstoneError> {
        self.format = match value {
            _ if is_unset(value) => None,
            Some(Value::String(s)) => Some(s.parse()?),
            _ => return Err(TouchstoneError::UnknownFormat(stringify(value))),
        };
        Ok(())
    }

    pub fn parameter(&self) -> Option<ParameterType> {
        self.parameter
    }

    pub fn set_parameter(&mut self, parameter: Option<ParameterType>) {
        self.parameter = parameter;
    }

    /// Assign the parameter type from a loosely typed value
    ///
    /// Strings are matched case-insensitively; absent or null clears the field.
    pub fn set_parameter_value(&mut self, value: Option<&Value>) -> Result<(), TouchstoneError> {
        self.parameter = match value {
            _ if is_unset(value) => None,
            Some(Value::String(s)) => Some(s.parse()?),
            _ => return Err(TouchstoneError::UnknownParameter(stringify(value))),
        };
        Ok(())
    }

    /// Reference impedance(s) for the network parameters
    pub fn resistance(&self) -> &Resistance {
        &self.resistance
    }

    pub fn set_resistance(&mut self, resistance: Resistance) -> Result<(), TouchstoneError> {
        self.resistance = resistance.validate()?;
        Ok(())
    }

    /// Assign the resistance from a loosely typed value
    ///
    /// Unlike the other mutators, absent and null are rejected.
    pub fn set_resistance_value(&mut self, value: Option<&Value>) -> Result<(), TouchstoneError> {
        self.resistance = Resistance::from_value(value)?;
        Ok(())
    }

    /// The number of ports in the network
    pub fn nports(&self) -> Option<usize> {
        self.nports
    }

    /// Assign the port count
    ///
    /// The count must be positive and small enough for a frame size to exist.
    /// Once a matrix is bound, a count contradicting its shape is rejected.
    pub fn set_nports(&mut self, nports: Option<usize>) -> Result<(), TouchstoneError> {
        if let Some(n) = nports {
            if n == 0 || frame::frame_size(n).is_none() {
                return Err(TouchstoneError::UnknownPorts(n.to_string()));
            }
            let (outputs, _, nfreq) = self.matrix.dim();
            if self.has_matrix() && n != outputs {
                return Err(TouchstoneError::MatrixShape {
                    found: self.matrix.dim(),
                    expected: (n, n, nfreq),
                });
            }
        }
        self.nports = nports;
        Ok(())
    }

    /// Assign the port count from a loosely typed value
    ///
    /// Only positive whole numbers are accepted; absent or null clears the field.
    pub fn set_nports_value(&mut self, value: Option<&Value>) -> Result<(), TouchstoneError> {
        if is_unset(value) {
            self.nports = None;
            return Ok(());
        }
        let nports = value
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite() && n.fract() == 0.0 && *n >= 1.0 && *n <= u32::MAX as f64)
            .ok_or_else(|| TouchstoneError::UnknownPorts(stringify(value)))?;
        self.set_nports(Some(nports as usize))
    }

    /// Frequency points
    pub fn frequency(&self) -> Option<&Frequency> {
        self.frequency.as_ref()
    }

    pub fn set_frequency(&mut self, frequency: Option<Frequency>) {
        self.frequency = frequency;
    }

    /// Network data as `[[output_port, input_port, frequency_index]]`
    pub fn matrix(&self) -> &Array3<Complex64> {
        &self.matrix
    }

    /// Bind network data to the document
    ///
    /// The port count and the frequency points must already be set, and the
    /// shape must be `(nports, nports, nfreq)`.
    pub fn set_matrix(&mut self, matrix: Array3<Complex64>) -> Result<(), TouchstoneError> {
        let expected = self.expected_shape()?;
        if matrix.dim() != expected {
            return Err(TouchstoneError::MatrixShape {
                found: matrix.dim(),
                expected,
            });
        }
        self.matrix = matrix;
        Ok(())
    }

    /// Get the number of frequency points
    pub fn nfreq(&self) -> usize {
        self.matrix.dim().2
    }

    /// Samples of one matrix entry across frequency (0-based ports)
    pub fn port_pair(&self, output: usize, input: usize) -> Option<ArrayView1<'_, Complex64>> {
        let (outputs, inputs, _) = self.matrix.dim();
        (output < outputs && input < inputs).then(|| self.matrix.slice(s![output, input, ..]))
    }

    /// A copy of this document that will be written in another data format
    ///
    /// Samples are held as complex numbers, so only the text representation
    /// changes.
    pub fn with_format(&self, format: TouchstoneFormat) -> Self {
        Self {
            format: Some(format),
            ..self.clone()
        }
    }

    /// Whether network data has been bound, by parsing or `set_matrix`
    fn has_matrix(&self) -> bool {
        self.matrix.dim() != (0, 0, 0)
    }

    /// Shape the matrix must have, given the port count and frequency points
    pub(crate) fn expected_shape(&self) -> Result<(usize, usize, usize), TouchstoneError> {
        let nports = self.nports.ok_or(TouchstoneError::Undefined("ports number"))?;
        let nfreq = self
            .frequency
            .as_ref()
            .ok_or(TouchstoneError::Undefined("frequency"))?
            .npoints();
        self.resistance.check_ports(nports)?;
        Ok((nports, nports, nfreq))
    }
}
