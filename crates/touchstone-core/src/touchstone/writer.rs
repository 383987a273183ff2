//! Touchstone file writer
//!
//! Writes a document back to Touchstone v1.1 text using the same layout rules
//! the parser understands.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::TouchstoneError;
use super::frame::port_order;
use super::parser::Touchstone;
use crate::constants::{
    COMMENT_MARKER, DEFAULT_FORMAT, DEFAULT_PAIRS_PER_LINE, DEFAULT_PARAMETER, DEFAULT_PRECISION,
    OPTION_MARKER,
};

/// Layout settings for the data block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Decimal places of each data value
    pub precision: usize,
    /// Maximum value pairs on one physical line, for 3 ports and more
    pub pairs_per_line: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            pairs_per_line: DEFAULT_PAIRS_PER_LINE,
        }
    }
}

impl Touchstone {
    /// Write to a Touchstone file
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), TouchstoneError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write to a writer with the default layout
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), TouchstoneError> {
        self.write_with(writer, &WriterOptions::default())
    }

    /// Render the document as Touchstone text
    pub fn to_touchstone_string(&self) -> Result<String, TouchstoneError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        // Everything written is ASCII or comes from `String`s
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write to a writer
    ///
    /// An unset format or parameter is written as the option line default
    /// (MA, S). The port count and frequency points must be set.
    pub fn write_with<W: Write>(
        &self,
        writer: &mut W,
        options: &WriterOptions,
    ) -> Result<(), TouchstoneError> {
        let expected = self.expected_shape()?;
        if self.matrix().dim() != expected {
            return Err(TouchstoneError::MatrixShape {
                found: self.matrix().dim(),
                expected,
            });
        }
        let (nports, _, _) = expected;
        let frequency = self
            .frequency()
            .ok_or(TouchstoneError::Undefined("frequency"))?;
        let format = self.format().unwrap_or(DEFAULT_FORMAT);
        let parameter = self.parameter().unwrap_or(DEFAULT_PARAMETER);

        // Write comments
        for comment in self.comments() {
            writeln!(writer, "{} {}", COMMENT_MARKER, comment)?;
        }

        // Write option line
        writeln!(
            writer,
            "{} {} {} {} R {}",
            OPTION_MARKER,
            frequency.unit(),
            parameter,
            format,
            self.resistance()
        )?;

        // Write data
        let precision = options.precision;
        let width = precision + 8;
        let pairs_per_line = options.pairs_per_line.max(1);
        let matrix = self.matrix();

        for (k, freq) in frequency.value().iter().enumerate() {
            write!(writer, "{:<15}", freq)?;

            for (p, (i, j)) in port_order(nports).enumerate() {
                // 3+ ports: every matrix row starts a line, long rows wrap
                let column = p % nports;
                let wraps = nports > 2 && p > 0 && column % pairs_per_line == 0;
                if wraps {
                    write!(writer, "\n{:15}", "")?;
                }

                let (a, b) = format.to_pair(matrix[[i, j, k]]);
                write!(
                    writer,
                    " {:>width$.precision$} {:>width$.precision$}",
                    a,
                    b,
                    width = width,
                    precision = precision
                )?;
            }

            writeln!(writer)?;
        }

        tracing::debug!(
            nports,
            nfreq = frequency.npoints(),
            format = %format,
            "wrote Touchstone data"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{Frequency, FrequencyUnit};
    use crate::touchstone::{ParameterType, Resistance, TouchstoneFormat};
    use ndarray::Array3;
    use num_complex::Complex64;

    fn one_port() -> Touchstone {
        let mut ts = Touchstone::new();
        ts.set_comments(vec!["one port".to_string()]);
        ts.set_format(Some(TouchstoneFormat::RI));
        ts.set_parameter(Some(ParameterType::S));
        ts.set_nports(Some(1)).unwrap();
        ts.set_frequency(Some(Frequency::from_values(
            vec![100.0, 200.0],
            FrequencyUnit::MHz,
        )));
        let mut matrix = Array3::zeros((1, 1, 2));
        matrix[[0, 0, 0]] = Complex64::new(0.5, -0.25);
        matrix[[0, 0, 1]] = Complex64::new(0.125, 0.0);
        ts.set_matrix(matrix).unwrap();
        ts
    }

    #[test]
    fn test_header_lines() {
        let text = one_port().to_touchstone_string().unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("! one port"));
        assert_eq!(lines.next(), Some("# MHz S RI R 50"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_data_line_precision() {
        let mut buf = Vec::new();
        let options = WriterOptions {
            precision: 3,
            ..WriterOptions::default()
        };
        one_port().write_with(&mut buf, &options).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let data: Vec<&str> = text.lines().nth(2).unwrap().split_whitespace().collect();
        assert_eq!(data, vec!["100", "0.500", "-0.250"]);
    }

    #[test]
    fn test_unset_fields_use_defaults() {
        let mut ts = one_port();
        ts.set_format(None);
        ts.set_parameter(None);
        ts.set_resistance(Resistance::Single(75.0)).unwrap();
        let text = ts.to_touchstone_string().unwrap();
        assert!(text.contains("# MHz S MA R 75"));
    }

    #[test]
    fn test_lone_per_port_resistance_round_trips() {
        let mut ts = one_port();
        ts.set_resistance(Resistance::PerPort(vec![10.0])).unwrap();
        let text = ts.to_touchstone_string().unwrap();
        assert!(text.contains("# MHz S RI R 10"));

        let reread = Touchstone::from_str(&text, 1).unwrap();
        assert_eq!(reread.resistance(), ts.resistance());
        assert_eq!(reread.resistance(), &Resistance::Single(10.0));
    }

    #[test]
    fn test_rows_wrap_after_four_pairs() {
        let nports = 5;
        let mut ts = Touchstone::new();
        ts.set_nports(Some(nports)).unwrap();
        ts.set_frequency(Some(Frequency::from_values(vec![1.0], FrequencyUnit::GHz)));
        ts.set_matrix(Array3::from_elem((nports, nports, 1), Complex64::new(0.1, 0.0)))
            .unwrap();

        let text = ts.to_touchstone_string().unwrap();
        let data: Vec<&str> = text.lines().skip(1).collect();
        // Each of the 5 rows takes a line of 4 pairs and a line of 1 pair
        assert_eq!(data.len(), 10);
        assert_eq!(data[0].split_whitespace().count(), 9);
        assert_eq!(data[1].split_whitespace().count(), 2);
        assert_eq!(data[2].split_whitespace().count(), 8);
    }

    #[test]
    fn test_requires_ports_and_shape() {
        assert_eq!(
            Touchstone::new().to_touchstone_string().unwrap_err().to_string(),
            "Touchstone ports number is not defined"
        );

        let mut ts = one_port();
        ts.set_frequency(Some(Frequency::from_values(
            vec![100.0, 200.0, 300.0],
            FrequencyUnit::MHz,
        )));
        assert!(matches!(
            ts.to_touchstone_string(),
            Err(TouchstoneError::MatrixShape { .. })
        ));
    }
}
