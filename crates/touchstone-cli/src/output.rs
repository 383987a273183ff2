//! Summary formatting for the info command.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use touchstone_core::{Resistance, Touchstone};

/// What `info` reports about a parsed file
#[derive(Debug, Serialize)]
pub struct Summary {
    pub file: String,
    pub nports: Option<usize>,
    pub nfreq: usize,
    pub parameter: Option<String>,
    pub format: Option<String>,
    pub resistance: Resistance,
    pub unit: Option<String>,
    pub start_hz: Option<f64>,
    pub stop_hz: Option<f64>,
    pub comments: Vec<String>,
}

impl Summary {
    pub fn new(file: &Path, ts: &Touchstone) -> Self {
        let frequency = ts.frequency().filter(|f| f.npoints() > 0);
        Self {
            file: file.display().to_string(),
            nports: ts.nports(),
            nfreq: ts.nfreq(),
            parameter: ts.parameter().map(|p| p.to_string()),
            format: ts.format().map(|f| f.to_string()),
            resistance: ts.resistance().clone(),
            unit: ts.frequency().map(|f| f.unit().to_string()),
            start_hz: frequency.map(|f| f.start()),
            stop_hz: frequency.map(|f| f.stop()),
            comments: ts.comments().to_vec(),
        }
    }
}

fn or_unset<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Touchstone File: {}", self.file)?;
        writeln!(f, "  Ports: {}", or_unset(&self.nports))?;
        writeln!(f, "  Parameter: {}", or_unset(&self.parameter))?;
        writeln!(f, "  Format: {}", or_unset(&self.format))?;
        writeln!(f, "  Resistance: {} ohms", self.resistance)?;
        writeln!(f, "  Frequency points: {}", self.nfreq)?;
        if let (Some(start), Some(stop)) = (self.start_hz, self.stop_hz) {
            writeln!(f, "  Frequency range: {} Hz - {} Hz", start, stop)?;
        }
        if !self.comments.is_empty() {
            writeln!(f, "\nComments:")?;
            for comment in &self.comments {
                writeln!(f, "  {}", comment)?;
            }
        }
        Ok(())
    }
}
