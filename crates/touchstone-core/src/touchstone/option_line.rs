//! Option line parser
//!
//! `# <unit>? <parameter>? <format>? [R <value>+]`
//!
//! Fields appear in this fixed order, each one optional. Keywords are
//! case-insensitive.

use super::error::TouchstoneError;
use super::format::{ParameterType, TouchstoneFormat};
use super::resistance::Resistance;
use crate::constants::{
    COMMENT_MARKER, DEFAULT_FORMAT, DEFAULT_FREQUENCY_UNIT, DEFAULT_PARAMETER, OPTION_MARKER,
};
use crate::frequency::FrequencyUnit;

/// Header settings declared by the option line
#[derive(Debug, Clone, PartialEq)]
pub struct OptionLine {
    pub unit: FrequencyUnit,
    pub parameter: ParameterType,
    pub format: TouchstoneFormat,
    pub resistance: Resistance,
}

impl Default for OptionLine {
    fn default() -> Self {
        Self {
            unit: DEFAULT_FREQUENCY_UNIT,
            parameter: DEFAULT_PARAMETER,
            format: DEFAULT_FORMAT,
            resistance: Resistance::default(),
        }
    }
}

/// Positional fields before the resistance clause
#[derive(Debug, Clone, Copy)]
enum Field {
    Unit,
    Parameter,
    Format,
}

const FIELDS: [Field; 3] = [Field::Unit, Field::Parameter, Field::Format];

impl OptionLine {
    /// Parse an option line, with or without its leading `#`
    ///
    /// A trailing `!` comment is ignored.
    pub fn parse(line: &str) -> Result<Self, TouchstoneError> {
        let line = line.split(COMMENT_MARKER).next().unwrap_or_default().trim();
        let body = line.strip_prefix(OPTION_MARKER).unwrap_or(line);
        let tokens: Vec<&str> = body.split_whitespace().collect();

        let mut options = OptionLine::default();
        let mut rest = tokens.as_slice();
        // Index into FIELDS of the earliest field that may still appear
        let mut cursor = 0;

        while let Some(token) = rest.first() {
            let assigned = (cursor..FIELDS.len()).find(|&i| options.assign(FIELDS[i], token));
            match assigned {
                Some(i) => {
                    tracing::trace!(token = *token, field = ?FIELDS[i], "option line field");
                    cursor = i + 1;
                    rest = &rest[1..];
                }
                None => break,
            }
        }

        if let Some((head, values)) = rest.split_first() {
            if head.eq_ignore_ascii_case("r") {
                options.resistance = Resistance::from_tokens(values)
                    .ok_or_else(|| TouchstoneError::InvalidImpedanceClause(rest.join(" ")))?;
            } else {
                return Err(match FIELDS.get(cursor) {
                    Some(Field::Unit) => TouchstoneError::UnknownFrequencyUnit(head.to_string()),
                    Some(Field::Parameter) => TouchstoneError::UnknownParameter(head.to_string()),
                    Some(Field::Format) => TouchstoneError::UnknownFormat(head.to_string()),
                    None => TouchstoneError::InvalidImpedanceClause(rest.join(" ")),
                });
            }
        }

        Ok(options)
    }

    fn assign(&mut self, field: Field, token: &str) -> bool {
        match field {
            Field::Unit => token.parse().map(|unit| self.unit = unit).is_ok(),
            Field::Parameter => token.parse().map(|p| self.parameter = p).is_ok(),
            Field::Format => token.parse().map(|f| self.format = f).is_ok(),
        }
    }
}
