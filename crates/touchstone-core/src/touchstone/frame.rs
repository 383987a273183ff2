//! Data block framing
//!
//! The data block is one logical stream of numbers: line breaks carry no
//! meaning, so every data line is flattened into a single token sequence and
//! sliced into frames of `1 + 2 * nports^2` values, one frame per frequency.

use std::slice::ChunksExact;

use super::error::TouchstoneError;
use crate::constants::COMMENT_MARKER;

/// Number of tokens describing one frequency point
///
/// `None` when the count does not fit in `usize`.
pub fn frame_size(nports: usize) -> Option<usize> {
    nports
        .checked_mul(nports)
        .and_then(|n| n.checked_mul(2))
        .and_then(|n| n.checked_add(1))
}

/// Flatten data lines into numbers, dropping trailing `!` comments
pub fn tokenize<'a, I>(lines: I) -> Result<Vec<f64>, TouchstoneError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        let data = line.split(COMMENT_MARKER).next().unwrap_or_default();
        for token in data.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| TouchstoneError::InvalidDataValue(token.to_string()))?;
            tokens.push(value);
        }
    }
    Ok(tokens)
}

/// Slice the token stream into frames, one per frequency point
///
/// The stream must hold a positive whole number of frames.
pub fn frames(tokens: &[f64], nports: usize) -> Result<ChunksExact<'_, f64>, TouchstoneError> {
    let size =
        frame_size(nports).ok_or_else(|| TouchstoneError::UnknownPorts(nports.to_string()))?;
    if tokens.is_empty() || tokens.len() % size != 0 {
        return Err(TouchstoneError::InvalidDataNumber {
            count: tokens.len(),
            frame_size: size,
        });
    }
    Ok(tokens.chunks_exact(size))
}

/// `(output, input)` port coordinates (0-based) of each value pair in a frame
///
/// Frames list the matrix row by row, except 2-port files which keep the
/// historical column order `11 21 12 22`.
pub fn port_order(nports: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..nports * nports).map(move |k| {
        if nports == 2 {
            (k % nports, k / nports)
        } else {
            (k / nports, k % nports)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size() {
        assert_eq!(frame_size(1), Some(3));
        assert_eq!(frame_size(2), Some(9));
        assert_eq!(frame_size(3), Some(19));
        assert_eq!(frame_size(4), Some(33));
    }

    #[test]
    fn test_frame_size_overflow() {
        assert_eq!(frame_size(1 << 33), None);
        assert_eq!(frame_size(usize::MAX), None);
        assert_eq!(
            frames(&[1.0, 0.0, 0.0], usize::MAX).unwrap_err().to_string(),
            format!("Unknown ports number: {}", usize::MAX)
        );
    }

    #[test]
    fn test_tokenize_ignores_line_breaks_and_comments() {
        let lines = [
            "100 0.99",
            "-4 200 0.80   ! trailing note",
            "-22 300",
            "0.707 -45",
            "1.000E+06 +2.5e-1 .5",
        ];
        let tokens = tokenize(lines).unwrap();
        assert_eq!(
            tokens,
            vec![100.0, 0.99, -4.0, 200.0, 0.8, -22.0, 300.0, 0.707, -45.0, 1e6, 0.25, 0.5]
        );
    }

    #[test]
    fn test_tokenize_rejects_words() {
        let err = tokenize(["1.0 0.5 abc"]).unwrap_err();
        assert_eq!(err.to_string(), "Touchstone invalid data value: abc");
    }

    #[test]
    fn test_frames_require_whole_multiple() {
        let tokens = [100.0, 0.99, -4.0, 200.0, 0.8, -22.0, 300.0, 0.707];
        assert_eq!(
            frames(&tokens, 1).unwrap_err().to_string(),
            "Touchstone invalid data number: 8, which should be multiple of 3"
        );
        assert_eq!(
            frames(&[], 2).unwrap_err().to_string(),
            "Touchstone invalid data number: 0, which should be multiple of 9"
        );

        let tokens = [1.0; 6];
        let sliced: Vec<&[f64]> = frames(&tokens, 1).unwrap().collect();
        assert_eq!(sliced.len(), 2);
    }

    #[test]
    fn test_two_port_column_order() {
        let order: Vec<_> = port_order(2).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_row_major_order() {
        assert_eq!(port_order(1).collect::<Vec<_>>(), vec![(0, 0)]);

        let order: Vec<_> = port_order(3).collect();
        assert_eq!(
            order,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
        assert_eq!(port_order(5).nth(7), Some((1, 2)));
    }
}
