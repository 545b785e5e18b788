//! Conversion between text coordinates (`B7`) and 0-based grid indices.
//!
//! Rows are letters starting at `A`, columns are 1-based numbers. Bounds are
//! checked against the board size passed in, never a fixed constant.

use thiserror::Error;

/// Reasons a text coordinate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("empty input")]
    Empty,
    #[error("too short, need a row letter and a column number (e.g. A5)")]
    TooShort,
    #[error("invalid row '{0}', must be a letter")]
    InvalidRow(char),
    #[error("row '{row}' out of bounds, must be A-{last}")]
    RowOutOfRange { row: char, last: char },
    #[error("invalid column '{0}', must be a number")]
    InvalidColumn(String),
    #[error("column {col} out of bounds, must be 1-{max}")]
    ColumnOutOfRange { col: usize, max: usize },
}

/// Letter labelling row `row` (`0` → `A`).
pub fn row_label(row: usize) -> char {
    char::from(b'A' + (row % 26) as u8)
}

/// Format (`row`, `col`) as it would be typed, e.g. `(1, 6)` → `"B7"`.
pub fn format_coord(row: usize, col: usize) -> String {
    format!("{}{}", row_label(row), col + 1)
}

/// Parse a coordinate such as `b7` for a board of `board_size`.
pub fn parse_coord(input: &str, board_size: usize) -> Result<(usize, usize), CoordError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoordError::Empty);
    }
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(CoordError::Empty)?.to_ascii_uppercase();
    let rest = chars.as_str().trim();
    if rest.is_empty() {
        return Err(CoordError::TooShort);
    }
    if !row_ch.is_ascii_uppercase() {
        return Err(CoordError::InvalidRow(row_ch));
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= board_size {
        return Err(CoordError::RowOutOfRange {
            row: row_ch,
            last: row_label(board_size.saturating_sub(1)),
        });
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::InvalidColumn(rest.to_string()));
    }
    let col: usize = rest
        .parse()
        .map_err(|_| CoordError::InvalidColumn(rest.to_string()))?;
    if col == 0 || col > board_size {
        return Err(CoordError::ColumnOutOfRange {
            col,
            max: board_size,
        });
    }
    Ok((row, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_span_alphabet() {
        assert_eq!(row_label(0), 'A');
        assert_eq!(row_label(25), 'Z');
    }

    #[test]
    fn column_zero_is_rejected() {
        assert_eq!(
            parse_coord("A0", 15),
            Err(CoordError::ColumnOutOfRange { col: 0, max: 15 })
        );
    }
}
