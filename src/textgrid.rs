//! Plain-text grid serialization
//!
//! The external contract for calibration output: one text row per raster row,
//! columns separated by single spaces, rows separated by newlines. A written
//! grid parses back into the same height x width matrix.

use crate::grid::Grid;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum TextGridError {
    /// Only single-channel grids have a text representation.
    MultiChannel(u8),
    /// A row had a different number of columns than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A field did not parse as a float.
    BadNumber { row: usize, col: usize },
    Io(std::io::Error),
}

impl std::fmt::Display for TextGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextGridError::MultiChannel(c) => {
                write!(f, "cannot serialize a {}-channel grid as text", c)
            }
            TextGridError::RaggedRow { row, expected, got } => {
                write!(f, "row {} has {} columns, expected {}", row, got, expected)
            }
            TextGridError::BadNumber { row, col } => {
                write!(f, "row {}, column {} is not a number", row, col)
            }
            TextGridError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for TextGridError {}

impl From<std::io::Error> for TextGridError {
    fn from(err: std::io::Error) -> TextGridError {
        TextGridError::Io(err)
    }
}

/// Render a single-channel grid in the text format.
pub fn format_grid(grid: &Grid) -> Result<String, TextGridError> {
    if grid.channels != 1 {
        return Err(TextGridError::MultiChannel(grid.channels));
    }

    let mut out = String::new();
    for row in grid.data.chunks_exact(grid.width as usize) {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Default float formatting is shortest round-trip, so parsing the
            // text recovers bit-identical f32 values.
            let _ = write!(out, "{}", value);
        }
        out.push('\n');
    }
    Ok(out)
}

/// Parse the text format back into a single-channel grid.
pub fn parse_grid(text: &str) -> Result<Grid, TextGridError> {
    let mut data = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0u32;

    for (row_idx, line) in text.lines().enumerate() {
        let mut cols = 0;
        for (col_idx, field) in line.split(' ').enumerate() {
            let value: f32 = field.parse().map_err(|_| TextGridError::BadNumber {
                row: row_idx,
                col: col_idx,
            })?;
            data.push(value);
            cols += 1;
        }

        match width {
            None => width = Some(cols),
            Some(expected) if expected != cols => {
                return Err(TextGridError::RaggedRow {
                    row: row_idx,
                    expected,
                    got: cols,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }

    Ok(Grid {
        width: width.unwrap_or(0) as u32,
        height,
        channels: 1,
        data,
    })
}

pub fn write_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), TextGridError> {
    let text = format_grid(grid)?;
    fs::write(path, text)?;
    Ok(())
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid, TextGridError> {
    let text = fs::read_to_string(path)?;
    parse_grid(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_layout() {
        let grid = Grid::new(3, 2, 1, vec![1.0, 2.5, 3.0, 4.0, 5.0, 6.25]).unwrap();
        let text = format_grid(&grid).unwrap();
        assert_eq!(text, "1 2.5 3\n4 5 6.25\n");
    }

    #[test]
    fn test_round_trip() {
        let grid = Grid::new(
            2,
            3,
            1,
            vec![0.027919, -0.0093, 1.5e-7, 42.0, f32::MIN_POSITIVE, 0.1],
        )
        .unwrap();

        let parsed = parse_grid(&format_grid(&grid).unwrap()).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_multi_channel_rejected() {
        let grid = Grid::new(1, 1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            format_grid(&grid),
            Err(TextGridError::MultiChannel(3))
        ));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = parse_grid("1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            TextGridError::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_bad_number_rejected() {
        let err = parse_grid("1 2\n3 x\n").unwrap_err();
        assert!(matches!(err, TextGridError::BadNumber { row: 1, col: 1 }));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reflectance.txt");

        let grid = Grid::new(2, 2, 1, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        write_grid(&grid, &path).unwrap();

        let back = read_grid(&path).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_empty_input() {
        let grid = parse_grid("").unwrap();
        assert_eq!(grid.height, 0);
        assert_eq!(grid.data.len(), 0);
    }
}
