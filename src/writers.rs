//! GeoTIFF output
//!
//! Counterpart to the readers: encodes a single-channel grid as a 32-bit
//! float grayscale TIFF. Used by the resampler; calibration results go
//! through the text format instead.

use crate::grid::Grid;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tiff::encoder::{TiffEncoder, colortype};

#[derive(Debug)]
pub enum WriteError {
    MultiChannel(u8),
    GeoTiff(String),
    Io(std::io::Error),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::MultiChannel(c) => {
                write!(f, "cannot encode a {}-channel grid as single-band TIFF", c)
            }
            WriteError::GeoTiff(msg) => write!(f, "GeoTIFF write error: {}", msg),
            WriteError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for WriteError {}

impl From<std::io::Error> for WriteError {
    fn from(err: std::io::Error) -> WriteError {
        WriteError::Io(err)
    }
}

pub fn write_geotiff<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), WriteError> {
    if grid.channels != 1 {
        return Err(WriteError::MultiChannel(grid.channels));
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = TiffEncoder::new(writer)
        .map_err(|e| WriteError::GeoTiff(format!("Failed to create encoder: {}", e)))?;

    encoder
        .write_image::<colortype::Gray32Float>(grid.width, grid.height, &grid.data)
        .map_err(|e| WriteError::GeoTiff(format!("Failed to write image: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_multi_channel_rejected() {
        let dir = tempdir().unwrap();
        let grid = Grid::new(1, 1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        let err = write_geotiff(&grid, dir.path().join("rgb.tif")).unwrap_err();
        assert!(matches!(err, WriteError::MultiChannel(3)));
    }
}
