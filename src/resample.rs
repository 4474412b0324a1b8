//! Integer-factor raster upsampling
//!
//! Nearest-neighbour upscale of a grid, with a helper that resamples a
//! GeoTIFF on disk and writes the result next to it with a `_resampled`
//! suffix. The workflow this replaces multiplied both raster dimensions
//! by five.

use crate::grid::Grid;
use crate::readers::{GeoTiffReader, RasterReader, ReadError};
use crate::writers::{WriteError, write_geotiff};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ResampleError {
    ZeroFactor,
    Read(ReadError),
    Write(WriteError),
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleError::ZeroFactor => write!(f, "resample factor must be at least 1"),
            ResampleError::Read(e) => write!(f, "{}", e),
            ResampleError::Write(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ResampleError {}

impl From<ReadError> for ResampleError {
    fn from(err: ReadError) -> ResampleError {
        ResampleError::Read(err)
    }
}

impl From<WriteError> for ResampleError {
    fn from(err: WriteError) -> ResampleError {
        ResampleError::Write(err)
    }
}

/// Nearest-neighbour upscale by an integer factor.
///
/// Every source pixel becomes a `factor` x `factor` block with identical
/// values; channels are carried through unchanged.
pub fn upscale(grid: &Grid, factor: u32) -> Result<Grid, ResampleError> {
    if factor == 0 {
        return Err(ResampleError::ZeroFactor);
    }

    let channels = grid.channels as usize;
    let out_width = grid.width * factor;
    let out_height = grid.height * factor;

    let mut data = Vec::with_capacity(out_width as usize * out_height as usize * channels);

    for y in 0..out_height {
        let src_y = y / factor;
        for x in 0..out_width {
            let src_x = x / factor;
            for c in 0..channels {
                data.push(grid.sample(src_x, src_y, c));
            }
        }
    }

    Ok(Grid {
        width: out_width,
        height: out_height,
        channels: grid.channels,
        data,
    })
}

/// Path of the resampled output for a given input, e.g.
/// `scene.tif` -> `scene_resampled.tif`.
pub fn resampled_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = input.extension().and_then(|e| e.to_str()).unwrap_or("tif");
    input.with_file_name(format!("{}_resampled.{}", stem, extension))
}

/// Read a single-band GeoTIFF, upscale it, and write the result beside the
/// input. Returns the output path.
pub fn resample_file<P: AsRef<Path>>(input: P, factor: u32) -> Result<PathBuf, ResampleError> {
    let input = input.as_ref();

    let reader = GeoTiffReader {
        file_name: input.to_string_lossy().to_string(),
    };
    let grid = reader.read_raster()?;
    let upscaled = upscale(&grid, factor)?;

    let output = resampled_path(input);
    write_geotiff(&upscaled, &output)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_upscale_dimensions() {
        let grid = Grid::new(2, 3, 1, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let up = upscale(&grid, 5).unwrap();

        assert_eq!(up.width, 10);
        assert_eq!(up.height, 15);
        assert_eq!(up.data.len(), 150);
    }

    #[test]
    fn test_upscale_replicates_values() {
        let grid = Grid::new(2, 1, 1, vec![1.0, 2.0]).unwrap();
        let up = upscale(&grid, 2).unwrap();

        assert_eq!(up.data, vec![1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_factor_one_is_identity() {
        let grid = Grid::new(2, 2, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(upscale(&grid, 1).unwrap(), grid);
    }

    #[test]
    fn test_zero_factor_rejected() {
        let grid = Grid::filled(2, 2, 0.0);
        assert!(matches!(upscale(&grid, 0), Err(ResampleError::ZeroFactor)));
    }

    #[test]
    fn test_resampled_path_suffix() {
        assert_eq!(
            resampled_path(Path::new("/data/scene.tif")),
            PathBuf::from("/data/scene_resampled.tif")
        );
        assert_eq!(
            resampled_path(Path::new("scene.tiff")),
            PathBuf::from("scene_resampled.tiff")
        );
    }

    #[test]
    fn test_resample_file_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("small.tif");

        let grid = Grid::new(2, 2, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        crate::writers::write_geotiff(&grid, &input).unwrap();

        let output = resample_file(&input, 5).unwrap();
        assert_eq!(output, dir.path().join("small_resampled.tif"));

        let back = GeoTiffReader {
            file_name: output.to_string_lossy().to_string(),
        }
        .read_raster()
        .unwrap();
        assert_eq!(back.width, 10);
        assert_eq!(back.height, 10);
        assert_eq!(back.sample(0, 0, 0), 1.0);
        assert_eq!(back.sample(9, 9, 0), 4.0);
    }
}
