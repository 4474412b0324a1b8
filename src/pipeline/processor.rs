use crate::bands::Band;
use crate::calibration::SceneParameters;
use crate::grid::{ChannelReduction, Grid, GridError, calibrate};
use crate::readers::{FileError, ReadError, create_reader};
use crate::textgrid::{self, TextGridError};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum PipelineError {
    File(FileError),
    Read(ReadError),
    Grid(GridError),
    Text(TextGridError),
    Config(crate::config::ConfigError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::File(e) => write!(f, "{}", e),
            PipelineError::Read(e) => write!(f, "{}", e),
            PipelineError::Grid(e) => write!(f, "{}", e),
            PipelineError::Text(e) => write!(f, "{}", e),
            PipelineError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<FileError> for PipelineError {
    fn from(err: FileError) -> PipelineError {
        PipelineError::File(err)
    }
}

impl From<ReadError> for PipelineError {
    fn from(err: ReadError) -> PipelineError {
        PipelineError::Read(err)
    }
}

impl From<GridError> for PipelineError {
    fn from(err: GridError) -> PipelineError {
        PipelineError::Grid(err)
    }
}

impl From<TextGridError> for PipelineError {
    fn from(err: TextGridError) -> PipelineError {
        PipelineError::Text(err)
    }
}

impl From<crate::config::ConfigError> for PipelineError {
    fn from(err: crate::config::ConfigError) -> PipelineError {
        PipelineError::Config(err)
    }
}

/// Result of calibrating one raster.
#[derive(Debug, Clone)]
pub struct ImageSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub finite_pixels: usize,
}

impl ImageSummary {
    fn from_grid(input: PathBuf, output: PathBuf, grid: &Grid) -> Self {
        let finite: Vec<f32> = grid.data.iter().filter(|v| v.is_finite()).copied().collect();

        let min = finite.iter().fold(f32::INFINITY, |a, &b| a.min(b));
        let max = finite.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let mean = if finite.is_empty() {
            f32::NAN
        } else {
            finite.iter().sum::<f32>() / finite.len() as f32
        };

        Self {
            input,
            output,
            width: grid.width,
            height: grid.height,
            min,
            max,
            mean,
            finite_pixels: finite.len(),
        }
    }
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}x{}, min: {:.4}, max: {:.4}, mean: {:.4}, finite: {}/{})",
            self.input.display(),
            self.output.display(),
            self.width,
            self.height,
            self.min,
            self.max,
            self.mean,
            self.finite_pixels,
            self.width as usize * self.height as usize,
        )
    }
}

/// Calibrates a single raster end to end.
pub struct ImageProcessor {
    pub band: Band,
    pub scene: SceneParameters,
    pub reduction: ChannelReduction,
    pub output_suffix: String,
}

impl ImageProcessor {
    /// Output path for an input raster: the extension is replaced by the
    /// configured suffix, e.g. `scene.tif` -> `scene_toa.txt`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        input.with_file_name(format!("{}{}", stem, self.output_suffix))
    }

    pub fn process(&self, input: &Path) -> Result<ImageSummary, PipelineError> {
        let reader = create_reader(input.to_string_lossy().to_string())?;
        let raw = reader.read_raster()?;

        let reflectance = calibrate(&raw, self.band, &self.scene, self.reduction)?;

        let output = self.output_path(input);
        textgrid::write_grid(&reflectance, &output)?;

        Ok(ImageSummary::from_grid(
            input.to_path_buf(),
            output,
            &reflectance,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::toa_reflectance;
    use crate::writers::write_geotiff;
    use tempfile::tempdir;

    fn processor() -> ImageProcessor {
        ImageProcessor {
            band: Band::Red,
            scene: SceneParameters {
                abscal_factor: 0.01,
                earth_sun_distance_au: 1.0,
                solar_zenith_angle_rad: 0.5,
            },
            reduction: ChannelReduction::Mean,
            output_suffix: "_toa.txt".to_string(),
        }
    }

    #[test]
    fn test_output_path() {
        let p = processor();
        assert_eq!(
            p.output_path(Path::new("/data/scene.tif")),
            PathBuf::from("/data/scene_toa.txt")
        );
    }

    #[test]
    fn test_process_writes_parseable_grid() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scene.tif");

        let grid = Grid::new(2, 2, 1, vec![0.0, 50.0, 100.0, 200.0]).unwrap();
        write_geotiff(&grid, &input).unwrap();

        let summary = processor().process(&input).unwrap();

        assert_eq!(summary.width, 2);
        assert_eq!(summary.height, 2);
        assert_eq!(summary.finite_pixels, 4);

        let back = textgrid::read_grid(&summary.output).unwrap();
        assert_eq!(back.width, 2);
        assert_eq!(back.height, 2);

        let expected =
            toa_reflectance(100.0, Band::Red, &processor().scene).unwrap() as f32;
        assert_eq!(back.sample(0, 1, 0), expected);
    }

    #[test]
    fn test_unsupported_input_rejected() {
        let err = processor().process(Path::new("scene.jp2")).unwrap_err();
        assert!(matches!(err, PipelineError::File(_)));
    }
}
