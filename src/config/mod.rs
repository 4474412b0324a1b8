use chrono::NaiveDateTime;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::bands::Band;
use crate::calibration::SceneParameters;
use crate::grid::ChannelReduction;

pub mod error;
pub use error::ConfigError;

const DEFAULT_OUTPUT_SUFFIX: &str = "_toa.txt";

/// A validated calibration run configuration.
///
/// Scene scalars come either directly from the JSON file (copied out of the
/// image metadata) or are derived from an `acquisition` block with a
/// timestamp and ground location.
#[derive(Debug, Clone)]
pub struct Config {
    band: Band,
    scene: SceneParameters,
    channel_reduction: ChannelReduction,
    inputs: Vec<String>,
    globs: Vec<String>,
    output_suffix: String,
}

// Deserializes a Config, validating the band name, the numeric scene
// parameters, and the input list before the transform ever runs.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            band: String,
            abscal_factor: f64,
            earth_sun_distance: Option<f64>,
            solar_zenith_angle: Option<f64>,
            acquisition: Option<AcquisitionHelper>,
            channel_reduction: Option<ChannelReduction>,
            inputs: Option<Vec<String>>,
            globs: Option<Vec<String>>,
            output_suffix: Option<String>,
        }

        #[derive(Deserialize)]
        struct AcquisitionHelper {
            datetime: String,
            longitude: f64,
            latitude: f64,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let band: Band = helper
            .band
            .parse()
            .map_err(|e| D::Error::custom(ConfigError::UnknownBand(e)))?;

        if !helper.abscal_factor.is_finite() || helper.abscal_factor <= 0.0 {
            return Err(D::Error::custom(ConfigError::AbscalFactor));
        }

        let scene = match (
            helper.earth_sun_distance,
            helper.solar_zenith_angle,
            helper.acquisition,
        ) {
            (Some(esd), Some(sza), None) => {
                if !esd.is_finite() || esd <= 0.0 || !sza.is_finite() {
                    return Err(D::Error::custom(ConfigError::SceneParameters));
                }
                if sza.cos().abs() < 1e-12 {
                    return Err(D::Error::custom(ConfigError::HorizonZenith));
                }
                SceneParameters {
                    abscal_factor: helper.abscal_factor,
                    earth_sun_distance_au: esd,
                    solar_zenith_angle_rad: sza,
                }
            }
            (None, None, Some(acq)) => {
                if !(-180.0..=180.0).contains(&acq.longitude)
                    || !(-90.0..=90.0).contains(&acq.latitude)
                {
                    return Err(D::Error::custom(ConfigError::Coordinates));
                }
                let datetime =
                    NaiveDateTime::parse_from_str(&acq.datetime, "%Y-%m-%dT%H:%M:%S")
                        .map_err(|e| {
                            D::Error::custom(format!("Invalid acquisition datetime: {}", e))
                        })?;
                SceneParameters::from_acquisition(
                    helper.abscal_factor,
                    datetime,
                    acq.longitude,
                    acq.latitude,
                )
            }
            _ => return Err(D::Error::custom(ConfigError::SceneParameters)),
        };

        let inputs = helper.inputs.unwrap_or_default();
        let globs = helper.globs.unwrap_or_default();
        if inputs.is_empty() && globs.is_empty() {
            return Err(D::Error::custom(ConfigError::NoInputs));
        }

        Ok(Config {
            band,
            scene,
            channel_reduction: helper.channel_reduction.unwrap_or(ChannelReduction::Mean),
            inputs,
            globs,
            output_suffix: helper
                .output_suffix
                .unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_string()),
        })
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn scene(&self) -> &SceneParameters {
        &self.scene
    }

    pub fn channel_reduction(&self) -> ChannelReduction {
        self.channel_reduction
    }

    pub fn output_suffix(&self) -> &str {
        &self.output_suffix
    }

    /// Explicit input paths plus every match of the glob patterns, in
    /// config order.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths: Vec<PathBuf> = self.inputs.iter().map(PathBuf::from).collect();

        for pattern in &self.globs {
            for entry in glob::glob(pattern)? {
                match entry {
                    Ok(path) => paths.push(path),
                    Err(e) => return Err(ConfigError::Io(e.into_error())),
                }
            }
        }

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("run.json");
        let mut file = File::create(&file_path).unwrap();

        let config_data = r#"
    {
        "band": "Red",
        "abscal_factor": 0.01,
        "earth_sun_distance": 1.0,
        "solar_zenith_angle": 0.5,
        "inputs": ["./data/scene.tif"]
    }
    "#;

        file.write_all(config_data.as_bytes()).unwrap();

        let config = Config::from_file(file_path).unwrap();

        assert_eq!(config.band(), Band::Red);
        assert_eq!(config.scene().earth_sun_distance_au, 1.0);
        assert_eq!(config.channel_reduction(), ChannelReduction::Mean);
        assert_eq!(config.output_suffix(), "_toa.txt");
    }

    #[test]
    fn test_unknown_band_rejected() {
        let err = serde_json::from_str::<Config>(
            r#"{
                "band": "Purple",
                "abscal_factor": 0.01,
                "earth_sun_distance": 1.0,
                "solar_zenith_angle": 0.5,
                "inputs": ["a.tif"]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown band"));
    }

    #[test]
    fn test_non_positive_abscal_rejected() {
        let err = serde_json::from_str::<Config>(
            r#"{
                "band": "Red",
                "abscal_factor": 0.0,
                "earth_sun_distance": 1.0,
                "solar_zenith_angle": 0.5,
                "inputs": ["a.tif"]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("abscal_factor"));
    }

    #[test]
    fn test_scene_scalars_and_acquisition_are_exclusive() {
        let err = serde_json::from_str::<Config>(
            r#"{
                "band": "Red",
                "abscal_factor": 0.01,
                "earth_sun_distance": 1.0,
                "solar_zenith_angle": 0.5,
                "acquisition": {
                    "datetime": "2023-06-21T12:00:00",
                    "longitude": 0.0,
                    "latitude": 40.0
                },
                "inputs": ["a.tif"]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("acquisition block"));
    }

    #[test]
    fn test_horizon_zenith_rejected() {
        let err = serde_json::from_str::<Config>(
            r#"{
                "band": "Red",
                "abscal_factor": 0.01,
                "earth_sun_distance": 1.0,
                "solar_zenith_angle": 1.5707963267948966,
                "inputs": ["a.tif"]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("horizon"));
    }

    #[test]
    fn test_acquisition_block_derives_scene() {
        let config: Config = serde_json::from_str(
            r#"{
                "band": "NIR1",
                "abscal_factor": 0.02,
                "acquisition": {
                    "datetime": "2023-06-21T12:00:00",
                    "longitude": 0.0,
                    "latitude": 40.0
                },
                "channel_reduction": {"channel": 0},
                "inputs": ["a.tif"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.band(), Band::Nir1);
        assert_eq!(config.channel_reduction(), ChannelReduction::Channel(0));
        assert!(config.scene().earth_sun_distance_au > 1.0);
        assert!(config.scene().solar_zenith_angle_rad > 0.0);
    }

    #[test]
    fn test_missing_inputs_rejected() {
        let err = serde_json::from_str::<Config>(
            r#"{
                "band": "Red",
                "abscal_factor": 0.01,
                "earth_sun_distance": 1.0,
                "solar_zenith_angle": 0.5
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no input rasters"));
    }

    #[test]
    fn test_resolve_inputs_with_globs() {
        let dir = tempdir().unwrap();
        for name in ["a.tif", "b.tif", "skip.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let config: Config = serde_json::from_str(&format!(
            r#"{{
                "band": "Red",
                "abscal_factor": 0.01,
                "earth_sun_distance": 1.0,
                "solar_zenith_angle": 0.5,
                "globs": ["{}/*.tif"]
            }}"#,
            dir.path().display()
        ))
        .unwrap();

        let paths = config.resolve_inputs().unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.extension().unwrap() == "tif"));
    }
}
