use crate::bands::UnknownBandError;

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    UnknownBand(UnknownBandError),
    AbscalFactor,
    SceneParameters,
    HorizonZenith,
    Coordinates,
    DateParse(chrono::ParseError),
    NoInputs,
    Io(std::io::Error),
    Json(serde_json::Error),
    Pattern(glob::PatternError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownBand(e) => write!(f, "{}", e),
            ConfigError::AbscalFactor => {
                write!(f, "abscal_factor must be a finite positive number")
            }
            ConfigError::SceneParameters => write!(
                f,
                "provide either earth_sun_distance and solar_zenith_angle, or an acquisition block"
            ),
            ConfigError::HorizonZenith => {
                write!(f, "solar_zenith_angle puts the sun at the horizon")
            }
            ConfigError::Coordinates => write!(
                f,
                "longitude must be in [-180, 180] and latitude in [-90, 90]"
            ),
            ConfigError::DateParse(e) => write!(f, "Failed to parse datetime: {}", e),
            ConfigError::NoInputs => write!(f, "no input rasters given (inputs or globs)"),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
            ConfigError::Pattern(e) => write!(f, "Invalid glob pattern: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<UnknownBandError> for ConfigError {
    fn from(err: UnknownBandError) -> ConfigError {
        ConfigError::UnknownBand(err)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<chrono::ParseError> for ConfigError {
    fn from(err: chrono::ParseError) -> ConfigError {
        ConfigError::DateParse(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl From<glob::PatternError> for ConfigError {
    fn from(err: glob::PatternError) -> ConfigError {
        ConfigError::Pattern(err)
    }
}
