//! DN to top-of-atmosphere reflectance transform
//!
//! The transform is a pure function of the raw digital number, the band
//! calibration constants, and the per-acquisition scene parameters:
//!
//! ```text
//! L   = gain * (DN * abscal / effective_bandwidth) + offset
//! rho = (L * d^2 * pi) / (E_sun * cos(theta_s))
//! ```
//!
//! where `d` is the Earth-Sun distance in AU and `theta_s` the solar zenith
//! angle in radians. Reflectance is returned unclamped; values outside
//! [0, 1] pass through unchanged.

use crate::bands::{Band, UnknownBandError};
use crate::calibration::constants::{BandCalibration, calibration_for};
use std::f64::consts::PI;
use std::fmt;

/// Below this, cos(theta_s) is treated as zero. cos(PI/2) evaluates to
/// roughly 6e-17 in f64, so the exact singular angles are caught.
const MIN_SOLAR_COSINE: f64 = 1e-12;

/// Per-acquisition scalar inputs, read from image metadata or supplied by
/// the operator. Not derived by the transform itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParameters {
    /// Absolute calibration factor for the acquisition
    pub abscal_factor: f64,
    /// Earth-Sun distance [AU]
    pub earth_sun_distance_au: f64,
    /// Solar zenith angle [radians]
    pub solar_zenith_angle_rad: f64,
}

#[derive(Debug)]
pub enum CalibrationError {
    UnknownBand(UnknownBandError),
    /// The solar zenith angle puts the sun at the horizon, so the cosine
    /// term in the reflectance denominator vanishes.
    ZeroSolarCosine(f64),
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::UnknownBand(e) => write!(f, "{}", e),
            CalibrationError::ZeroSolarCosine(angle) => write!(
                f,
                "solar zenith angle {} rad has zero cosine, reflectance is undefined",
                angle
            ),
        }
    }
}

impl std::error::Error for CalibrationError {}

impl From<UnknownBandError> for CalibrationError {
    fn from(err: UnknownBandError) -> CalibrationError {
        CalibrationError::UnknownBand(err)
    }
}

/// TOA spectral radiance [W/m^2/sr/um] for a raw DN sample.
pub fn toa_radiance(dn: f64, cal: &BandCalibration, abscal_factor: f64) -> f64 {
    cal.gain * (dn * (abscal_factor / cal.effective_bandwidth)) + cal.offset
}

/// TOA reflectance for a raw DN sample in the given band.
///
/// Returns [`CalibrationError::ZeroSolarCosine`] when the solar zenith angle
/// is at (or numerically indistinguishable from) pi/2 + k*pi.
pub fn toa_reflectance(
    dn: f64,
    band: Band,
    scene: &SceneParameters,
) -> Result<f64, CalibrationError> {
    let cos_zenith = scene.solar_zenith_angle_rad.cos();
    if cos_zenith.abs() < MIN_SOLAR_COSINE {
        return Err(CalibrationError::ZeroSolarCosine(
            scene.solar_zenith_angle_rad,
        ));
    }

    let cal = calibration_for(band);
    let radiance = toa_radiance(dn, cal, scene.abscal_factor);

    Ok((radiance * scene.earth_sun_distance_au.powi(2) * PI) / (cal.solar_irradiance * cos_zenith))
}

/// Parse a band name and apply [`toa_reflectance`].
///
/// Convenience for callers holding a user-supplied band string; an unknown
/// name surfaces as [`CalibrationError::UnknownBand`].
pub fn toa_reflectance_named(
    dn: f64,
    band_name: &str,
    scene: &SceneParameters,
) -> Result<f64, CalibrationError> {
    let band: Band = band_name.parse()?;
    toa_reflectance(dn, band, scene)
}
