//! Radiometric calibration module
//!
//! Converts raw digital numbers (DN) from WorldView-3 imagery into
//! top-of-atmosphere (TOA) radiance and reflectance, using the published
//! per-band calibration constants.

pub mod constants;
pub mod toa;

pub use constants::{BAND_CALIBRATIONS, BandCalibration, calibration_for};
pub use toa::{
    CalibrationError, SceneParameters, toa_radiance, toa_reflectance, toa_reflectance_named,
};
