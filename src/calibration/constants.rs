//! WorldView-3 radiometric calibration constants
//!
//! Per-band gain/offset figures from "Absolute Radiometric Calibration"
//! (Maxar, 2021). Effective bandwidths and band-averaged solar spectral
//! irradiance (Thuillier 2003) from "Radiometric Use of WorldView-3 Imagery"
//! (DigitalGlobe, 2016). These are fixed physical constants and are never
//! recomputed at runtime.

use crate::bands::Band;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Calibration constants for a single spectral band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandCalibration {
    /// Radiometric scale factor [dimensionless]
    pub gain: f64,
    /// Radiometric bias [W/m^2/sr/um]
    pub offset: f64,
    /// Effective bandwidth [um]
    pub effective_bandwidth: f64,
    /// Band-averaged solar spectral irradiance [W/m^2/um]
    pub solar_irradiance: f64,
}

/// Calibration table, exactly one entry per supported band.
pub static BAND_CALIBRATIONS: LazyLock<BTreeMap<Band, BandCalibration>> = LazyLock::new(|| {
    BTreeMap::from([
        (
            Band::Pan,
            BandCalibration {
                gain: 0.955,
                offset: -5.505,
                effective_bandwidth: 0.2896,
                solar_irradiance: 1574.41,
            },
        ),
        (
            Band::Coastal,
            BandCalibration {
                gain: 0.938,
                offset: -13.099,
                effective_bandwidth: 0.0405,
                solar_irradiance: 1757.89,
            },
        ),
        (
            Band::Blue,
            BandCalibration {
                gain: 0.946,
                offset: -9.409,
                effective_bandwidth: 0.0540,
                solar_irradiance: 2004.61,
            },
        ),
        (
            Band::Green,
            BandCalibration {
                gain: 0.958,
                offset: -7.771,
                effective_bandwidth: 0.0618,
                solar_irradiance: 1830.18,
            },
        ),
        (
            Band::Yellow,
            BandCalibration {
                gain: 0.979,
                offset: -5.489,
                effective_bandwidth: 0.0381,
                solar_irradiance: 1712.07,
            },
        ),
        (
            Band::Red,
            BandCalibration {
                gain: 0.969,
                offset: -4.579,
                effective_bandwidth: 0.0585,
                solar_irradiance: 1535.33,
            },
        ),
        (
            Band::RedEdge,
            BandCalibration {
                gain: 1.027,
                offset: -5.552,
                effective_bandwidth: 0.0387,
                solar_irradiance: 1348.08,
            },
        ),
        (
            Band::Nir1,
            BandCalibration {
                gain: 0.977,
                offset: -6.508,
                effective_bandwidth: 0.1004,
                solar_irradiance: 1055.94,
            },
        ),
        (
            Band::Nir2,
            BandCalibration {
                gain: 1.007,
                offset: -3.699,
                effective_bandwidth: 0.0889,
                solar_irradiance: 858.77,
            },
        ),
    ])
});

/// Look up the calibration constants for a band.
pub fn calibration_for(band: Band) -> &'static BandCalibration {
    // The table holds one entry per Band variant, so the lookup cannot miss.
    BAND_CALIBRATIONS.get(&band).unwrap()
}
