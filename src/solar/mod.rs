//! Solar geometry
//!
//! Derives the per-acquisition scene inputs when no image metadata file is
//! available: solar zenith angle from the acquisition timestamp and ground
//! location, and Earth-Sun distance from the day of year.

use crate::calibration::SceneParameters;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::f64::consts::PI;

/// Solar zenith angle in degrees for a UTC timestamp and ground location.
///
/// Declination / hour-angle formulation; accurate to a fraction of a degree,
/// which is sufficient for the cosine term of the reflectance denominator.
pub fn sun_zenith_angle(date: NaiveDateTime, longitude: f64, latitude: f64) -> f64 {
    let days_in_year = 365.25;
    let declination_angle_max = 23.44;

    let day_of_year = date.ordinal() as f64;

    // Hour angle from local solar time, 15 degrees per hour off solar noon
    let time_of_day = date.num_seconds_from_midnight() as f64 / 3600.0;
    let solar_time = time_of_day + (4.0 * longitude) / 60.0;
    let hour_angle = 15.0 * (solar_time - 12.0);

    let declination_angle =
        declination_angle_max * (2.0 * PI * (day_of_year - 81.0) / days_in_year).sin();

    let latitude_rad = latitude.to_radians();
    let declination_rad = declination_angle.to_radians();

    let zenith_rad = (latitude_rad.sin() * declination_rad.sin()
        + latitude_rad.cos() * declination_rad.cos() * hour_angle.to_radians().cos())
    .acos();

    zenith_rad.to_degrees()
}

/// Earth-Sun distance in astronomical units for a day of year, from the
/// standard eccentricity approximation (about 0.983 AU at perihelion,
/// 1.017 AU at aphelion).
pub fn earth_sun_distance_au(day_of_year: u32) -> f64 {
    1.0 - 0.01672 * ((0.9856 * (day_of_year as f64 - 4.0)).to_radians()).cos()
}

impl SceneParameters {
    /// Build scene parameters from an acquisition timestamp and ground
    /// location instead of metadata-file scalars.
    pub fn from_acquisition(
        abscal_factor: f64,
        datetime: NaiveDateTime,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            abscal_factor,
            earth_sun_distance_au: earth_sun_distance_au(datetime.ordinal()),
            solar_zenith_angle_rad: sun_zenith_angle(datetime, longitude, latitude).to_radians(),
        }
    }
}
