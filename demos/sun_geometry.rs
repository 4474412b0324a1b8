use chrono::{Datelike, NaiveDate};
use sundog::calibration::SceneParameters;
use sundog::solar::{earth_sun_distance_au, sun_zenith_angle};

fn main() {
    let datetime = NaiveDate::from_ymd_opt(2023, 6, 21)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let (longitude, latitude) = (-75.0, 45.0);

    let zenith = sun_zenith_angle(datetime, longitude, latitude);
    let distance = earth_sun_distance_au(datetime.ordinal());

    println!("Acquisition: {} at ({}, {})", datetime, longitude, latitude);
    println!("Solar zenith angle: {:.2} deg", zenith);
    println!("Earth-Sun distance: {:.4} AU", distance);

    let scene = SceneParameters::from_acquisition(0.01, datetime, longitude, latitude);
    println!("Scene parameters: {:?}", scene);
}
