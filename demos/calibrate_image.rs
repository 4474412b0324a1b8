use sundog::bands::Band;
use sundog::calibration::SceneParameters;
use sundog::grid::{ChannelReduction, calibrate};
use sundog::readers;
use sundog::textgrid;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/scene.tif".to_string());

    let reader = readers::create_reader(input.clone())?;
    let raw = reader.read_raster()?;
    println!("Input: {}", raw);

    let scene = SceneParameters {
        abscal_factor: 0.01,
        earth_sun_distance_au: 1.0147,
        solar_zenith_angle_rad: 0.4369,
    };

    let reflectance = calibrate(&raw, Band::Red, &scene, ChannelReduction::Mean)?;
    println!("Reflectance: {}", reflectance);

    textgrid::write_grid(&reflectance, "./reflectance.txt")?;
    println!("Wrote ./reflectance.txt");

    Ok(())
}
