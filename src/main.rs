use std::env;

use sundog::config::Config;
use sundog::pipeline::BatchProcessor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/config/run.json".to_string());

    println!("Starting TOA reflectance calibration...");

    let config = Config::from_file(&config_path)?;

    let processor = BatchProcessor::new(config);
    let summaries = processor.process()?;

    println!("Calibrated {} image(s)", summaries.len());
    for summary in &summaries {
        println!("  {}", summary);
    }

    Ok(())
}
