use crate::config::Config;
use crate::pipeline::processor::{ImageProcessor, ImageSummary, PipelineError};

/// Runs every raster named by the config through the calibration pipeline,
/// sequentially, stopping at the first failure.
#[derive(Debug)]
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        BatchProcessor { config }
    }

    pub fn process(&self) -> Result<Vec<ImageSummary>, PipelineError> {
        let inputs = self.config.resolve_inputs()?;

        let processor = ImageProcessor {
            band: self.config.band(),
            scene: *self.config.scene(),
            reduction: self.config.channel_reduction(),
            output_suffix: self.config.output_suffix().to_string(),
        };

        let mut summaries = Vec::with_capacity(inputs.len());
        for input in &inputs {
            println!("Calibrating {}...", input.display());
            summaries.push(processor.process(input)?);
        }

        Ok(summaries)
    }
}
