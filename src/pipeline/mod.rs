//! Calibration pipeline
//!
//! Runs whole rasters through the TOA reflectance transform: read, calibrate,
//! reduce to a single channel, and write the plain-text grid beside the input.

pub mod batch;
pub mod processor;

pub use batch::BatchProcessor;
pub use processor::{ImageProcessor, ImageSummary, PipelineError};
