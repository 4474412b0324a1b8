//! WorldView-3 radiometric calibration toolkit
//!
//! Converts raw digital numbers to top-of-atmosphere reflectance using the
//! published per-band calibration constants, with batch processing over
//! GeoTIFF inputs, plain-text grid output, normalized-difference indices,
//! nearest-neighbour resampling, and solar geometry helpers.

pub mod bands;
pub mod calibration;
pub mod config;
pub mod grid;
pub mod indices;
pub mod pipeline;
pub mod readers;
pub mod resample;
pub mod solar;
pub mod textgrid;
pub mod writers;
