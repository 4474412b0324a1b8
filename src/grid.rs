//! Raster sample grids and batch calibration
//!
//! A [`Grid`] is a row-major, channel-interleaved buffer of raw samples.
//! [`calibrate`] maps the TOA reflectance transform over every sample and
//! reduces multi-channel pixels to a single scalar per pixel position.

use crate::bands::Band;
use crate::calibration::{CalibrationError, SceneParameters, toa_reflectance};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<f32>,
}

/// How a multi-channel pixel collapses to one scalar for output.
///
/// The original workflow silently averaged the three channels of RGB test
/// imagery; callers must now pick the reduction explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelReduction {
    /// Average all channels of each pixel
    Mean,
    /// Keep a single zero-based channel
    Channel(usize),
}

#[derive(Debug)]
pub enum GridError {
    BufferSize { expected: usize, got: usize },
    ChannelOutOfRange { channel: usize, channels: u8 },
    DimensionMismatch,
    Calibration(CalibrationError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BufferSize { expected, got } => {
                write!(f, "buffer holds {} samples, expected {}", got, expected)
            }
            GridError::ChannelOutOfRange { channel, channels } => {
                write!(f, "channel {} out of range for {}-channel grid", channel, channels)
            }
            GridError::DimensionMismatch => write!(f, "grids have different dimensions"),
            GridError::Calibration(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GridError {}

impl From<CalibrationError> for GridError {
    fn from(err: CalibrationError) -> GridError {
        GridError::Calibration(err)
    }
}

impl Grid {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<f32>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(GridError::BufferSize {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Single-channel grid filled with one value.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            channels: 1,
            data: vec![value; width as usize * height as usize],
        }
    }

    pub fn sample(&self, x: u32, y: u32, channel: usize) -> f32 {
        let idx = (y as usize * self.width as usize + x as usize) * self.channels as usize + channel;
        self.data[idx]
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min_value = self
            .data
            .iter()
            .filter(|&&x| !x.is_nan())
            .fold(f32::INFINITY, |a, &b| a.min(b));

        let max_value = self
            .data
            .iter()
            .filter(|&&x| !x.is_nan())
            .fold(f32::NEG_INFINITY, |a, &b| a.max(b));

        write!(
            f,
            "Width: {}, Height: {}, Channels: {}, Min value: {}, Max value: {}",
            self.width, self.height, self.channels, min_value, max_value,
        )
    }
}

/// Apply the TOA reflectance transform to every sample of `grid`.
///
/// Each pixel position is independent of every other, so iteration order does
/// not affect the result. The first sample that fails aborts the whole batch;
/// bad pixels are never silently skipped. Output is always one channel of
/// `height` x `width` reflectance values.
pub fn calibrate(
    grid: &Grid,
    band: Band,
    scene: &SceneParameters,
    reduction: ChannelReduction,
) -> Result<Grid, GridError> {
    let channels = grid.channels as usize;

    if let ChannelReduction::Channel(c) = reduction {
        if c >= channels {
            return Err(GridError::ChannelOutOfRange {
                channel: c,
                channels: grid.channels,
            });
        }
    }

    let mut out = Vec::with_capacity(grid.pixel_count());

    for pixel in grid.data.chunks_exact(channels) {
        let value = match reduction {
            ChannelReduction::Channel(c) => {
                toa_reflectance(pixel[c] as f64, band, scene)? as f32
            }
            ChannelReduction::Mean => {
                let mut sum = 0.0_f64;
                for &dn in pixel {
                    sum += toa_reflectance(dn as f64, band, scene)?;
                }
                (sum / channels as f64) as f32
            }
        };
        out.push(value);
    }

    Grid::new(grid.width, grid.height, 1, out)
}
