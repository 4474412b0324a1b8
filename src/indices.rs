//! Spectral index band math
//!
//! Normalized-difference indices computed from pairs of calibrated bands.
//! NDVI uses NIR against Red, NDWI uses NIR against a shortwave-infrared
//! band. A zero denominator yields a non-finite value (NaN or infinity),
//! which downstream statistics filter out like any other missing pixel.

use crate::grid::{Grid, GridError};

/// Normalized difference `(a - b) / (a + b)`.
pub fn normalized_difference(a: f32, b: f32) -> f32 {
    (a - b) / (a + b)
}

/// Normalized Difference Vegetation Index.
pub fn ndvi(nir: f32, red: f32) -> f32 {
    normalized_difference(nir, red)
}

/// Normalized Difference Water Index (Gao variant, NIR vs SWIR).
pub fn ndwi(nir: f32, swir: f32) -> f32 {
    normalized_difference(nir, swir)
}

/// Per-pixel normalized difference over two single-channel grids of equal
/// dimensions.
pub fn normalized_difference_grid(a: &Grid, b: &Grid) -> Result<Grid, GridError> {
    if a.width != b.width || a.height != b.height || a.channels != 1 || b.channels != 1 {
        return Err(GridError::DimensionMismatch);
    }

    let data = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| normalized_difference(x, y))
        .collect();

    Grid::new(a.width, a.height, 1, data)
}
