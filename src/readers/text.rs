use super::{RasterReader, ReadError};
use crate::grid::Grid;
use crate::textgrid;

/// Reads the plain-text reflectance grids written by the calibration
/// pipeline back into memory.
pub struct TextGridReader {
    pub file_name: String,
}

impl RasterReader for TextGridReader {
    fn read_raster(&self) -> Result<Grid, ReadError> {
        textgrid::read_grid(&self.file_name).map_err(|e| ReadError::TextGrid(e.to_string()))
    }
}
