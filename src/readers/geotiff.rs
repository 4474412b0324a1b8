use super::{RasterReader, ReadError};
use crate::grid::Grid;
use std::fs::File;
use std::io::BufReader;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};

pub struct GeoTiffReader {
    pub file_name: String,
}

impl RasterReader for GeoTiffReader {
    fn read_raster(&self) -> Result<Grid, ReadError> {
        let file = File::open(&self.file_name)
            .map_err(|e| ReadError::GeoTiff(format!("Failed to open file: {}", e)))?;

        let reader = BufReader::new(file);

        let mut decoder = Decoder::new(reader)
            .map_err(|e| ReadError::GeoTiff(format!("Failed to decode TIFF: {}", e)))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ReadError::GeoTiff(format!("Failed to get dimensions: {}", e)))?;

        let channels = match decoder
            .colortype()
            .map_err(|e| ReadError::GeoTiff(format!("Failed to get color type: {}", e)))?
        {
            ColorType::Gray(_) => 1,
            ColorType::GrayA(_) => 2,
            ColorType::RGB(_) => 3,
            ColorType::RGBA(_) => 4,
            other => {
                return Err(ReadError::GeoTiff(format!(
                    "Unsupported color type: {:?}",
                    other
                )));
            }
        };

        let image_data: Vec<f32> = match decoder
            .read_image()
            .map_err(|e| ReadError::GeoTiff(format!("Failed to read image: {}", e)))?
        {
            DecodingResult::U8(data) => data.iter().map(|&x| x as f32).collect(),
            DecodingResult::U16(data) => data.iter().map(|&x| x as f32).collect(),
            DecodingResult::U32(data) => data.iter().map(|&x| x as f32).collect(),
            DecodingResult::F32(data) => data,
            DecodingResult::F64(data) => data.iter().map(|&x| x as f32).collect(),
            _ => return Err(ReadError::GeoTiff("Unsupported pixel format".to_string())),
        };

        Grid::new(width, height, channels, image_data)
            .map_err(|e| ReadError::GeoTiff(format!("Inconsistent raster buffer: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::write_geotiff;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_encoder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("single_band.tif");

        let grid = Grid::new(3, 2, 1, vec![0.0, 1.5, -2.0, 10.0, 0.25, 100.0]).unwrap();
        write_geotiff(&grid, &path).unwrap();

        let reader = GeoTiffReader {
            file_name: path.to_string_lossy().to_string(),
        };
        let back = reader.read_raster().unwrap();

        assert_eq!(back, grid);
    }

    #[test]
    fn test_missing_file() {
        let reader = GeoTiffReader {
            file_name: "/nonexistent/scene.tif".to_string(),
        };
        assert!(matches!(
            reader.read_raster(),
            Err(ReadError::GeoTiff(_))
        ));
    }
}
