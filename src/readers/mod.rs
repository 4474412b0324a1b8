pub mod geotiff;
pub mod text;
pub mod types;

pub use geotiff::GeoTiffReader;
pub use text::TextGridReader;
pub use types::{FileError, FileType, RasterReader, ReadError, file_type_for_path};

use std::path::Path;

/// Pick a reader from the file extension.
pub fn create_reader(file_name: String) -> Result<Box<dyn RasterReader>, FileError> {
    match file_type_for_path(Path::new(&file_name)) {
        Ok(FileType::GeoTiff) => Ok(Box::new(GeoTiffReader { file_name })),
        Ok(FileType::TextGrid) => Ok(Box::new(TextGridReader { file_name })),
        Err(e) => Err(e),
    }
}
