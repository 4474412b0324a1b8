use crate::grid::Grid;
use std::fmt;
use std::path::Path;

pub trait RasterReader {
    fn read_raster(&self) -> Result<Grid, ReadError>;
}

#[derive(Debug)]
pub enum ReadError {
    GeoTiff(String),
    TextGrid(String),
}

#[derive(Debug)]
pub enum FileError {
    UnknownFileType,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    GeoTiff,
    TextGrid,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::GeoTiff(msg) => write!(f, "GeoTIFF read error: {}", msg),
            ReadError::TextGrid(msg) => write!(f, "text grid read error: {}", msg),
        }
    }
}

impl std::error::Error for ReadError {}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::UnknownFileType => write!(f, "unknown file type"),
        }
    }
}

impl std::error::Error for FileError {}

pub fn file_type_for_path(path: &Path) -> Result<FileType, FileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("tif") | Some("tiff") => Ok(FileType::GeoTiff),
        Some("txt") => Ok(FileType::TextGrid),
        _ => Err(FileError::UnknownFileType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(
            file_type_for_path(Path::new("a/b/scene.tiff")).unwrap(),
            FileType::GeoTiff
        );
        assert_eq!(
            file_type_for_path(Path::new("out.TXT")).unwrap(),
            FileType::TextGrid
        );
        assert!(file_type_for_path(Path::new("no_extension")).is_err());
        assert!(file_type_for_path(Path::new("scene.nc")).is_err());
    }
}
