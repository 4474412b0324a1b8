use std::fmt;
use std::str::FromStr;

/// WorldView-3 spectral bands.
///
/// The panchromatic band plus the eight multispectral bands, in order of
/// increasing center wavelength. This is the full enumerated set supported by
/// the calibration table; any other band name is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    Pan,
    Coastal,
    Blue,
    Green,
    Yellow,
    Red,
    RedEdge,
    Nir1,
    Nir2,
}

impl Band {
    pub const ALL: [Band; 9] = [
        Band::Pan,
        Band::Coastal,
        Band::Blue,
        Band::Green,
        Band::Yellow,
        Band::Red,
        Band::RedEdge,
        Band::Nir1,
        Band::Nir2,
    ];

    /// Canonical band name as used in the sensor documentation.
    pub fn name(&self) -> &'static str {
        match self {
            Band::Pan => "Pan",
            Band::Coastal => "Coastal",
            Band::Blue => "Blue",
            Band::Green => "Green",
            Band::Yellow => "Yellow",
            Band::Red => "Red",
            Band::RedEdge => "RedEdge",
            Band::Nir1 => "NIR1",
            Band::Nir2 => "NIR2",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBandError(pub String);

impl fmt::Display for UnknownBandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown band '{}', expected one of Pan, Coastal, Blue, Green, Yellow, Red, RedEdge, NIR1, NIR2",
            self.0
        )
    }
}

impl std::error::Error for UnknownBandError {}

impl FromStr for Band {
    type Err = UnknownBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pan" => Ok(Band::Pan),
            "Coastal" => Ok(Band::Coastal),
            "Blue" => Ok(Band::Blue),
            "Green" => Ok(Band::Green),
            "Yellow" => Ok(Band::Yellow),
            "Red" => Ok(Band::Red),
            "RedEdge" => Ok(Band::RedEdge),
            "NIR1" => Ok(Band::Nir1),
            "NIR2" => Ok(Band::Nir2),
            other => Err(UnknownBandError(other.to_string())),
        }
    }
}
