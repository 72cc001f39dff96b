use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::{self, Axis, Wgs84Format};
use crate::SwegridError;

/// Position géographique WGS84, en degrés décimaux
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wgs84Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Wgs84Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Lit une position texte, ex. `N 59º 58' 55.23" E 017º 50' 06.12"`
    pub fn parse(text: &str, format: Wgs84Format) -> Result<Self, SwegridError> {
        let (latitude, longitude) = text::parse_position(text, format)?;
        Ok(Self::new(latitude, longitude))
    }

    pub fn latitude_to_string(&self, format: Wgs84Format) -> String {
        text::format_coordinate(self.latitude, format, Axis::Latitude)
    }

    pub fn longitude_to_string(&self, format: Wgs84Format) -> String {
        text::format_coordinate(self.longitude, format, Axis::Longitude)
    }

    /// Les deux coordonnées séparées par un espace, relisibles par [`Wgs84Position::parse`]
    pub fn to_string_with(&self, format: Wgs84Format) -> String {
        format!(
            "{} {}",
            self.latitude_to_string(format),
            self.longitude_to_string(format)
        )
    }
}

impl fmt::Display for Wgs84Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {},  Longitude: {}",
            self.latitude_to_string(Wgs84Format::DegreesMinutesSeconds),
            self.longitude_to_string(Wgs84Format::DegreesMinutesSeconds)
        )
    }
}
