use std::fmt;

use serde::{Deserialize, Serialize};

use super::Wgs84Position;
use crate::projector::Projector;
use crate::zone::{Grid, Sweref99Zone};
use crate::SwegridError;

/// Position dans la grille SWEREF99
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sweref99Position {
    /// Northing
    pub n: f64,
    /// Easting
    pub e: f64,
    pub zone: Sweref99Zone,
}

impl Sweref99Position {
    pub fn new(n: f64, e: f64, zone: Sweref99Zone) -> Self {
        Self { n, e, zone }
    }

    /// Position en SWEREF99 TM
    pub fn with_default_zone(n: f64, e: f64) -> Self {
        Self::new(n, e, Sweref99Zone::default())
    }

    pub fn from_wgs84(position: &Wgs84Position, zone: Sweref99Zone) -> Self {
        let (n, e) = projector(zone).forward(position.latitude, position.longitude);
        Self::new(n, e, zone)
    }

    pub fn try_from_wgs84(position: &Wgs84Position, zone: Sweref99Zone) -> Result<Self, SwegridError> {
        let (n, e) = projector(zone).try_forward(position.latitude, position.longitude)?;
        Ok(Self::new(n, e, zone))
    }

    pub fn to_wgs84(&self) -> Wgs84Position {
        let (latitude, longitude) = projector(self.zone).inverse(self.n, self.e);
        Wgs84Position::new(latitude, longitude)
    }

    pub fn try_to_wgs84(&self) -> Result<Wgs84Position, SwegridError> {
        let (latitude, longitude) = projector(self.zone).try_inverse(self.n, self.e)?;
        Ok(Wgs84Position::new(latitude, longitude))
    }

    /// Change de zone SWEREF99 en passant par WGS84
    pub fn to_zone(&self, zone: Sweref99Zone) -> Self {
        if zone == self.zone {
            return *self;
        }
        Self::from_wgs84(&self.to_wgs84(), zone)
    }
}

fn projector(zone: Sweref99Zone) -> Projector {
    Projector::new(Grid::Sweref99.ellipsoid(), zone.params())
}

impl fmt::Display for Sweref99Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N: {:.6} E: {:.6} Projection: {}", self.n, self.e, self.zone)
    }
}
