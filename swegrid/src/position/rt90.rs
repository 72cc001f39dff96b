use std::fmt;

use serde::{Deserialize, Serialize};

use super::Wgs84Position;
use crate::projector::Projector;
use crate::zone::{Grid, Rt90Zone};
use crate::SwegridError;

/// Position dans la grille RT90
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rt90Position {
    /// Coordonnée nord
    pub x: f64,
    /// Coordonnée est
    pub y: f64,
    pub zone: Rt90Zone,
}

impl Rt90Position {
    pub fn new(x: f64, y: f64, zone: Rt90Zone) -> Self {
        Self { x, y, zone }
    }

    /// Position dans la zone par défaut (2.5 gon V)
    pub fn with_default_zone(x: f64, y: f64) -> Self {
        Self::new(x, y, Rt90Zone::default())
    }

    pub fn from_wgs84(position: &Wgs84Position, zone: Rt90Zone) -> Self {
        let (x, y) = projector(zone).forward(position.latitude, position.longitude);
        Self::new(x, y, zone)
    }

    pub fn try_from_wgs84(position: &Wgs84Position, zone: Rt90Zone) -> Result<Self, SwegridError> {
        let (x, y) = projector(zone).try_forward(position.latitude, position.longitude)?;
        Ok(Self::new(x, y, zone))
    }

    pub fn to_wgs84(&self) -> Wgs84Position {
        let (latitude, longitude) = projector(self.zone).inverse(self.x, self.y);
        Wgs84Position::new(latitude, longitude)
    }

    pub fn try_to_wgs84(&self) -> Result<Wgs84Position, SwegridError> {
        let (latitude, longitude) = projector(self.zone).try_inverse(self.x, self.y)?;
        Ok(Wgs84Position::new(latitude, longitude))
    }
}

fn projector(zone: Rt90Zone) -> Projector {
    Projector::new(Grid::Rt90.ellipsoid(), zone.params())
}

impl fmt::Display for Rt90Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {:.6} Y: {:.6} Projection: {}", self.x, self.y, self.zone)
    }
}
