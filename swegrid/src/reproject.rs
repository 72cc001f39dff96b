//! Reprojection entre zones, de points et de géométries `geo`
//!
//! Toute conversion passe par WGS84 : inverse dans la zone source, directe dans
//! la zone cible. `Zone::Identity` désigne WGS84 lui-même.
//!
//! Ordre des axes : les fonctions `transform*` suivent la convention `geo`
//! (x = est / longitude, y = nord / latitude), alors que [`Projector`] travaille
//! en (nord, est).

use geo::{Coord, Geometry, MapCoords};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::projector::Projector;
use crate::zone::Zone;
use crate::SwegridError;

/// Reprojection d'une zone source vers une zone cible
#[derive(Debug, Clone, Copy)]
pub struct Reprojector {
    source: Zone,
    target: Zone,
    from: Projector,
    to: Projector,
}

impl Reprojector {
    pub fn new(source: Zone, target: Zone) -> Self {
        debug!(source = %source, target = %target, "Building reprojector");
        Self {
            source,
            target,
            from: Projector::new(source.grid().ellipsoid(), source.params()),
            to: Projector::new(target.grid().ellipsoid(), target.params()),
        }
    }

    /// Crée un reprojector depuis deux codes EPSG
    pub fn from_epsg(source_epsg: u32, target_epsg: u32) -> Result<Self, SwegridError> {
        Ok(Self::new(
            Zone::from_epsg(source_epsg)?,
            Zone::from_epsg(target_epsg)?,
        ))
    }

    pub fn source(&self) -> Zone {
        self.source
    }

    pub fn target(&self) -> Zone {
        self.target
    }

    /// Source et cible identiques : les coordonnées ne bougent pas
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }

    /// Transforme un point (x = est / longitude, y = nord / latitude)
    pub fn transform_point(&self, x: f64, y: f64) -> Result<(f64, f64), SwegridError> {
        if self.is_identity() {
            return Ok((x, y));
        }
        let (lat, lon) = self.from.try_inverse(y, x)?;
        let (north, east) = self.to.try_forward(lat, lon)?;
        Ok((east, north))
    }

    pub fn transform_coord(&self, coord: Coord) -> Result<Coord, SwegridError> {
        let (x, y) = self.transform_point(coord.x, coord.y)?;
        Ok(Coord { x, y })
    }

    /// Transforme une géométrie ; la première coordonnée hors domaine arrête tout
    pub fn transform_geometry(&self, geom: &Geometry) -> Result<Geometry, SwegridError> {
        if self.is_identity() {
            return Ok(geom.clone());
        }
        geom.try_map_coords(|coord| self.transform_coord(coord))
    }

    /// Transforme un lot de points en parallèle, un résultat par point
    pub fn transform_points(&self, points: &[(f64, f64)]) -> Vec<Result<(f64, f64), SwegridError>> {
        trace!(count = points.len(), "Transforming batch");
        points
            .par_iter()
            .map(|&(x, y)| self.transform_point(x, y))
            .collect()
    }

    /// Description courte, ex. `sweref_99_tm (EPSG:3006) → wgs84 (EPSG:4326)`
    pub fn description(&self) -> String {
        format!(
            "{} (EPSG:{}) → {} (EPSG:{})",
            self.source,
            self.source.epsg(),
            self.target,
            self.target.epsg()
        )
    }
}
