//! Positions typées : WGS84, RT90 et SWEREF99
//!
//! Valeurs immuables. Les positions de grille portent leur zone et construisent
//! le `Projector` à la demande pour chaque conversion.

mod rt90;
mod sweref99;
mod wgs84;

pub use rt90::Rt90Position;
pub use sweref99::Sweref99Position;
pub use wgs84::Wgs84Position;

use crate::zone::Grid;

/// Comportement commun aux trois types de position
pub trait Position {
    /// Famille de la position
    fn grid(&self) -> Grid;

    /// Conversion vers WGS84 (identité pour une position WGS84)
    fn to_wgs84(&self) -> Wgs84Position;
}

impl Position for Wgs84Position {
    fn grid(&self) -> Grid {
        Grid::Wgs84
    }

    fn to_wgs84(&self) -> Wgs84Position {
        *self
    }
}

impl Position for Rt90Position {
    fn grid(&self) -> Grid {
        Grid::Rt90
    }

    fn to_wgs84(&self) -> Wgs84Position {
        Rt90Position::to_wgs84(self)
    }
}

impl Position for Sweref99Position {
    fn grid(&self) -> Grid {
        Grid::Sweref99
    }

    fn to_wgs84(&self) -> Wgs84Position {
        Sweref99Position::to_wgs84(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_behind_trait_object() {
        let positions: Vec<Box<dyn Position>> = vec![
            Box::new(Wgs84Position::new(59.3489, 18.0473)),
            Box::new(Rt90Position::with_default_zone(6583052.0, 1627548.0)),
            Box::new(Sweref99Position::with_default_zone(6652797.165, 658185.201)),
        ];

        let grids: Vec<Grid> = positions.iter().map(|p| p.grid()).collect();
        assert_eq!(grids, vec![Grid::Wgs84, Grid::Rt90, Grid::Sweref99]);

        for position in &positions {
            let wgs = position.to_wgs84();
            assert!((55.0..70.0).contains(&wgs.latitude), "{}", wgs);
            assert!((10.0..25.0).contains(&wgs.longitude), "{}", wgs);
        }
    }
}
