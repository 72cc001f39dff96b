//! Définition de l'ellipsoïde de référence

use serde::{Deserialize, Serialize};

/// Paramètres d'un ellipsoïde de révolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidParameters {
    /// Demi-grand axe (rayon équatorial) en mètres
    pub semi_major_axis: f64,

    /// Aplatissement
    pub flattening: f64,
}

impl EllipsoidParameters {
    /// Ellipsoïde GRS80, commun à RT90 et SWEREF99 ici
    pub const GRS80: Self = Self::new(6378137.0, 1.0 / 298.257222101);

    pub const fn new(semi_major_axis: f64, flattening: f64) -> Self {
        Self {
            semi_major_axis,
            flattening,
        }
    }

    /// Première excentricité au carré
    pub fn e2(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Troisième aplatissement
    pub fn n(&self) -> f64 {
        self.flattening / (2.0 - self.flattening)
    }

    /// Rayon de la sphère conforme (â), facteur commun des séries de Krüger
    pub fn a_roof(&self) -> f64 {
        let n = self.n();
        self.semi_major_axis / (1.0 + n) * (1.0 + n * n / 4.0 + n * n * n * n / 64.0)
    }
}

/// Ellipsoïde GRS80
pub const fn grs80() -> EllipsoidParameters {
    EllipsoidParameters::GRS80
}
