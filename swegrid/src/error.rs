//! Types d'erreurs pour le crate swegrid

use thiserror::Error;

/// Erreurs pouvant survenir autour du moteur de projection
///
/// La projection elle-même est totale : ces erreurs viennent des variantes
/// vérifiées (`try_*`), du parsing texte et de la résolution des zones.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwegridError {
    /// La projection a produit une valeur non finie (point hors du domaine de la zone)
    #[error("Projection out of domain for ({first}, {second})")]
    OutOfDomain { first: f64, second: f64 },

    /// Texte de coordonnée illisible
    #[error("Parse error in {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// Angle hors limites (90° pour la latitude, 180° pour la longitude)
    #[error("Angle {value} exceeds {limit} degrees")]
    OutOfRange { value: f64, limit: f64 },

    /// Nom de zone ou code EPSG non reconnu
    #[error("Unknown zone: {0}")]
    UnknownZone(String),
}

impl SwegridError {
    /// Crée une erreur de parsing avec contexte
    pub fn parse_error(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Crée une erreur de domaine pour la paire d'entrée
    pub fn out_of_domain(first: f64, second: f64) -> Self {
        Self::OutOfDomain { first, second }
    }
}
