//! Configuration de l'outil

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use swegrid::{Rt90Zone, Sweref99Zone, Wgs84Format, Zone};

/// Variable d'environnement (ou `.env`) pointant vers un fichier de configuration
pub const CONFIG_ENV: &str = "SWEGRID_CONFIG";

/// Configuration principale
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Zone utilisée quand on demande simplement `rt90`
    pub default_rt90_zone: Rt90Zone,

    /// Zone utilisée quand on demande simplement `sweref99`
    pub default_sweref99_zone: Sweref99Zone,

    /// Format d'affichage des positions WGS84
    pub format: Wgs84Format,

    /// Décimales affichées pour les coordonnées de grille
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rt90_zone: Rt90Zone::default(),
            default_sweref99_zone: Sweref99Zone::default(),
            format: Wgs84Format::DegreesMinutesSeconds,
            precision: 3,
        }
    }
}

impl Config {
    /// Charge une configuration depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// `--config` en priorité, puis `SWEGRID_CONFIG`, sinon valeurs par défaut
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Résout une zone : `rt90` / `sweref99` donnent les zones par défaut,
    /// sinon nom de zone ou code EPSG
    pub fn zone(&self, name: &str) -> Result<Zone> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rt90" => Ok(Zone::Rt90(self.default_rt90_zone)),
            "sweref99" | "sweref" => Ok(Zone::Sweref99(self.default_sweref99_zone)),
            _ => name
                .parse::<Zone>()
                .with_context(|| format!("Invalid zone '{}'", name)),
        }
    }
}
