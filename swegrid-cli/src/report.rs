//! Rapport de conversion par lot
//!
//! Une ligne illisible ou hors domaine n'arrête pas le lot : elle est comptée
//! et décrite ici.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

/// Statut global du lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchStatus {
    /// Tous les points convertis
    Success,
    /// Des points convertis, d'autres en erreur
    PartialSuccess,
    /// Aucun point converti
    Failed,
}

/// Erreur attachée à une ligne du fichier d'entrée
#[derive(Debug, Clone, Serialize)]
pub struct LineError {
    /// Numéro de ligne (1-based)
    pub line: usize,
    /// Contenu de la ligne
    pub input: String,
    /// Message d'erreur
    pub message: String,
}

/// Rapport complet d'un lot
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Zone source
    pub source: String,
    /// Zone cible
    pub target: String,
    /// Durée de la conversion
    pub duration_secs: f64,
    /// Statut global
    pub status: BatchStatus,
    /// Nombre de points lus
    pub points_read: usize,
    /// Nombre de points convertis
    pub points_converted: usize,
    /// Liste des erreurs
    pub errors: Vec<LineError>,
}

impl BatchReport {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            duration_secs: 0.0,
            status: BatchStatus::Success,
            points_read: 0,
            points_converted: 0,
            errors: Vec::new(),
        }
    }

    /// Enregistre un point converti
    pub fn record_success(&mut self) {
        self.points_read += 1;
        self.points_converted += 1;
    }

    /// Enregistre une ligne en échec
    pub fn record_error(&mut self, line: usize, input: &str, message: impl Into<String>) {
        self.points_read += 1;
        self.errors.push(LineError {
            line,
            input: input.to_string(),
            message: message.into(),
        });
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final
    pub fn finalize(&mut self) {
        self.status = match (self.points_converted, self.errors.is_empty()) {
            (_, true) => BatchStatus::Success,
            (0, false) => BatchStatus::Failed,
            (_, false) => BatchStatus::PartialSuccess,
        };
    }

    pub fn points_failed(&self) -> usize {
        self.errors.len()
    }

    /// Affiche le rapport sur stderr (stdout porte les coordonnées)
    pub fn display(&self) {
        eprintln!("\n{}", "=".repeat(60));
        eprintln!("CONVERSION REPORT - {} → {}", self.source, self.target);
        eprintln!("{}", "=".repeat(60));

        eprintln!("\nStatus: {:?}", self.status);
        eprintln!("Duration: {:.3}s", self.duration_secs);
        eprintln!(
            "Points: {} read, {} converted, {} failed",
            self.points_read,
            self.points_converted,
            self.points_failed()
        );

        if !self.errors.is_empty() {
            eprintln!("\n--- ERRORS ({}) ---", self.errors.len());
            for e in self.errors.iter().take(20) {
                eprintln!("  line {}: {} ({:?})", e.line, e.message, e.input);
            }
            if self.errors.len() > 20 {
                eprintln!("  ... and {} more", self.errors.len() - 20);
            }
        }

        eprintln!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Résumé sur une ligne
    pub fn summary(&self) -> String {
        format!(
            "{} → {}: {} converted, {} errors",
            self.source,
            self.target,
            self.points_converted,
            self.errors.len()
        )
    }
}
