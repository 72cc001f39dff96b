//! Conversion d'un fichier de points, une paire par ligne
//!
//! Ordre des valeurs sur une ligne : nord puis est pour une grille (`x y` en
//! RT90, `n e` en SWEREF99), latitude puis longitude pour WGS84. Les lignes
//! vides et celles commençant par `#` sont ignorées.

use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use rayon::prelude::*;
use swegrid::{Reprojector, Wgs84Format, Wgs84Position, Zone};
use tracing::{debug, warn};

use crate::config::Config;
use crate::report::BatchReport;

/// Résultat d'un lot : lignes converties (dans l'ordre) et rapport
#[derive(Debug)]
pub struct BatchOutput {
    pub lines: Vec<String>,
    pub report: BatchReport,
}

/// Lignes utiles du fichier, avec leur numéro (1-based)
pub fn point_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Lit une paire (nord, est) ou (latitude, longitude) selon la zone
pub fn parse_point(zone: Zone, text: &str, input_format: Wgs84Format) -> Result<(f64, f64)> {
    if zone == Zone::Identity {
        let position = Wgs84Position::parse(text, input_format)?;
        return Ok((position.latitude, position.longitude));
    }

    let values: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|s| !s.is_empty())
        .collect();
    if values.len() != 2 {
        bail!("Expected 2 values, found {}", values.len());
    }

    let north = parse_number(values[0])?;
    let east = parse_number(values[1])?;
    Ok((north, east))
}

fn parse_number(text: &str) -> Result<f64> {
    fast_float::parse::<f64, _>(text).map_err(|_| anyhow!("Invalid number '{}'", text))
}

/// Écrit une paire selon la zone : format WGS84 configuré ou grille avec la
/// précision configurée
pub fn format_point(zone: Zone, first: f64, second: f64, config: &Config) -> String {
    match zone {
        Zone::Identity => Wgs84Position::new(first, second).to_string_with(config.format),
        _ => format!(
            "{:.*} {:.*}",
            config.precision, first, config.precision, second
        ),
    }
}

/// Position libellée comme l'affichage des positions (`X:`/`Y:` en RT90,
/// `N:`/`E:` en SWEREF99), avec la précision configurée
pub fn describe_point(zone: Zone, north: f64, east: f64, config: &Config) -> String {
    let p = config.precision;
    match zone {
        Zone::Rt90(zone) => format!("X: {:.*} Y: {:.*} Projection: {}", p, north, p, east, zone),
        Zone::Sweref99(zone) => format!("N: {:.*} E: {:.*} Projection: {}", p, north, p, east, zone),
        Zone::Identity => Wgs84Position::new(north, east).to_string_with(config.format),
    }
}

/// Convertit une ligne ; l'ordre (nord, est) est passé en (est, nord) au reprojector
fn convert_line(
    text: &str,
    reprojector: &Reprojector,
    input_format: Wgs84Format,
    config: &Config,
) -> Result<String> {
    let (north, east) = parse_point(reprojector.source(), text, input_format)?;
    let (east, north) = reprojector.transform_point(east, north)?;
    Ok(format_point(reprojector.target(), north, east, config))
}

/// Convertit tout le contenu d'un fichier de points
///
/// Une ligne en erreur est comptée dans le rapport, le reste du lot continue.
pub fn convert_points(
    content: &str,
    reprojector: &Reprojector,
    input_format: Wgs84Format,
    config: &Config,
) -> BatchOutput {
    let start = Instant::now();
    let mut report = BatchReport::new(reprojector.source().name(), reprojector.target().name());

    let lines = point_lines(content);
    debug!(points = lines.len(), "Converting {}", reprojector.description());

    let results: Vec<(usize, &str, Result<String>)> = lines
        .par_iter()
        .map(|&(line, text)| (line, text, convert_line(text, reprojector, input_format, config)))
        .collect();

    let mut converted = Vec::with_capacity(results.len());
    for (line, text, result) in results {
        match result {
            Ok(output) => {
                report.record_success();
                converted.push(output);
            }
            Err(e) => {
                warn!(line, "Skipping point: {:#}", e);
                report.record_error(line, text, format!("{:#}", e));
            }
        }
    }

    report.set_duration(start.elapsed());
    report.finalize();

    BatchOutput {
        lines: converted,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::BatchStatus;
    use swegrid::{Rt90Zone, Sweref99Zone};

    const TM: Zone = Zone::Sweref99(Sweref99Zone::Tm);

    #[test]
    fn test_point_lines_skip_comments() {
        let content = "# header\n\n6652797.165 658185.201\n   # indented\n6583052 1627548\n";
        let lines = point_lines(content);
        assert_eq!(lines, vec![(3, "6652797.165 658185.201"), (5, "6583052 1627548")]);
    }

    #[test]
    fn test_parse_point_grid() {
        let (n, e) = parse_point(TM, "6652797.165;658185.201", Wgs84Format::Degrees).unwrap();
        assert_eq!((n, e), (6652797.165, 658185.201));
        assert!(parse_point(TM, "6652797.165", Wgs84Format::Degrees).is_err());
        assert!(parse_point(TM, "abc 658185.201", Wgs84Format::Degrees).is_err());
    }

    #[test]
    fn test_parse_point_wgs84() {
        let (lat, lon) = parse_point(
            Zone::Identity,
            "N 59º 58' 55.23\" E 017º 50' 06.12\"",
            Wgs84Format::DegreesMinutesSeconds,
        )
        .unwrap();
        assert!((lat - 59.98200833).abs() < 1e-7);
        assert!((lon - 17.83503333).abs() < 1e-7);
    }

    #[test]
    fn test_format_point() {
        let config = Config::default();
        assert_eq!(format_point(TM, 6652797.1651, 658185.2, &config), "6652797.165 658185.200");

        let degrees = Config {
            format: Wgs84Format::Degrees,
            ..Config::default()
        };
        assert_eq!(
            format_point(Zone::Identity, 59.5, 18.25, &degrees),
            "59.5000000000 18.2500000000"
        );
    }

    #[test]
    fn test_describe_point_uses_precision() {
        let config = Config {
            precision: 2,
            ..Config::default()
        };
        assert_eq!(
            describe_point(TM, 6652797.165, 658185.201, &config),
            "N: 6652797.17 E: 658185.20 Projection: sweref_99_tm"
        );
        assert_eq!(
            describe_point(Zone::Rt90(Rt90Zone::Gon2_5V), 6653174.343, 1613318.742, &Config::default()),
            "X: 6653174.343 Y: 1613318.742 Projection: rt90_2_5_gon_v"
        );
        assert_eq!(
            describe_point(Zone::Identity, 59.5, 18.25, &config),
            "N 59º 30' 0.00000\" E 18º 15' 0.00000\""
        );
    }

    #[test]
    fn test_convert_points_wgs84_to_rt90() {
        let reprojector = Reprojector::new(Zone::Identity, Zone::Rt90(Rt90Zone::Gon2_5V));
        let content = "59.98200833333 17.83503333333\n";
        let output = convert_points(content, &reprojector, Wgs84Format::Degrees, &Config::default());

        assert_eq!(output.report.status, BatchStatus::Success);
        assert_eq!(output.lines.len(), 1);
        let values: Vec<f64> = output.lines[0]
            .split(' ')
            .map(|v| v.parse().unwrap())
            .collect();
        assert!((values[0] - 6653174.343).abs() < 2e-3, "x={}", values[0]);
        assert!((values[1] - 1613318.742).abs() < 2e-3, "y={}", values[1]);
    }

    #[test]
    fn test_convert_points_partial_failure() {
        let reprojector = Reprojector::new(TM, Zone::Identity);
        let content = "6652797.165 658185.201\nnot a point\n6600000 1e10\n";
        let output = convert_points(content, &reprojector, Wgs84Format::Degrees, &Config::default());

        assert_eq!(output.report.status, BatchStatus::PartialSuccess);
        assert_eq!(output.report.points_read, 3);
        assert_eq!(output.report.points_converted, 1);
        assert_eq!(output.lines, vec!["N 59º 58' 55.23001\" E 17º 50' 6.11997\"".to_string()]);

        let failed: Vec<usize> = output.report.errors.iter().map(|e| e.line).collect();
        assert_eq!(failed, vec![2, 3]);
    }
}
