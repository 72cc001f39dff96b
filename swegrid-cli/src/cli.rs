//! Définition et implémentation des commandes CLI
//!
//! - `to-grid` / `to-wgs84` : une position
//! - `convert` : fichier de points, avec rapport
//! - `geojson` : fichier GeoJSON
//! - `zones` : table des zones

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use swegrid::{Reprojector, Rt90Position, Sweref99Position, Wgs84Format, Wgs84Position, Zone};
use tracing::info;

use swegrid_cli::batch;
use swegrid_cli::geojson;
use swegrid_cli::report::BatchStatus;
use swegrid_cli::Config;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a WGS84 position to a grid coordinate
    ToGrid {
        /// Position text, e.g. "N 59º 58' 55.23\" E 017º 50' 06.12\""
        #[arg(short, long)]
        position: String,

        /// Input format: degrees, dm or dms
        #[arg(short, long, default_value = "dms")]
        format: Wgs84Format,

        /// Target zone (name, EPSG code, rt90 or sweref99)
        #[arg(short, long, default_value = "sweref99")]
        crs: String,
    },

    /// Convert a grid coordinate to WGS84
    ToWgs84 {
        /// Northing (RT90 x, SWEREF99 N)
        #[arg(short, long)]
        x: f64,

        /// Easting (RT90 y, SWEREF99 E)
        #[arg(short, long)]
        y: f64,

        /// Source zone (name, EPSG code, rt90 or sweref99)
        #[arg(short, long, default_value = "sweref99")]
        crs: String,

        /// Output format: degrees, dm or dms (défaut : config)
        #[arg(short, long)]
        format: Option<Wgs84Format>,
    },

    /// Convert a file of points, one "northing easting" or "lat lon" pair per line
    Convert {
        /// Input text file
        #[arg(short, long)]
        input: PathBuf,

        /// Source zone
        #[arg(long)]
        from: String,

        /// Target zone
        #[arg(long)]
        to: String,

        /// Format of WGS84 input lines: degrees, dm or dms
        #[arg(long, default_value = "degrees")]
        input_format: Wgs84Format,

        /// Output file (défaut : stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a JSON report of the batch
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Reproject every geometry of a GeoJSON file
    Geojson {
        /// Input GeoJSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Source zone
        #[arg(long)]
        from: String,

        /// Target zone
        #[arg(long, default_value = "wgs84")]
        to: String,

        /// Output GeoJSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the supported zones
    Zones,
}

/// Exécute la commande to-grid
pub fn cmd_to_grid(config: &Config, text: &str, format: Wgs84Format, crs: &str) -> Result<()> {
    let zone = config.zone(crs)?;
    let wgs = Wgs84Position::parse(text, format)
        .with_context(|| format!("Invalid position '{}'", text))?;

    info!(zone = %zone, "Converting {}", wgs);

    let (north, east) = match zone {
        Zone::Rt90(rt90) => {
            let position = Rt90Position::try_from_wgs84(&wgs, rt90)?;
            (position.x, position.y)
        }
        Zone::Sweref99(sweref) => {
            let position = Sweref99Position::try_from_wgs84(&wgs, sweref)?;
            (position.n, position.e)
        }
        Zone::Identity => (wgs.latitude, wgs.longitude),
    };
    println!("{}", batch::describe_point(zone, north, east, config));

    Ok(())
}

/// Exécute la commande to-wgs84
pub fn cmd_to_wgs84(
    config: &Config,
    x: f64,
    y: f64,
    crs: &str,
    format: Option<Wgs84Format>,
) -> Result<()> {
    let zone = config.zone(crs)?;
    let format = format.unwrap_or(config.format);

    let wgs = match zone {
        Zone::Rt90(zone) => Rt90Position::new(x, y, zone).try_to_wgs84()?,
        Zone::Sweref99(zone) => Sweref99Position::new(x, y, zone).try_to_wgs84()?,
        Zone::Identity => Wgs84Position::new(x, y),
    };

    println!("Latitude:  {}", wgs.latitude_to_string(format));
    println!("Longitude: {}", wgs.longitude_to_string(format));

    Ok(())
}

/// Exécute la commande convert
pub fn cmd_convert(
    config: &Config,
    input: &Path,
    from: &str,
    to: &str,
    input_format: Wgs84Format,
    output: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<()> {
    let reprojector = Reprojector::new(config.zone(from)?, config.zone(to)?);
    info!(input = %input.display(), "Convert {}", reprojector.description());

    let content = std::fs::read_to_string(input)
        .context(format!("Failed to read file: {}", input.display()))?;

    let result = batch::convert_points(&content, &reprojector, input_format, config);

    let mut text = result.lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    match output {
        Some(path) => std::fs::write(path, text)
            .context(format!("Failed to create file: {}", path.display()))?,
        None => print!("{}", text),
    }

    if let Some(path) = report_path {
        result.report.save_to_file(path)?;
        info!("Report saved to {}", path.display());
    }

    if result.report.status != BatchStatus::Success {
        result.report.display();
    }
    info!("{}", result.report.summary());

    if result.report.status == BatchStatus::Failed {
        anyhow::bail!("No point converted from {}", input.display());
    }

    Ok(())
}

/// Exécute la commande geojson
pub fn cmd_geojson(config: &Config, input: &Path, from: &str, to: &str, output: &Path) -> Result<()> {
    let reprojector = Reprojector::new(config.zone(from)?, config.zone(to)?);
    info!(
        input = %input.display(),
        output = %output.display(),
        "GeoJSON {}",
        reprojector.description()
    );

    let count = geojson::reproject_file(input, output, &reprojector)?;

    println!(
        "Reprojected {} geometries to {} (EPSG:{})",
        count,
        output.display(),
        reprojector.target().epsg()
    );

    Ok(())
}

/// Exécute la commande zones
pub fn cmd_zones() {
    println!(
        "{:<18} {:>6} {:>16} {:>14} {:>12} {:>14}",
        "zone", "epsg", "central meridian", "scale", "false N", "false E"
    );
    for zone in Zone::projected() {
        let params = zone.params();
        println!(
            "{:<18} {:>6} {:>16.8} {:>14.11} {:>12.3} {:>14.3}",
            zone.name(),
            zone.epsg(),
            params.central_meridian,
            params.scale,
            params.false_northing,
            params.false_easting
        );
    }
    println!("{:<18} {:>6}", Zone::Identity.name(), Zone::Identity.epsg());
}
