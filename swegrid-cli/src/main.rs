//! Point d'entrée CLI pour swegrid

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;
use swegrid_cli::Config;

/// Convertir des coordonnées entre WGS84, RT90 et SWEREF99
#[derive(Parser)]
#[command(name = "swegrid")]
#[command(author, version)]
#[command(about = "Convert coordinates between WGS84, RT90 and SWEREF99")]
#[command(long_about = "Gauss-Krüger conversion between WGS84 and the Swedish national grids.\n\nZones are given by name (sweref_99_tm, rt90_2_5_gon_v, wgs84), by EPSG code (3006, EPSG:3021), or as 'rt90' / 'sweref99' for the configured default zone.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Fichier de configuration JSON (défaut : env SWEGRID_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let config = Config::resolve(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::ToGrid {
            position,
            format,
            crs,
        } => cli::cmd_to_grid(&config, &position, format, &crs)?,
        Commands::ToWgs84 { x, y, crs, format } => cli::cmd_to_wgs84(&config, x, y, &crs, format)?,
        Commands::Convert {
            input,
            from,
            to,
            input_format,
            output,
            report,
        } => cli::cmd_convert(
            &config,
            &input,
            &from,
            &to,
            input_format,
            output.as_deref(),
            report.as_deref(),
        )?,
        Commands::Geojson {
            input,
            from,
            to,
            output,
        } => cli::cmd_geojson(&config, &input, &from, &to, &output)?,
        Commands::Zones => cli::cmd_zones(),
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout porte les coordonnées converties
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
