//! # swegrid-cli
//!
//! Conversion de coordonnées suédoises en ligne de commande, au-dessus de la
//! bibliothèque `swegrid`.
//!
//! ## Usage CLI
//!
//! ```bash
//! # Une position WGS84 vers SWEREF99 TM
//! swegrid to-grid --position "N 59º 58' 55.23\" E 017º 50' 06.12\"" --crs sweref99
//!
//! # Une coordonnée RT90 vers WGS84
//! swegrid to-wgs84 --x 6583052 --y 1627548 --crs rt90
//!
//! # Un fichier de points, avec rapport JSON
//! swegrid convert --input points.txt --from 3006 --to wgs84 --report report.json
//!
//! # Un fichier GeoJSON
//! swegrid geojson --input parcels.geojson --from sweref_99_tm --to wgs84 --output out.geojson
//! ```

pub mod batch;
pub mod config;
pub mod geojson;
pub mod report;

pub use config::Config;
pub use report::{BatchReport, BatchStatus};
