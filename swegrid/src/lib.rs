//! # swegrid
//!
//! Conversion de coordonnées entre WGS84, RT90 et SWEREF99 (grilles nationales
//! suédoises) par projection de Gauss-Krüger sur l'ellipsoïde GRS80.
//!
//! ## Features
//!
//! - Projection directe et inverse en forme fermée (séries de Krüger)
//! - Table totale des 6 zones RT90 et des 13 zones SWEREF99, codes EPSG
//! - Positions typées avec zone, lecture/écriture DMS
//! - Reprojection de géométries `geo` et de lots de points (rayon)
//!
//! Pas de changement de datum : RT90 est traité ici sur GRS80, comme SWEREF99.
//!
//! ## Usage
//!
//! ```rust
//! use swegrid::{Sweref99Position, Sweref99Zone, Wgs84Format, Wgs84Position};
//!
//! let wgs = Wgs84Position::parse(
//!     "N 59º 58' 55.23\" E 017º 50' 06.12\"",
//!     Wgs84Format::DegreesMinutesSeconds,
//! )?;
//! let sweref = Sweref99Position::from_wgs84(&wgs, Sweref99Zone::Tm);
//! assert!((sweref.n - 6652797.165).abs() < 1e-3);
//! # Ok::<(), swegrid::SwegridError>(())
//! ```

pub mod ellipsoid;
pub mod error;
pub mod position;
pub mod projector;
pub mod reproject;
pub mod text;
pub mod zone;

pub use ellipsoid::{grs80, EllipsoidParameters};
pub use error::SwegridError;
pub use position::{Position, Rt90Position, Sweref99Position, Wgs84Position};
pub use projector::{project_forward, project_inverse, Projector};
pub use reproject::Reprojector;
pub use text::Wgs84Format;
pub use zone::{zone_params_for, Grid, Rt90Zone, Sweref99Zone, Zone, ZoneParameters};
