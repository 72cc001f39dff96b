//! Zones de projection RT90 et SWEREF99
//!
//! Table statique et totale : chaque identifiant de zone a exactement un jeu de
//! paramètres. L'énumération fermée tient lieu de validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ellipsoid::EllipsoidParameters;
use crate::SwegridError;

/// Paramètres Gauss-Krüger d'une zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneParameters {
    /// Méridien central en degrés
    pub central_meridian: f64,
    /// Facteur d'échelle sur le méridien central
    pub scale: f64,
    /// Décalage de l'origine en x (nord)
    pub false_northing: f64,
    /// Décalage de l'origine en y (est)
    pub false_easting: f64,
}

impl ZoneParameters {
    /// Zone sans projection : `Projector` renvoie ses entrées telles quelles.
    ///
    /// Le méridien central vaut le plus petit `f64` normal, valeur sentinelle
    /// historique qui ne correspond à aucune zone réelle.
    pub const IDENTITY: Self = Self::new(f64::MIN_POSITIVE, 1.0, 0.0, 0.0);

    pub const fn new(central_meridian: f64, scale: f64, false_northing: f64, false_easting: f64) -> Self {
        Self {
            central_meridian,
            scale,
            false_northing,
            false_easting,
        }
    }

    /// Vrai pour la sentinelle de pass-through
    pub fn is_identity(&self) -> bool {
        self.central_meridian == f64::MIN_POSITIVE
    }
}

/// Famille de système de coordonnées
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grid {
    Rt90,
    Wgs84,
    Sweref99,
}

impl Grid {
    /// Ellipsoïde partagé par la famille (GRS80 pour toutes)
    pub fn ellipsoid(self) -> EllipsoidParameters {
        EllipsoidParameters::GRS80
    }
}

/// Zones RT90 (décalage en gon par rapport au méridien 2.5 gon V)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rt90Zone {
    #[serde(rename = "rt90_7_5_gon_v")]
    Gon7_5V,
    #[serde(rename = "rt90_5_0_gon_v")]
    Gon5_0V,
    #[default]
    #[serde(rename = "rt90_2_5_gon_v")]
    Gon2_5V,
    #[serde(rename = "rt90_0_0_gon_v")]
    Gon0_0V,
    #[serde(rename = "rt90_2_5_gon_o")]
    Gon2_5O,
    #[serde(rename = "rt90_5_0_gon_o")]
    Gon5_0O,
}

impl Rt90Zone {
    pub const ALL: [Rt90Zone; 6] = [
        Self::Gon7_5V,
        Self::Gon5_0V,
        Self::Gon2_5V,
        Self::Gon0_0V,
        Self::Gon2_5O,
        Self::Gon5_0O,
    ];

    pub fn params(self) -> ZoneParameters {
        match self {
            Self::Gon7_5V => ZoneParameters::new(11.0 + 18.375 / 60.0, 1.000006000000, -667.282, 1500025.141),
            Self::Gon5_0V => ZoneParameters::new(13.0 + 33.376 / 60.0, 1.000005800000, -667.130, 1500044.695),
            Self::Gon2_5V => ZoneParameters::new(
                15.0 + 48.0 / 60.0 + 22.624306 / 3600.0,
                1.00000561024,
                -667.711,
                1500064.274,
            ),
            Self::Gon0_0V => ZoneParameters::new(18.0 + 3.378 / 60.0, 1.000005400000, -668.844, 1500083.521),
            Self::Gon2_5O => ZoneParameters::new(20.0 + 18.379 / 60.0, 1.000005200000, -670.706, 1500102.765),
            Self::Gon5_0O => ZoneParameters::new(22.0 + 33.380 / 60.0, 1.000004900000, -672.557, 1500121.846),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Gon7_5V => "rt90_7_5_gon_v",
            Self::Gon5_0V => "rt90_5_0_gon_v",
            Self::Gon2_5V => "rt90_2_5_gon_v",
            Self::Gon0_0V => "rt90_0_0_gon_v",
            Self::Gon2_5O => "rt90_2_5_gon_o",
            Self::Gon5_0O => "rt90_5_0_gon_o",
        }
    }

    /// Code EPSG de la zone (RT90 7.5 gon V = 3019 … 5 gon O = 3024)
    pub const fn epsg(self) -> u32 {
        match self {
            Self::Gon7_5V => 3019,
            Self::Gon5_0V => 3020,
            Self::Gon2_5V => 3021,
            Self::Gon0_0V => 3022,
            Self::Gon2_5O => 3023,
            Self::Gon5_0O => 3024,
        }
    }
}

/// Zones SWEREF99 : TM national et 12 zones locales nommées d'après leur méridien
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sweref99Zone {
    #[default]
    #[serde(rename = "sweref_99_tm")]
    Tm,
    #[serde(rename = "sweref_99_12_00")]
    Zone12_00,
    #[serde(rename = "sweref_99_13_30")]
    Zone13_30,
    #[serde(rename = "sweref_99_15_00")]
    Zone15_00,
    #[serde(rename = "sweref_99_16_30")]
    Zone16_30,
    #[serde(rename = "sweref_99_18_00")]
    Zone18_00,
    #[serde(rename = "sweref_99_14_15")]
    Zone14_15,
    #[serde(rename = "sweref_99_15_45")]
    Zone15_45,
    #[serde(rename = "sweref_99_17_15")]
    Zone17_15,
    #[serde(rename = "sweref_99_18_45")]
    Zone18_45,
    #[serde(rename = "sweref_99_20_15")]
    Zone20_15,
    #[serde(rename = "sweref_99_21_45")]
    Zone21_45,
    #[serde(rename = "sweref_99_23_15")]
    Zone23_15,
}

impl Sweref99Zone {
    pub const ALL: [Sweref99Zone; 13] = [
        Self::Tm,
        Self::Zone12_00,
        Self::Zone13_30,
        Self::Zone15_00,
        Self::Zone16_30,
        Self::Zone18_00,
        Self::Zone14_15,
        Self::Zone15_45,
        Self::Zone17_15,
        Self::Zone18_45,
        Self::Zone20_15,
        Self::Zone21_45,
        Self::Zone23_15,
    ];

    /// Faux est des zones locales
    const LOCAL_FALSE_EASTING: f64 = 150000.0;

    pub fn params(self) -> ZoneParameters {
        let meridian = match self {
            Self::Tm => return ZoneParameters::new(15.00, 0.9996, 0.0, 500000.0),
            Self::Zone12_00 => 12.00,
            Self::Zone13_30 => 13.50,
            Self::Zone15_00 => 15.00,
            Self::Zone16_30 => 16.50,
            Self::Zone18_00 => 18.00,
            Self::Zone14_15 => 14.25,
            Self::Zone15_45 => 15.75,
            Self::Zone17_15 => 17.25,
            Self::Zone18_45 => 18.75,
            Self::Zone20_15 => 20.25,
            Self::Zone21_45 => 21.75,
            Self::Zone23_15 => 23.25,
        };
        ZoneParameters::new(meridian, 1.0, 0.0, Self::LOCAL_FALSE_EASTING)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tm => "sweref_99_tm",
            Self::Zone12_00 => "sweref_99_12_00",
            Self::Zone13_30 => "sweref_99_13_30",
            Self::Zone15_00 => "sweref_99_15_00",
            Self::Zone16_30 => "sweref_99_16_30",
            Self::Zone18_00 => "sweref_99_18_00",
            Self::Zone14_15 => "sweref_99_14_15",
            Self::Zone15_45 => "sweref_99_15_45",
            Self::Zone17_15 => "sweref_99_17_15",
            Self::Zone18_45 => "sweref_99_18_45",
            Self::Zone20_15 => "sweref_99_20_15",
            Self::Zone21_45 => "sweref_99_21_45",
            Self::Zone23_15 => "sweref_99_23_15",
        }
    }

    /// Code EPSG (TM = 3006, zones locales 3007–3018 dans l'ordre de déclaration)
    pub const fn epsg(self) -> u32 {
        match self {
            Self::Tm => 3006,
            Self::Zone12_00 => 3007,
            Self::Zone13_30 => 3008,
            Self::Zone15_00 => 3009,
            Self::Zone16_30 => 3010,
            Self::Zone18_00 => 3011,
            Self::Zone14_15 => 3012,
            Self::Zone15_45 => 3013,
            Self::Zone17_15 => 3014,
            Self::Zone18_45 => 3015,
            Self::Zone20_15 => 3016,
            Self::Zone21_45 => 3017,
            Self::Zone23_15 => 3018,
        }
    }
}

/// Identifiant de zone, toutes familles confondues
///
/// `Identity` désigne les coordonnées géographiques WGS84 elles-mêmes :
/// aucune projection n'est appliquée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    Rt90(Rt90Zone),
    Sweref99(Sweref99Zone),
    Identity,
}

impl Zone {
    pub const WGS84_EPSG: u32 = 4326;

    /// Les 19 zones projetées, RT90 puis SWEREF99
    pub fn projected() -> impl Iterator<Item = Zone> {
        Rt90Zone::ALL
            .into_iter()
            .map(Zone::Rt90)
            .chain(Sweref99Zone::ALL.into_iter().map(Zone::Sweref99))
    }

    pub fn params(self) -> ZoneParameters {
        match self {
            Self::Rt90(zone) => zone.params(),
            Self::Sweref99(zone) => zone.params(),
            Self::Identity => ZoneParameters::IDENTITY,
        }
    }

    pub const fn grid(self) -> Grid {
        match self {
            Self::Rt90(_) => Grid::Rt90,
            Self::Sweref99(_) => Grid::Sweref99,
            Self::Identity => Grid::Wgs84,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rt90(zone) => zone.name(),
            Self::Sweref99(zone) => zone.name(),
            Self::Identity => "wgs84",
        }
    }

    pub const fn epsg(self) -> u32 {
        match self {
            Self::Rt90(zone) => zone.epsg(),
            Self::Sweref99(zone) => zone.epsg(),
            Self::Identity => Self::WGS84_EPSG,
        }
    }

    /// Retrouve une zone depuis son code EPSG
    pub fn from_epsg(epsg: u32) -> Result<Self, SwegridError> {
        if epsg == Self::WGS84_EPSG {
            return Ok(Self::Identity);
        }
        Self::projected()
            .find(|zone| zone.epsg() == epsg)
            .ok_or_else(|| SwegridError::UnknownZone(format!("EPSG:{}", epsg)))
    }
}

/// Paramètres de la zone (table totale sur l'énumération)
pub fn zone_params_for(zone: Zone) -> ZoneParameters {
    zone.params()
}

impl From<Rt90Zone> for Zone {
    fn from(zone: Rt90Zone) -> Self {
        Self::Rt90(zone)
    }
}

impl From<Sweref99Zone> for Zone {
    fn from(zone: Sweref99Zone) -> Self {
        Self::Sweref99(zone)
    }
}

impl fmt::Display for Rt90Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Sweref99Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rt90Zone {
    type Err = SwegridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|zone| zone.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SwegridError::UnknownZone(name.to_string()))
    }
}

impl FromStr for Sweref99Zone {
    type Err = SwegridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|zone| zone.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SwegridError::UnknownZone(name.to_string()))
    }
}

/// Accepte un nom de zone (`sweref_99_tm`, `rt90_2_5_gon_v`, `wgs84`), un code
/// EPSG nu (`3006`) ou préfixé (`EPSG:3006`)
impl FromStr for Zone {
    type Err = SwegridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let code = value
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("epsg:"))
            .map_or(value, |_| &value[5..]);
        if let Ok(epsg) = code.parse::<u32>() {
            return Self::from_epsg(epsg);
        }
        if value.eq_ignore_ascii_case("wgs84") {
            return Ok(Self::Identity);
        }
        value
            .parse::<Rt90Zone>()
            .map(Self::Rt90)
            .or_else(|_| value.parse::<Sweref99Zone>().map(Self::Sweref99))
            .map_err(|_| SwegridError::UnknownZone(value.to_string()))
    }
}

impl TryFrom<String> for Zone {
    type Error = SwegridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.name().to_string()
    }
}
