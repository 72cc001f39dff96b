//! Lecture et écriture des coordonnées géographiques en texte
//!
//! Trois formats : degrés décimaux, degrés-minutes et degrés-minutes-secondes.
//!
//! ```text
//! 59.3489146862 18.0473189052
//! N 62º 10.560' E 015º 54.180'
//! N 59º 58' 55.23" E 017º 50' 06.12"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SwegridError;

/// Format texte d'une position WGS84
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wgs84Format {
    Degrees,
    #[serde(rename = "dm")]
    DegreesMinutes,
    #[default]
    #[serde(rename = "dms")]
    DegreesMinutesSeconds,
}

impl FromStr for Wgs84Format {
    type Err = SwegridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrees" | "deg" | "d" => Ok(Self::Degrees),
            "dm" | "degrees-minutes" => Ok(Self::DegreesMinutes),
            "dms" | "degrees-minutes-seconds" => Ok(Self::DegreesMinutesSeconds),
            other => Err(SwegridError::parse_error(
                other,
                "expected one of: degrees, dm, dms",
            )),
        }
    }
}

impl fmt::Display for Wgs84Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Degrees => "degrees",
            Self::DegreesMinutes => "dm",
            Self::DegreesMinutesSeconds => "dms",
        })
    }
}

/// Axe d'une coordonnée : fixe les hémisphères et la borne
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn positive(self) -> char {
        match self {
            Self::Latitude => 'N',
            Self::Longitude => 'E',
        }
    }

    fn negative(self) -> char {
        match self {
            Self::Latitude => 'S',
            Self::Longitude => 'W',
        }
    }

    fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }
}

/// Lit une paire (latitude, longitude) en degrés
pub fn parse_position(text: &str, format: Wgs84Format) -> Result<(f64, f64), SwegridError> {
    let (lat, lon) = match format {
        Wgs84Format::Degrees => {
            let parts: Vec<&str> = text.split_whitespace().collect();
            if parts.len() != 2 {
                return Err(SwegridError::parse_error(
                    text,
                    format!("expected 2 values, found {}", parts.len()),
                ));
            }
            (parts[0], parts[1])
        }
        Wgs84Format::DegreesMinutes => split_after(text, '\'')?,
        Wgs84Format::DegreesMinutesSeconds => split_after(text, '"')?,
    };

    Ok((
        parse_coordinate(lat, format, Axis::Latitude)?,
        parse_coordinate(lon, format, Axis::Longitude)?,
    ))
}

/// Coupe juste après la première occurrence du marqueur de fin de latitude
fn split_after(text: &str, marker: char) -> Result<(&str, &str), SwegridError> {
    let end = text
        .find(marker)
        .map(|pos| pos + marker.len_utf8())
        .ok_or_else(|| SwegridError::parse_error(text, format!("missing {:?}", marker)))?;
    Ok((text[..end].trim(), text[end..].trim()))
}

/// Lit une coordonnée seule, bornée selon l'axe
pub fn parse_coordinate(text: &str, format: Wgs84Format, axis: Axis) -> Result<f64, SwegridError> {
    let value = match format {
        Wgs84Format::Degrees => parse_number(text)?,
        Wgs84Format::DegreesMinutes => parse_sexagesimal(text, false, axis)?,
        Wgs84Format::DegreesMinutesSeconds => parse_sexagesimal(text, true, axis)?,
    };

    if !value.is_finite() {
        return Err(SwegridError::parse_error(text, "angle is not finite"));
    }
    if value.abs() > axis.limit() {
        return Err(SwegridError::OutOfRange {
            value,
            limit: axis.limit(),
        });
    }
    Ok(value)
}

/// `N 59º 58' 55.23"` ; hémisphère optionnel, `-` accepté, `º` ou `°`
fn parse_sexagesimal(text: &str, with_seconds: bool, axis: Axis) -> Result<f64, SwegridError> {
    let text = text.trim();
    let mut chars = text.chars();
    let (sign, rest) = match chars.next() {
        None => return Err(SwegridError::parse_error(text, "empty coordinate")),
        Some(c) if c.eq_ignore_ascii_case(&axis.negative()) || c == '-' => (-1.0, chars.as_str()),
        Some(c) if c.eq_ignore_ascii_case(&axis.positive()) || c == '+' => (1.0, chars.as_str()),
        Some(_) => (1.0, text),
    };

    let (degrees, rest) = rest
        .split_once(|c: char| c == 'º' || c == '°')
        .ok_or_else(|| SwegridError::parse_error(text, "missing degree sign"))?;
    let (minutes, rest) = rest
        .split_once('\'')
        .ok_or_else(|| SwegridError::parse_error(text, "missing minutes mark"))?;

    let mut value = parse_number(degrees)? + parse_sixtieths(minutes, text, "minutes")? / 60.0;
    if with_seconds {
        let (seconds, _) = rest
            .split_once('"')
            .ok_or_else(|| SwegridError::parse_error(text, "missing seconds mark"))?;
        value += parse_sixtieths(seconds, text, "seconds")? / 3600.0;
    }

    Ok(sign * value)
}

/// Minutes ou secondes, dans [0, 60)
fn parse_sixtieths(part: &str, text: &str, unit: &str) -> Result<f64, SwegridError> {
    let value = parse_number(part)?;
    if !(0.0..60.0).contains(&value) {
        return Err(SwegridError::parse_error(text, format!("{} must be in [0, 60)", unit)));
    }
    Ok(value)
}

/// Nombre décimal, virgule acceptée comme séparateur
fn parse_number(text: &str) -> Result<f64, SwegridError> {
    let normalized = text.trim().replace(',', ".");
    fast_float::parse::<f64, _>(&normalized)
        .map_err(|_| SwegridError::parse_error(text, "invalid number"))
}

/// Écrit une coordonnée dans le format demandé
pub fn format_coordinate(value: f64, format: Wgs84Format, axis: Axis) -> String {
    let hemisphere = if value >= 0.0 {
        axis.positive()
    } else {
        axis.negative()
    };
    let magnitude = value.abs();
    let degrees = magnitude.floor();

    match format {
        Wgs84Format::Degrees => format!("{:.10}", value),
        Wgs84Format::DegreesMinutes => {
            let minutes = (magnitude - degrees) * 60.0;
            // Tronqué, pas arrondi : 59.99999' ne doit pas devenir 60'
            let minutes = (minutes * 10000.0).floor() / 10000.0;
            format!("{} {:.0}º {:.4}'", hemisphere, degrees, minutes)
        }
        Wgs84Format::DegreesMinutesSeconds => {
            let mut degrees = degrees;
            let mut minutes = ((magnitude - degrees) * 60.0).floor();
            let seconds = (magnitude - degrees - minutes / 60.0) * 3600.0;
            let mut seconds = (seconds * 100000.0).round() / 100000.0;
            // L'arrondi peut donner 60" : report sur les minutes puis les degrés
            if seconds >= 60.0 {
                seconds = 0.0;
                minutes += 1.0;
            }
            if minutes >= 60.0 {
                minutes = 0.0;
                degrees += 1.0;
            }
            format!("{} {:.0}º {:.0}' {:.5}\"", hemisphere, degrees, minutes, seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_degrees_minutes() {
        // Valeurs Eniro
        let (lat, lon) = parse_position("N 62º 10.560' E 015º 54.180'", Wgs84Format::DegreesMinutes).unwrap();
        assert!((lat - 62.176).abs() < 1e-9, "lat={}", lat);
        assert!((lon - 15.903).abs() < 1e-9, "lon={}", lon);
    }

    #[test]
    fn test_parse_degrees_minutes_seconds() {
        let (lat, lon) = parse_position(
            "N 62º 10' 33.60\" E 015º 54' 10.80\"",
            Wgs84Format::DegreesMinutesSeconds,
        )
        .unwrap();
        assert!((lat - 62.176).abs() < 1e-9, "lat={}", lat);
        assert!((lon - 15.903).abs() < 1e-9, "lon={}", lon);
    }

    #[test]
    fn test_parse_degrees_with_comma() {
        let (lat, lon) = parse_position("  59,3489 18,0473 ", Wgs84Format::Degrees).unwrap();
        assert_eq!(lat, 59.3489);
        assert_eq!(lon, 18.0473);
    }

    #[test]
    fn test_parse_southern_western() {
        let (lat, lon) = parse_position("S 33° 52' 4\" W 151° 12' 26\"", Wgs84Format::DegreesMinutesSeconds).unwrap();
        assert!(lat < 0.0 && lon < 0.0);
        assert!((lat + (33.0 + 52.0 / 60.0 + 4.0 / 3600.0)).abs() < 1e-12);
    }

    #[test]
    fn test_parse_without_hemisphere() {
        let lat = parse_coordinate("59º 30'", Wgs84Format::DegreesMinutes, Axis::Latitude).unwrap();
        assert_eq!(lat, 59.5);
        let lat = parse_coordinate("-59º 30'", Wgs84Format::DegreesMinutes, Axis::Latitude).unwrap();
        assert_eq!(lat, -59.5);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_position("59.1", Wgs84Format::Degrees).is_err());
        assert!(parse_position("N 59 10.5 E 15 2.0", Wgs84Format::DegreesMinutes).is_err());
        assert!(parse_position("N 59º 10' E 15º 2'", Wgs84Format::DegreesMinutesSeconds).is_err());
        assert!(matches!(
            parse_coordinate("abc", Wgs84Format::Degrees, Axis::Latitude),
            Err(SwegridError::Parse { .. })
        ));
    }

    #[test]
    fn test_range_per_axis() {
        assert!(matches!(
            parse_coordinate("N 91º 0'", Wgs84Format::DegreesMinutes, Axis::Latitude),
            Err(SwegridError::OutOfRange { .. })
        ));
        let lon = parse_coordinate("E 120º 30'", Wgs84Format::DegreesMinutes, Axis::Longitude).unwrap();
        assert_eq!(lon, 120.5);
    }

    #[test]
    fn test_format_dms() {
        let lat = 59.0 + 20.0 / 60.0 + 56.09287 / 3600.0;
        assert_eq!(
            format_coordinate(lat, Wgs84Format::DegreesMinutesSeconds, Axis::Latitude),
            "N 59º 20' 56.09287\""
        );
        assert_eq!(
            format_coordinate(-lat, Wgs84Format::DegreesMinutesSeconds, Axis::Longitude),
            "W 59º 20' 56.09287\""
        );
    }

    #[test]
    fn test_format_dms_carries_rounded_seconds() {
        let lat = 59.0 + 20.0 / 60.0 + 59.999999 / 3600.0;
        assert_eq!(
            format_coordinate(lat, Wgs84Format::DegreesMinutesSeconds, Axis::Latitude),
            "N 59º 21' 0.00000\""
        );
        assert_eq!(
            format_coordinate(59.99999999999, Wgs84Format::DegreesMinutesSeconds, Axis::Latitude),
            "N 60º 0' 0.00000\""
        );
        assert_eq!(
            format_coordinate(-17.99999999999, Wgs84Format::DegreesMinutesSeconds, Axis::Longitude),
            "W 18º 0' 0.00000\""
        );
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_position("nan nan", Wgs84Format::Degrees),
            Err(SwegridError::Parse { .. })
        ));
        assert!(parse_position("59.5 inf", Wgs84Format::Degrees).is_err());
        assert!(matches!(
            parse_coordinate("N nanº 0'", Wgs84Format::DegreesMinutes, Axis::Latitude),
            Err(SwegridError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_sixty_or_more() {
        assert!(matches!(
            parse_position("N 59º 75' E 18º 0'", Wgs84Format::DegreesMinutes),
            Err(SwegridError::Parse { .. })
        ));
        assert!(parse_coordinate("N 59º 60' 0\"", Wgs84Format::DegreesMinutesSeconds, Axis::Latitude).is_err());
        assert!(parse_coordinate("N 59º 20' 60.5\"", Wgs84Format::DegreesMinutesSeconds, Axis::Latitude).is_err());
        assert!(parse_coordinate("N 59º -5'", Wgs84Format::DegreesMinutes, Axis::Latitude).is_err());
        let lat = parse_coordinate("N 59º 59.999'", Wgs84Format::DegreesMinutes, Axis::Latitude).unwrap();
        assert!((lat - (59.0 + 59.999 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn test_format_dm_and_degrees() {
        assert_eq!(
            format_coordinate(62.176, Wgs84Format::DegreesMinutes, Axis::Latitude),
            "N 62º 10.5600'"
        );
        assert_eq!(
            format_coordinate(15.903, Wgs84Format::Degrees, Axis::Longitude),
            "15.9030000000"
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("DMS".parse::<Wgs84Format>().unwrap(), Wgs84Format::DegreesMinutesSeconds);
        assert_eq!("dm".parse::<Wgs84Format>().unwrap(), Wgs84Format::DegreesMinutes);
        assert_eq!("degrees".parse::<Wgs84Format>().unwrap(), Wgs84Format::Degrees);
        assert!("utm".parse::<Wgs84Format>().is_err());
    }
}
