//! Projection de Gauss-Krüger (Mercator transverse)
//!
//! Séries de Krüger à l'ordre 4 en `n`, forme fermée sans itération. Précision
//! sub-millimétrique aux latitudes suédoises, proche du méridien central.
//!
//! Convention des axes : `x` est la coordonnée nord, `y` la coordonnée est.

use tracing::debug;

use crate::ellipsoid::EllipsoidParameters;
use crate::zone::ZoneParameters;
use crate::SwegridError;

/// Moteur de projection pour un ellipsoïde et une zone
///
/// Les coefficients des séries sont dérivés une fois à la construction ;
/// le reste est sans état.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    ellipsoid: EllipsoidParameters,
    zone: ZoneParameters,
    /// k0 · â
    radius: f64,
    /// Correction latitude → latitude conforme (A, B, C, D)
    conformal: [f64; 4],
    /// Série directe (β1..β4)
    beta: [f64; 4],
    /// Série inverse (δ1..δ4)
    delta: [f64; 4],
    /// Correction latitude conforme → latitude (A*, B*, C*, D*)
    geodetic: [f64; 4],
}

impl Projector {
    pub fn new(ellipsoid: EllipsoidParameters, zone: ZoneParameters) -> Self {
        let e2 = ellipsoid.e2();
        let n = ellipsoid.n();
        let radius = zone.scale * ellipsoid.a_roof();

        let conformal = [
            e2,
            (5.0 * e2 * e2 - e2 * e2 * e2) / 6.0,
            (104.0 * e2 * e2 * e2 - 45.0 * e2 * e2 * e2 * e2) / 120.0,
            (1237.0 * e2 * e2 * e2 * e2) / 1260.0,
        ];
        let beta = [
            n / 2.0 - 2.0 * n * n / 3.0 + 5.0 * n * n * n / 16.0 + 41.0 * n * n * n * n / 180.0,
            13.0 * n * n / 48.0 - 3.0 * n * n * n / 5.0 + 557.0 * n * n * n * n / 1440.0,
            61.0 * n * n * n / 240.0 - 103.0 * n * n * n * n / 140.0,
            49561.0 * n * n * n * n / 161280.0,
        ];
        let delta = [
            n / 2.0 - 2.0 * n * n / 3.0 + 37.0 * n * n * n / 96.0 - n * n * n * n / 360.0,
            n * n / 48.0 + n * n * n / 15.0 - 437.0 * n * n * n * n / 1440.0,
            17.0 * n * n * n / 480.0 - 37.0 * n * n * n * n / 840.0,
            4397.0 * n * n * n * n / 161280.0,
        ];
        let geodetic = [
            e2 + e2 * e2 + e2 * e2 * e2 + e2 * e2 * e2 * e2,
            -(7.0 * e2 * e2 + 17.0 * e2 * e2 * e2 + 30.0 * e2 * e2 * e2 * e2) / 6.0,
            (224.0 * e2 * e2 * e2 + 889.0 * e2 * e2 * e2 * e2) / 120.0,
            -(4279.0 * e2 * e2 * e2 * e2) / 1260.0,
        ];

        Self {
            ellipsoid,
            zone,
            radius,
            conformal,
            beta,
            delta,
            geodetic,
        }
    }

    pub fn ellipsoid(&self) -> EllipsoidParameters {
        self.ellipsoid
    }

    pub fn zone(&self) -> ZoneParameters {
        self.zone
    }

    /// Géographique (degrés) → grille (x nord, y est), arrondi au millimètre
    ///
    /// Hors du voisinage de la zone le résultat peut être NaN ; voir
    /// [`Projector::try_forward`].
    pub fn forward(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        if self.zone.is_identity() {
            return (latitude, longitude);
        }

        let phi = latitude.to_radians();
        let delta_lambda = longitude.to_radians() - self.zone.central_meridian.to_radians();

        let phi_star = phi - phi.sin() * phi.cos() * series_in_sin2(&self.conformal, phi.sin());
        let xi_prim = (phi_star.tan() / delta_lambda.cos()).atan();
        let eta_prim = (phi_star.cos() * delta_lambda.sin()).atanh();

        let (xi, eta) = self
            .beta
            .iter()
            .zip(1..)
            .fold((xi_prim, eta_prim), |(xi, eta), (b, i)| {
                let k = 2.0 * i as f64;
                (
                    xi + b * (k * xi_prim).sin() * (k * eta_prim).cosh(),
                    eta + b * (k * xi_prim).cos() * (k * eta_prim).sinh(),
                )
            });

        let x = self.radius * xi + self.zone.false_northing;
        let y = self.radius * eta + self.zone.false_easting;

        (round_mm(x), round_mm(y))
    }

    /// Grille (x nord, y est) → géographique (degrés), pleine précision
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        if self.zone.is_identity() {
            return (x, y);
        }

        let xi = (x - self.zone.false_northing) / self.radius;
        let eta = (y - self.zone.false_easting) / self.radius;

        let (xi_prim, eta_prim) = self
            .delta
            .iter()
            .zip(1..)
            .fold((xi, eta), |(xi_acc, eta_acc), (d, i)| {
                let k = 2.0 * i as f64;
                (
                    xi_acc - d * (k * xi).sin() * (k * eta).cosh(),
                    eta_acc - d * (k * xi).cos() * (k * eta).sinh(),
                )
            });

        let phi_star = (xi_prim.sin() / eta_prim.cosh()).asin();
        let delta_lambda = (eta_prim.sinh() / xi_prim.cos()).atan();

        let lon = self.zone.central_meridian.to_radians() + delta_lambda;
        let lat = phi_star
            + phi_star.sin() * phi_star.cos() * series_in_sin2(&self.geodetic, phi_star.sin());

        (lat.to_degrees(), lon.to_degrees())
    }

    /// Comme [`Projector::forward`], mais refuse un résultat non fini
    pub fn try_forward(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), SwegridError> {
        let (x, y) = self.forward(latitude, longitude);
        if x.is_finite() && y.is_finite() {
            Ok((x, y))
        } else {
            debug!(latitude, longitude, "forward projection out of domain");
            Err(SwegridError::out_of_domain(latitude, longitude))
        }
    }

    /// Comme [`Projector::inverse`], mais refuse un résultat non fini
    pub fn try_inverse(&self, x: f64, y: f64) -> Result<(f64, f64), SwegridError> {
        let (lat, lon) = self.inverse(x, y);
        if lat.is_finite() && lon.is_finite() {
            Ok((lat, lon))
        } else {
            debug!(x, y, "inverse projection out of domain");
            Err(SwegridError::out_of_domain(x, y))
        }
    }
}

/// c0 + c1·s² + c2·s⁴ + c3·s⁶
fn series_in_sin2(coefficients: &[f64; 4], sin: f64) -> f64 {
    coefficients[0]
        + coefficients[1] * sin.powi(2)
        + coefficients[2] * sin.powi(4)
        + coefficients[3] * sin.powi(6)
}

/// Arrondi au millimètre
fn round_mm(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Projection directe sans construire de `Projector` explicitement
pub fn project_forward(
    ellipsoid: EllipsoidParameters,
    zone: ZoneParameters,
    latitude: f64,
    longitude: f64,
) -> (f64, f64) {
    Projector::new(ellipsoid, zone).forward(latitude, longitude)
}

/// Projection inverse sans construire de `Projector` explicitement
pub fn project_inverse(ellipsoid: EllipsoidParameters, zone: ZoneParameters, x: f64, y: f64) -> (f64, f64) {
    Projector::new(ellipsoid, zone).inverse(x, y)
}
