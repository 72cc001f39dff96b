//! Tests d'intégration : valeurs de référence Lantmäteriet et propriétés de la projection

use swegrid::{
    grs80, project_forward, project_inverse, zone_params_for, Position, Rt90Position, Rt90Zone,
    Sweref99Position, Sweref99Zone, Wgs84Format, Wgs84Position, Zone,
};

/// Valeurs de Lantmäteriet (enkel koordinattransformation), DMS uniquement
const REFERENCE_DMS: &str = "N 59º 58' 55.23\" E 017º 50' 06.12\"";

fn reference() -> Wgs84Position {
    Wgs84Position::parse(REFERENCE_DMS, Wgs84Format::DegreesMinutesSeconds).unwrap()
}

#[test]
fn test_reference_scenarios() {
    // RT90 → WGS84 (hitta.se)
    let wgs = Rt90Position::with_default_zone(6583052.0, 1627548.0).to_wgs84();
    assert!((wgs.latitude - 59.3489).abs() < 1e-4);
    assert!((wgs.longitude - 18.0473).abs() < 1e-4);

    // WGS84 → RT90 2.5 gon V
    let rt = Rt90Position::from_wgs84(&reference(), Rt90Zone::Gon2_5V);
    assert!((rt.x - 6653174.343).abs() < 1e-4);
    assert!((rt.y - 1613318.742).abs() < 1e-4);

    // WGS84 → SWEREF99 TM
    let sweref = Sweref99Position::from_wgs84(&reference(), Sweref99Zone::Tm);
    assert!((sweref.n - 6652797.165).abs() < 1e-4);
    assert!((sweref.e - 658185.201).abs() < 1e-4);

    // SWEREF99 TM → WGS84
    let back = Sweref99Position::with_default_zone(6652797.165, 658185.201).to_wgs84();
    assert!((back.latitude - reference().latitude).abs() < 1e-4);
    assert!((back.longitude - reference().longitude).abs() < 1e-4);
}

#[test]
fn test_geodetic_round_trip_every_zone() {
    let ellipsoid = grs80();
    for zone in Zone::projected() {
        let params = zone_params_for(zone);
        let mut lat = 55.0;
        while lat <= 69.0 {
            let mut offset = -3.5;
            while offset <= 3.5 {
                let lon = params.central_meridian + offset;
                let (x, y) = project_forward(ellipsoid, params, lat, lon);
                let (lat2, lon2) = project_inverse(ellipsoid, params, x, y);
                assert!(
                    (lat2 - lat).abs() < 1e-6 && (lon2 - lon).abs() < 1e-6,
                    "{}: ({}, {}) -> ({}, {})",
                    zone,
                    lat,
                    lon,
                    lat2,
                    lon2
                );
                offset += 0.5;
            }
            lat += 1.0;
        }
    }
}

#[test]
fn test_grid_round_trip_every_zone() {
    let ellipsoid = grs80();
    for zone in Zone::projected() {
        let params = zone_params_for(zone);
        for lat in [55.5, 60.25, 65.0, 68.75] {
            for offset in [-2.0, 0.5, 3.0] {
                let (x, y) = project_forward(ellipsoid, params, lat, params.central_meridian + offset);
                let (lat2, lon2) = project_inverse(ellipsoid, params, x, y);
                let (x2, y2) = project_forward(ellipsoid, params, lat2, lon2);
                assert!((x2 - x).abs() <= 0.001 + 1e-9, "{}: x {} -> {}", zone, x, x2);
                assert!((y2 - y).abs() <= 0.001 + 1e-9, "{}: y {} -> {}", zone, y, y2);
            }
        }
    }
}

#[test]
fn test_zone_independence_rt90() {
    let point = reference();
    let grids: Vec<Rt90Position> = Rt90Zone::ALL
        .iter()
        .map(|&zone| Rt90Position::from_wgs84(&point, zone))
        .collect();

    for (i, a) in grids.iter().enumerate() {
        for b in &grids[i + 1..] {
            assert!(a.x != b.x || a.y != b.y, "{} and {} collapse", a.zone, b.zone);
        }
        let wgs = a.to_wgs84();
        assert!((wgs.latitude - point.latitude).abs() < 1e-6, "{}", a.zone);
        assert!((wgs.longitude - point.longitude).abs() < 1e-6, "{}", a.zone);
    }
}

#[test]
fn test_determinism() {
    let point = reference();
    let first = Sweref99Position::from_wgs84(&point, Sweref99Zone::Zone16_30);
    for _ in 0..100 {
        let again = Sweref99Position::from_wgs84(&point, Sweref99Zone::Zone16_30);
        assert_eq!(first.n.to_bits(), again.n.to_bits());
        assert_eq!(first.e.to_bits(), again.e.to_bits());
    }

    let wgs = first.to_wgs84();
    let wgs_again = first.to_wgs84();
    assert_eq!(wgs.latitude.to_bits(), wgs_again.latitude.to_bits());
    assert_eq!(wgs.longitude.to_bits(), wgs_again.longitude.to_bits());
}

#[test]
fn test_concurrent_calls_agree() {
    let expected = Sweref99Position::from_wgs84(&reference(), Sweref99Zone::Tm);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| Sweref99Position::from_wgs84(&reference(), Sweref99Zone::Tm)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_position_trait() {
    let rt: &dyn Position = &Rt90Position::new(6653174.343, 1613318.742, Rt90Zone::Gon2_5V);
    let wgs = rt.to_wgs84();
    assert_eq!(
        wgs.latitude_to_string(Wgs84Format::DegreesMinutes),
        "N 59º 58.9204'"
    );
}

#[test]
fn test_serde_position() {
    let sweref = Sweref99Position::new(6652797.165, 658185.201, Sweref99Zone::Tm);
    let json = serde_json::to_string(&sweref).unwrap();
    assert_eq!(json, r#"{"n":6652797.165,"e":658185.201,"zone":"sweref_99_tm"}"#);
    let back: Sweref99Position = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sweref);
}
