//! Reprojection de documents GeoJSON
//!
//! Chaque géométrie passe par `geo` (conversion `geojson` ↔ `geo-types`), est
//! reprojetée puis réécrite. Les `bbox` deviennent fausses et sont retirées ;
//! le membre `crs` d'une FeatureCollection suit la zone cible.

use std::path::Path;

use anyhow::{Context, Result};
use geojson::{FeatureCollection, GeoJson, Geometry, JsonObject};
use swegrid::{Reprojector, Zone};
use tracing::info;

/// Reprojette toutes les géométries d'un document, retourne le nombre traité
pub fn reproject_geojson(doc: &mut GeoJson, reprojector: &Reprojector) -> Result<usize> {
    match doc {
        GeoJson::Geometry(geometry) => reproject_geometry(geometry, reprojector).map(|_| 1),
        GeoJson::Feature(feature) => {
            feature.bbox = None;
            match feature.geometry.as_mut() {
                Some(geometry) => reproject_geometry(geometry, reprojector).map(|_| 1),
                None => Ok(0),
            }
        }
        GeoJson::FeatureCollection(collection) => reproject_collection(collection, reprojector),
    }
}

fn reproject_collection(collection: &mut FeatureCollection, reprojector: &Reprojector) -> Result<usize> {
    collection.bbox = None;
    set_crs(&mut collection.foreign_members, reprojector.target());

    let mut count = 0;
    for (i, feature) in collection.features.iter_mut().enumerate() {
        feature.bbox = None;
        if let Some(geometry) = feature.geometry.as_mut() {
            reproject_geometry(geometry, reprojector)
                .with_context(|| format!("Feature #{}", i))?;
            count += 1;
        }
    }
    Ok(count)
}

/// Remplace la géométrie par sa reprojection
pub fn reproject_geometry(geometry: &mut Geometry, reprojector: &Reprojector) -> Result<()> {
    let geom: geo::Geometry<f64> = geo::Geometry::try_from(geometry.value.clone())
        .context("Unsupported GeoJSON geometry")?;
    let reprojected = reprojector.transform_geometry(&geom)?;

    geometry.value = geojson::Value::from(&reprojected);
    geometry.bbox = None;
    Ok(())
}

/// `crs` nommé (style GeoJSON 2008) ; absent pour WGS84, valeur par défaut de la RFC 7946
fn set_crs(members: &mut Option<JsonObject>, zone: Zone) {
    if zone == Zone::Identity {
        if let Some(members) = members.as_mut() {
            members.remove("crs");
        }
        return;
    }

    let crs = serde_json::json!({
        "type": "name",
        "properties": { "name": format!("urn:ogc:def:crs:EPSG::{}", zone.epsg()) }
    });
    members
        .get_or_insert_with(JsonObject::new)
        .insert("crs".to_string(), crs);
}

/// Lit, reprojette et écrit un fichier GeoJSON
pub fn reproject_file(input: &Path, output: &Path, reprojector: &Reprojector) -> Result<usize> {
    let content = std::fs::read_to_string(input)
        .context(format!("Failed to read file: {}", input.display()))?;
    let mut doc: GeoJson = content
        .parse()
        .context(format!("Failed to parse GeoJSON: {}", input.display()))?;

    let count = reproject_geojson(&mut doc, reprojector)?;

    std::fs::write(output, doc.to_string())
        .context(format!("Failed to create file: {}", output.display()))?;

    info!(
        "Reprojected {} geometries to {}",
        count,
        output.display()
    );
    Ok(count)
}
