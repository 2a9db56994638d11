//! Export des points d'ancrage en GeoJSON

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use tracing::warn;

use lawmap::{CentroidStrategy, CountryCollection};

/// Construit une FeatureCollection de Points, un par pays ancrable.
///
/// Retourne aussi le nombre de pays ignorés faute de point représentatif.
pub fn anchors_to_geojson(
    countries: &CountryCollection,
    strategy: CentroidStrategy,
) -> (FeatureCollection, usize) {
    let mut features = Vec::with_capacity(countries.len());
    let mut skipped = 0;

    for country in &countries.features {
        let Some(point) = country.representative_point(strategy) else {
            warn!(country = %country.name, kind = country.kind(), "No anchor, skipped");
            skipped += 1;
            continue;
        };

        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), country.name.clone().into());

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![point.lng, point.lat]))),
            id: country.id.clone(),
            properties: Some(properties),
            foreign_members: None,
        });
    }

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    (collection, skipped)
}

/// Écrit les points d'ancrage dans un fichier GeoJSON
pub fn export_anchors(
    countries: &CountryCollection,
    strategy: CentroidStrategy,
    output_path: &Path,
) -> Result<usize> {
    let (collection, skipped) = anchors_to_geojson(countries, strategy);

    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &collection).context("Failed to write GeoJSON")?;
    writer.flush()?;

    Ok(skipped)
}
