//! Point représentatif (ancre de popup) d'une géométrie de pays
//!
//! Deux stratégies:
//! - `VertexAverage`: moyenne des sommets de l'anneau extérieur (le premier
//!   sous-polygone pour un MultiPolygon). Biaisée vers les zones riches en sommets,
//!   suffisante pour ancrer une popup.
//! - `AreaWeighted`: centroïde géométrique pondéré par l'aire via `geo`,
//!   sur l'ensemble des sous-polygones (trous compris).

use std::fmt;
use std::str::FromStr;

use geo::{Centroid, Coord, LineString, MultiPolygon, Polygon};
use geojson::{PolygonType, Position, Value};
use serde::{Deserialize, Serialize};

/// Position d'ancrage, sérialisée en `[latitude, longitude]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lng]
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.lat, self.lng)
    }
}

/// Stratégie de calcul du point représentatif
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CentroidStrategy {
    /// Moyenne des sommets de l'anneau extérieur (défaut)
    #[default]
    VertexAverage,
    /// Centroïde pondéré par l'aire
    AreaWeighted,
}

impl FromStr for CentroidStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vertex-average" | "vertex" | "average" | "mean" => Ok(Self::VertexAverage),
            "area-weighted" | "area" | "centroid" => Ok(Self::AreaWeighted),
            _ => Err(format!(
                "Invalid centroid strategy: {}. Use: vertex-average, area-weighted",
                s
            )),
        }
    }
}

impl fmt::Display for CentroidStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexAverage => f.write_str("vertex-average"),
            Self::AreaWeighted => f.write_str("area-weighted"),
        }
    }
}

/// Calcule le point représentatif d'une géométrie.
///
/// Retourne `None` pour tout type autre que Polygon / MultiPolygon, ou si
/// aucune coordonnée exploitable n'est trouvée.
pub fn representative_point(geometry: &Value, strategy: CentroidStrategy) -> Option<LatLng> {
    let point = match strategy {
        CentroidStrategy::VertexAverage => vertex_average(outer_ring(geometry)?),
        CentroidStrategy::AreaWeighted => area_weighted(geometry),
    }?;

    point.is_finite().then_some(point)
}

/// Anneau extérieur utilisé par la moyenne des sommets
///
/// Polygon: `coordinates[0]`, MultiPolygon: `coordinates[0][0]`.
pub fn outer_ring(geometry: &Value) -> Option<&[Position]> {
    match geometry {
        Value::Polygon(rings) => rings.first().map(Vec::as_slice),
        Value::MultiPolygon(polygons) => polygons.first()?.first().map(Vec::as_slice),
        _ => None,
    }
}

/// Nom du type GeoJSON de la géométrie
pub fn geometry_kind(geometry: &Value) -> &'static str {
    match geometry {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Moyenne arithmétique des sommets, latitude et longitude indépendamment.
///
/// Le sommet de fermeture éventuel compte comme un sommet à part entière.
pub fn vertex_average(ring: &[Position]) -> Option<LatLng> {
    let mut sum_lat = 0.0;
    let mut sum_lng = 0.0;
    let mut count = 0usize;

    for coord in ring.iter().filter_map(to_coord) {
        sum_lng += coord.x;
        sum_lat += coord.y;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(LatLng::new(sum_lat / n, sum_lng / n))
}

fn area_weighted(geometry: &Value) -> Option<LatLng> {
    let centroid = match geometry {
        Value::Polygon(rings) => to_polygon(rings)?.centroid(),
        Value::MultiPolygon(polygons) => {
            let polygons: Vec<Polygon> = polygons.iter().filter_map(to_polygon).collect();
            MultiPolygon::new(polygons).centroid()
        }
        _ => None,
    }?;

    Some(LatLng::new(centroid.y(), centroid.x()))
}

fn to_polygon(rings: &PolygonType) -> Option<Polygon> {
    let mut rings = rings.iter().map(|ring| to_line_string(ring));
    let exterior = rings.next()?;
    if exterior.0.is_empty() {
        return None;
    }
    Some(Polygon::new(exterior, rings.collect()))
}

fn to_line_string(ring: &[Position]) -> LineString {
    LineString::new(ring.iter().filter_map(to_coord).collect())
}

/// Position GeoJSON `[longitude, latitude, ...]` vers `Coord { x: lng, y: lat }`
fn to_coord(position: &Position) -> Option<Coord> {
    match position.as_slice() {
        [x, y, ..] if x.is_finite() && y.is_finite() => Some(Coord { x: *x, y: *y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<Position> {
        points.iter().map(|&(lng, lat)| vec![lng, lat]).collect()
    }

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Position> {
        ring(&[
            (x0, y0),
            (x0, y0 + size),
            (x0 + size, y0 + size),
            (x0 + size, y0),
        ])
    }

    #[test]
    fn test_polygon_vertex_average() {
        let geometry = Value::Polygon(vec![square(0.0, 0.0, 2.0)]);
        let point = representative_point(&geometry, CentroidStrategy::VertexAverage).unwrap();
        assert_eq!(point, LatLng::new(1.0, 1.0));
    }

    #[test]
    fn test_vertex_average_is_lat_lng_order() {
        // lng=10, lat=40 en moyenne
        let geometry = Value::Polygon(vec![ring(&[(8.0, 38.0), (12.0, 38.0), (10.0, 44.0)])]);
        let point = representative_point(&geometry, CentroidStrategy::VertexAverage).unwrap();
        assert!((point.lat - 40.0).abs() < 1e-9);
        assert!((point.lng - 10.0).abs() < 1e-9);
        assert_eq!(<[f64; 2]>::from(point), [point.lat, point.lng]);
    }

    #[test]
    fn test_vertex_average_ignores_holes() {
        let hole = ring(&[(0.1, 0.1), (0.1, 0.2), (0.2, 0.2)]);
        let geometry = Value::Polygon(vec![square(0.0, 0.0, 2.0), hole]);
        let point = representative_point(&geometry, CentroidStrategy::VertexAverage).unwrap();
        assert_eq!(point, LatLng::new(1.0, 1.0));
    }

    #[test]
    fn test_multipolygon_uses_first_outer_ring_only() {
        let geometry = Value::MultiPolygon(vec![
            vec![square(0.0, 0.0, 2.0)],
            vec![square(100.0, 50.0, 10.0)],
            vec![square(-60.0, -30.0, 4.0)],
        ]);
        let point = representative_point(&geometry, CentroidStrategy::VertexAverage).unwrap();
        assert_eq!(point, LatLng::new(1.0, 1.0));
    }

    #[test]
    fn test_unsupported_geometry_has_no_point() {
        let line = Value::LineString(ring(&[(0.0, 0.0), (1.0, 1.0)]));
        let point = Value::Point(vec![1.0, 2.0]);
        for strategy in [CentroidStrategy::VertexAverage, CentroidStrategy::AreaWeighted] {
            assert_eq!(representative_point(&line, strategy), None);
            assert_eq!(representative_point(&point, strategy), None);
        }
    }

    #[test]
    fn test_empty_rings_have_no_point() {
        assert_eq!(vertex_average(&[]), None);
        let geometry = Value::Polygon(vec![]);
        assert_eq!(
            representative_point(&geometry, CentroidStrategy::VertexAverage),
            None
        );
        assert_eq!(
            representative_point(&geometry, CentroidStrategy::AreaWeighted),
            None
        );
        let geometry = Value::MultiPolygon(vec![]);
        assert_eq!(
            representative_point(&geometry, CentroidStrategy::VertexAverage),
            None
        );
    }

    #[test]
    fn test_malformed_positions_are_skipped() {
        let mut positions = square(0.0, 0.0, 2.0);
        positions.push(vec![5.0]);
        positions.push(vec![f64::NAN, 3.0]);
        assert_eq!(vertex_average(&positions), Some(LatLng::new(1.0, 1.0)));
    }

    #[test]
    fn test_area_weighted_polygon() {
        // Sommets concentrés sur un côté: la moyenne est biaisée, pas le centroïde
        let dense = ring(&[
            (0.0, 0.0),
            (0.0, 4.0),
            (4.0, 4.0),
            (4.0, 3.0),
            (4.0, 2.0),
            (4.0, 1.0),
            (4.0, 0.0),
        ]);
        let geometry = Value::Polygon(vec![dense]);

        let centroid = representative_point(&geometry, CentroidStrategy::AreaWeighted).unwrap();
        assert!((centroid.lat - 2.0).abs() < 1e-9);
        assert!((centroid.lng - 2.0).abs() < 1e-9);

        let average = representative_point(&geometry, CentroidStrategy::VertexAverage).unwrap();
        assert!(average.lng > 2.0);
    }

    #[test]
    fn test_area_weighted_multipolygon_uses_all_parts() {
        let geometry = Value::MultiPolygon(vec![
            vec![square(0.0, 0.0, 2.0)],
            vec![square(10.0, 0.0, 2.0)],
        ]);
        let point = representative_point(&geometry, CentroidStrategy::AreaWeighted).unwrap();
        assert!((point.lng - 6.0).abs() < 1e-9);
        assert!((point.lat - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "vertex-average".parse::<CentroidStrategy>(),
            Ok(CentroidStrategy::VertexAverage)
        );
        assert_eq!(
            "Area".parse::<CentroidStrategy>(),
            Ok(CentroidStrategy::AreaWeighted)
        );
        assert!("median".parse::<CentroidStrategy>().is_err());
        assert_eq!(CentroidStrategy::default(), CentroidStrategy::VertexAverage);
        assert_eq!(CentroidStrategy::AreaWeighted.to_string(), "area-weighted");
    }

    #[test]
    fn test_geometry_kind() {
        assert_eq!(geometry_kind(&Value::Polygon(vec![])), "Polygon");
        assert_eq!(geometry_kind(&Value::MultiPolygon(vec![])), "MultiPolygon");
        assert_eq!(geometry_kind(&Value::LineString(vec![])), "LineString");
    }

    #[test]
    fn test_lat_lng_serializes_as_pair() {
        let json = serde_json::to_string(&LatLng::new(46.5, 2.25)).unwrap();
        assert_eq!(json, "[46.5,2.25]");
        let back: LatLng = serde_json::from_str("[1.0,2.0]").unwrap();
        assert_eq!(back, LatLng::new(1.0, 2.0));
    }
}
