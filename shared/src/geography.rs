use geo::{Geometry, MultiPolygon};
use geojson::GeoJson;
use thiserror::Error;

/// Fallback label for features without a `name` property.
pub const UNNAMED_REGION: &str = "Unknown";

#[derive(Debug, Error)]
pub enum GeographyError {
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,
}

/// One province outline, in source coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    /// `properties.name`; the join key against statistics and display properties.
    pub name: Option<String>,
    pub shape: MultiPolygon<f64>,
}

impl GeoFeature {
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(UNNAMED_REGION)
    }
}

/// Parse a FeatureCollection. Features without polygonal geometry are skipped.
pub fn parse_features(text: &str) -> Result<Vec<GeoFeature>, GeographyError> {
    let GeoJson::FeatureCollection(collection) = text.parse::<GeoJson>()? else {
        return Err(GeographyError::NotFeatureCollection);
    };

    let mut features = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let name = feature
            .property("name")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let Some(geometry) = feature.geometry else {
            continue;
        };
        let shape = match Geometry::<f64>::try_from(geometry)? {
            Geometry::Polygon(polygon) => MultiPolygon::new(vec![polygon]),
            Geometry::MultiPolygon(multi) => multi,
            _ => continue,
        };
        features.push(GeoFeature { name, shape });
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::{GeographyError, UNNAMED_REGION, parse_features};
    use crate::fixtures::TWO_SQUARES;

    #[test]
    fn keeps_polygonal_features_in_order() {
        let features = parse_features(TWO_SQUARES).unwrap();
        let names: Vec<_> = features.iter().map(|f| f.label()).collect();
        assert_eq!(names, vec!["A", "B", UNNAMED_REGION]);
        assert_eq!(features[0].shape.0.len(), 1);
        assert_eq!(features[2].name, None);
    }

    #[test]
    fn rejects_non_collections() {
        let single = r#"{"type":"Point","coordinates":[1,2]}"#;
        assert!(matches!(
            parse_features(single),
            Err(GeographyError::NotFeatureCollection)
        ));
        assert!(matches!(
            parse_features("not json"),
            Err(GeographyError::GeoJson(_))
        ));
    }
}
