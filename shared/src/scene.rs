use geo::{BoundingRect, Centroid, MultiPolygon};

pub use geo::Coord;

use crate::geography::{GeoFeature, UNNAMED_REGION};
use crate::projection::Projection;
use crate::spatial::SpatialGrid;

/// One region in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: Option<String>,
    pub shape: MultiPolygon<f64>,
    /// Area-weighted centroid; `None` for zero-area shapes.
    pub centroid: Option<(f64, f64)>,
}

impl Region {
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(UNNAMED_REGION)
    }
}

/// Every region projected once onto the fixed surface, plus the hit index.
pub struct Scene {
    regions: Vec<Region>,
    shapes: Vec<MultiPolygon<f64>>,
    grid: SpatialGrid,
}

impl Scene {
    pub fn build(features: &[GeoFeature], width: f64, height: f64) -> Self {
        let projection = Projection::fit(features.iter().map(|f| &f.shape), width, height);

        let regions: Vec<Region> = features
            .iter()
            .map(|feature| {
                let shape = projection.project(&feature.shape);
                let centroid = shape.centroid().map(|p| (p.x(), p.y()));
                Region {
                    name: feature.name.clone(),
                    shape,
                    centroid,
                }
            })
            .collect();
        let shapes: Vec<_> = regions.iter().map(|r| r.shape.clone()).collect();
        let grid = SpatialGrid::build(shapes.iter().map(|s| s.bounding_rect()).collect());

        Self {
            regions,
            shapes,
            grid,
        }
    }

    /// Regions in paint order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: usize) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Topmost region under a surface point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.grid.find_at(&self.shapes, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::fixtures::TWO_SQUARES;
    use crate::geography::parse_features;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    fn scene() -> Scene {
        Scene::build(&parse_features(TWO_SQUARES).unwrap(), 800.0, 600.0)
    }

    #[test]
    fn projects_fixture_onto_surface() {
        let scene = scene();
        // Source bounds (0,0)-(20,12) scale by 40 onto 800x600.
        assert_eq!(scene.regions().len(), 3);
        let (cx, cy) = scene.regions()[0].centroid.unwrap();
        assert_close(cx, 200.0);
        assert_close(cy, 340.0);
    }

    #[test]
    fn hit_test_maps_surface_points_to_regions() {
        let scene = scene();
        assert_eq!(scene.hit_test(200.0, 340.0), Some(0));
        assert_eq!(scene.hit_test(600.0, 340.0), Some(1));
        // Strip above both squares, between y=60 and y=140 on screen.
        assert_eq!(scene.hit_test(400.0, 100.0), Some(2));
        assert_eq!(scene.hit_test(400.0, 20.0), None);
    }

    #[test]
    fn unnamed_region_has_fallback_label() {
        let scene = scene();
        assert_eq!(scene.region(0).unwrap().label(), "A");
        assert_eq!(scene.region(2).unwrap().label(), "Unknown");
        assert!(scene.region(9).is_none());
    }
}
