use geo::{BoundingRect, Coord, MapCoords, MultiPolygon, Rect};

/// Planar identity projection with the Y axis flipped (north up), scaled and
/// translated so the source bounds fill a `width` x `height` surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Projection {
    /// Fit `shapes` into the surface, preserving aspect ratio and centering
    /// the slack axis.
    pub fn fit<'a>(
        shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>,
        width: f64,
        height: f64,
    ) -> Self {
        let bounds = shapes
            .into_iter()
            .filter_map(|shape| shape.bounding_rect())
            .reduce(|a, b| {
                Rect::new(
                    Coord {
                        x: a.min().x.min(b.min().x),
                        y: a.min().y.min(b.min().y),
                    },
                    Coord {
                        x: a.max().x.max(b.max().x),
                        y: a.max().y.max(b.max().y),
                    },
                )
            });
        match bounds {
            Some(rect) => Self::fit_bounds(rect, width, height),
            None => Self::default(),
        }
    }

    pub fn fit_bounds(bounds: Rect<f64>, width: f64, height: f64) -> Self {
        let (min, max) = (bounds.min(), bounds.max());
        let world_w = max.x - min.x;
        let world_h = max.y - min.y;

        // A zero extent on one axis leaves the other to decide the scale.
        let scale = (width / world_w).min(height / world_h);
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };

        Self {
            scale,
            offset_x: (width - scale * (min.x + max.x)) / 2.0,
            offset_y: (height + scale * (min.y + max.y)) / 2.0,
        }
    }

    /// Convert source coordinates to surface coordinates.
    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        (
            wx * self.scale + self.offset_x,
            -wy * self.scale + self.offset_y,
        )
    }

    pub fn project(&self, shape: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        shape.map_coords(|c| {
            let (x, y) = self.world_to_screen(c.x, c.y);
            Coord { x, y }
        })
    }
}

#[cfg(test)]
mod tests {
    use geo::{Coord, Rect};

    use super::Projection;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect<f64> {
        Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
    }

    #[test]
    fn wide_bounds_fill_width_and_center_vertically() {
        let p = Projection::fit_bounds(rect(0.0, 0.0, 20.0, 12.0), 800.0, 600.0);
        assert_close(p.scale, 40.0);
        // North-west corner maps to the left edge, 60px below the top.
        let (x, y) = p.world_to_screen(0.0, 12.0);
        assert_close(x, 0.0);
        assert_close(y, 60.0);
        let (x, y) = p.world_to_screen(20.0, 0.0);
        assert_close(x, 800.0);
        assert_close(y, 540.0);
    }

    #[test]
    fn tall_bounds_fill_height_and_center_horizontally() {
        let p = Projection::fit_bounds(rect(0.0, 0.0, 10.0, 15.0), 800.0, 600.0);
        assert_close(p.scale, 40.0);
        let (x, y) = p.world_to_screen(0.0, 15.0);
        assert_close(x, 200.0);
        assert_close(y, 0.0);
        let (x, y) = p.world_to_screen(10.0, 0.0);
        assert_close(x, 600.0);
        assert_close(y, 600.0);
    }

    #[test]
    fn degenerate_bounds_keep_unit_scale() {
        let p = Projection::fit_bounds(rect(3.0, 3.0, 3.0, 3.0), 800.0, 600.0);
        assert_close(p.scale, 1.0);
        let (x, y) = p.world_to_screen(3.0, 3.0);
        assert_close(x, 400.0);
        assert_close(y, 300.0);
    }
}
