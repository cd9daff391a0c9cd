use geo::{Contains, Coord, MultiPolygon, Point, Rect};

const GRID_COLS: usize = 40;
const GRID_ROWS: usize = 30;

/// A flat 2D grid over screen space for region hit-testing.
/// Built once after projection; geometry never changes afterwards.
pub struct SpatialGrid {
    cells: Vec<Vec<usize>>,
    bounds: Vec<Option<Rect<f64>>>,
    min_x: f64,
    min_y: f64,
    cell_w: f64,
    cell_h: f64,
}

impl SpatialGrid {
    /// Index `bounds[i]` under id `i`. Regions without bounds are never hit.
    pub fn build(bounds: Vec<Option<Rect<f64>>>) -> Self {
        let extent = bounds.iter().flatten().fold(None, |acc: Option<Rect<f64>>, r| {
            Some(match acc {
                None => *r,
                Some(a) => Rect::new(
                    Coord {
                        x: a.min().x.min(r.min().x),
                        y: a.min().y.min(r.min().y),
                    },
                    Coord {
                        x: a.max().x.max(r.max().x),
                        y: a.max().y.max(r.max().y),
                    },
                ),
            })
        });
        let Some(extent) = extent else {
            return Self {
                cells: Vec::new(),
                bounds,
                min_x: 0.0,
                min_y: 0.0,
                cell_w: 1.0,
                cell_h: 1.0,
            };
        };

        // Pad so points on the outer edge still land inside the grid.
        let (min_x, min_y) = (extent.min().x - 1.0, extent.min().y - 1.0);
        let (max_x, max_y) = (extent.max().x + 1.0, extent.max().y + 1.0);
        let cell_w = (max_x - min_x) / GRID_COLS as f64;
        let cell_h = (max_y - min_y) / GRID_ROWS as f64;

        let mut cells = vec![Vec::new(); GRID_COLS * GRID_ROWS];
        for (idx, rect) in bounds.iter().enumerate() {
            let Some(rect) = rect else { continue };
            let col_start = ((rect.min().x - min_x) / cell_w).floor().max(0.0) as usize;
            let col_end = ((rect.max().x - min_x) / cell_w)
                .floor()
                .min(GRID_COLS as f64 - 1.0) as usize;
            let row_start = ((rect.min().y - min_y) / cell_h).floor().max(0.0) as usize;
            let row_end = ((rect.max().y - min_y) / cell_h)
                .floor()
                .min(GRID_ROWS as f64 - 1.0) as usize;

            for row in row_start..=row_end {
                for col in col_start..=col_end {
                    cells[row * GRID_COLS + col].push(idx);
                }
            }
        }

        Self {
            cells,
            bounds,
            min_x,
            min_y,
            cell_w,
            cell_h,
        }
    }

    /// Ids whose bounding box may contain the point, in insertion order.
    pub fn candidates(&self, x: f64, y: f64) -> &[usize] {
        if self.cells.is_empty() || x.is_nan() || y.is_nan() {
            return &[];
        }
        let col = ((x - self.min_x) / self.cell_w).floor() as isize;
        let row = ((y - self.min_y) / self.cell_h).floor() as isize;
        if col < 0 || row < 0 || col >= GRID_COLS as isize || row >= GRID_ROWS as isize {
            return &[];
        }
        &self.cells[row as usize * GRID_COLS + col as usize]
    }

    /// The last-inserted shape containing the point. Shapes are painted in
    /// insertion order, so this is the one visible on top.
    pub fn find_at(&self, shapes: &[MultiPolygon<f64>], x: f64, y: f64) -> Option<usize> {
        let point = Point::new(x, y);
        self.candidates(x, y).iter().rev().copied().find(|&idx| {
            let in_box = self.bounds.get(idx).copied().flatten().is_some_and(|r| {
                x >= r.min().x && x <= r.max().x && y >= r.min().y && y <= r.max().y
            });
            in_box && shapes.get(idx).is_some_and(|shape| shape.contains(&point))
        })
    }
}

#[cfg(test)]
mod tests {
    use geo::{BoundingRect, MultiPolygon, polygon};

    use super::SpatialGrid;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![polygon![
            (x: x0, y: y0),
            (x: x1, y: y0),
            (x: x1, y: y1),
            (x: x0, y: y1),
            (x: x0, y: y0),
        ]])
    }

    fn grid(shapes: &[MultiPolygon<f64>]) -> SpatialGrid {
        SpatialGrid::build(shapes.iter().map(|s| s.bounding_rect()).collect())
    }

    #[test]
    fn finds_containing_shape() {
        let shapes = vec![square(0.0, 0.0, 10.0, 10.0), square(20.0, 0.0, 30.0, 10.0)];
        let grid = grid(&shapes);
        assert_eq!(grid.find_at(&shapes, 5.0, 5.0), Some(0));
        assert_eq!(grid.find_at(&shapes, 25.0, 5.0), Some(1));
        assert_eq!(grid.find_at(&shapes, 15.0, 5.0), None);
        assert_eq!(grid.find_at(&shapes, -50.0, 5.0), None);
    }

    #[test]
    fn overlapping_shapes_resolve_to_topmost() {
        let shapes = vec![square(0.0, 0.0, 10.0, 10.0), square(5.0, 5.0, 15.0, 15.0)];
        let grid = grid(&shapes);
        assert_eq!(grid.find_at(&shapes, 7.0, 7.0), Some(1));
        assert_eq!(grid.find_at(&shapes, 2.0, 2.0), Some(0));
    }

    #[test]
    fn bounding_box_alone_is_not_a_hit() {
        // L-shaped region: the notch is inside the bbox but outside the shape.
        let l_shape = MultiPolygon::new(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 4.0),
            (x: 4.0, y: 4.0),
            (x: 4.0, y: 10.0),
            (x: 0.0, y: 10.0),
            (x: 0.0, y: 0.0),
        ]]);
        let shapes = vec![l_shape];
        let grid = grid(&shapes);
        assert_eq!(grid.find_at(&shapes, 2.0, 8.0), Some(0));
        assert_eq!(grid.find_at(&shapes, 8.0, 8.0), None);
    }

    #[test]
    fn empty_grid_finds_nothing() {
        let grid = SpatialGrid::build(Vec::new());
        assert!(grid.candidates(0.0, 0.0).is_empty());
        assert_eq!(grid.find_at(&[], 0.0, 0.0), None);
    }
}
