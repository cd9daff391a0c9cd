use web_sys::CanvasRenderingContext2d;

use iranmap_shared::scene::Coord;
use iranmap_shared::{RenderState, Scene};

use crate::config::{SURFACE_HEIGHT, SURFACE_WIDTH};

const STROKE_COLOR: &str = "black";
const STROKE_WIDTH: f64 = 0.5;

/// Fill every region from the render state; `hovered` takes the highlight.
pub fn paint_regions(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    state: &RenderState,
    hovered: Option<usize>,
) {
    ctx.clear_rect(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_stroke_style_str(STROKE_COLOR);

    for (id, region) in scene.regions().iter().enumerate() {
        let fill = state.fill_for(region.name.as_deref(), hovered == Some(id));
        ctx.begin_path();
        for polygon in &region.shape.0 {
            trace_ring(ctx, &polygon.exterior().0);
            for hole in polygon.interiors() {
                trace_ring(ctx, &hole.0);
            }
        }
        ctx.set_fill_style_str(&fill.css());
        ctx.fill();
        ctx.stroke();
    }
}

fn trace_ring(ctx: &CanvasRenderingContext2d, ring: &[Coord]) {
    let Some((first, rest)) = ring.split_first() else {
        return;
    };
    ctx.move_to(first.x, first.y);
    for c in rest {
        ctx.line_to(c.x, c.y);
    }
    ctx.close_path();
}
