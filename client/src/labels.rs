use web_sys::CanvasRenderingContext2d;

use iranmap_shared::layout::layout_label;
use iranmap_shared::{DisplayProperties, RenderState, Scene};

use crate::config::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Draw one multi-line name per region, contrasting with its fill.
pub fn paint_labels(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    display: &DisplayProperties,
    state: &RenderState,
) {
    ctx.clear_rect(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT);
    ctx.set_text_align("center");

    for region in scene.regions() {
        let name = region.name.as_deref();
        let hint = name.map(|n| display.hint(n)).unwrap_or_default();
        let Some(label) = layout_label(region, hint, state.region_color(name)) else {
            continue;
        };
        ctx.set_font(&label.font());
        ctx.set_fill_style_str(label.color.css());
        for (line, x, y) in label.line_positions() {
            let _ = ctx.fill_text(line, x, y);
        }
    }
}
