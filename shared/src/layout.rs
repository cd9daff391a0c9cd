use crate::colors::{Rgb, TextColor};
use crate::display::LabelHint;
use crate::scene::Region;

/// Spacing between label lines, in ems.
pub const LINE_HEIGHT_EM: f64 = 1.2;

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub lines: Vec<String>,
    /// Anchor of the first line's baseline; text is centered on `x`.
    pub x: f64,
    pub y: f64,
    pub font_px: f64,
    pub color: TextColor,
}

impl Label {
    /// Baseline positions of each line, top to bottom.
    pub fn line_positions(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        let step = self.font_px * LINE_HEIGHT_EM;
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (line.as_str(), self.x, self.y + step * i as f64))
    }

    /// Canvas font shorthand.
    pub fn font(&self) -> String {
        format!("bold {}px sans-serif", self.font_px)
    }
}

/// One line per space-separated word.
pub fn split_lines(name: &str) -> Vec<String> {
    name.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Place the label for `region`, colored to contrast with `fill`.
/// Regions without a centroid get no label.
pub fn layout_label(region: &Region, hint: LabelHint, fill: Rgb) -> Option<Label> {
    let (cx, cy) = region.centroid?;
    Some(Label {
        lines: split_lines(region.label()),
        x: cx + hint.offset.0,
        y: cy + hint.offset.1,
        font_px: hint.font_px,
        color: fill.contrast_text(),
    })
}
