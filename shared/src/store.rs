//! Render state for the choropleth and the actions that replace it.
//!
//! Every action produces a fresh [`RenderState`] from the immutable statistics
//! and the new selection before anything repaints, so the scales a painter
//! reads always agree with the selection it displays.

use crate::colors::{HIGHLIGHT, Rgb};
use crate::load::LoadError;
use crate::palette::Palette;
use crate::scale::{LinearScale, QuantizeScale};
use crate::stats::{ChoroplethIndex, Statistics};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub metric: String,
    pub palette: Palette,
}

/// Scales and index derived from one selection.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub selection: Selection,
    pub index: ChoroplethIndex,
    pub normalize: LinearScale,
    pub color: QuantizeScale,
}

impl RenderState {
    pub fn build(stats: &Statistics, selection: Selection) -> Self {
        let index = stats.index(&selection.metric);
        let normalize = LinearScale::normalizing(stats.values(&selection.metric));
        let color = QuantizeScale::normalized(selection.palette);
        Self {
            selection,
            index,
            normalize,
            color,
        }
    }

    /// Same index and normalization, new colors.
    pub fn with_palette(&self, palette: Palette) -> Self {
        Self {
            selection: Selection {
                metric: self.selection.metric.clone(),
                palette,
            },
            index: self.index.clone(),
            normalize: self.normalize,
            color: self.color.with_palette(palette),
        }
    }

    /// Position of `region` on the 0..1000 scale. Missing and zero values
    /// sit at 0.
    pub fn normalized(&self, region: &str) -> f64 {
        match self.index.get(region) {
            Some(v) if v != 0.0 => self.normalize.apply(v),
            _ => 0.0,
        }
    }

    pub fn bucket_for(&self, region: &str) -> usize {
        self.color.bucket(self.normalized(region))
    }

    pub fn color_for(&self, region: &str) -> Rgb {
        self.color.apply(self.normalized(region))
    }

    /// Unnamed regions never join statistics.
    pub fn region_color(&self, region: Option<&str>) -> Rgb {
        match region {
            Some(name) => self.color_for(name),
            None => self.color.apply(0.0),
        }
    }

    pub fn fill_for(&self, region: Option<&str>, hovered: bool) -> Rgb {
        if hovered {
            HIGHLIGHT
        } else {
            self.region_color(region)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectMetric(String),
    SelectPalette(Palette),
}

/// Layers an action invalidated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Refresh {
    pub regions: bool,
    pub labels: bool,
    pub legend: bool,
}

#[derive(Clone, Debug)]
pub struct MapStore {
    stats: Statistics,
    state: RenderState,
}

impl MapStore {
    /// Initial state: first metric of the first record, `palette` colors.
    pub fn new(stats: Statistics, palette: Palette) -> Result<Self, LoadError> {
        let metric = stats
            .default_metric()
            .ok_or(LoadError::NoMetrics)?
            .to_string();
        let state = RenderState::build(&stats, Selection { metric, palette });
        Ok(Self { stats, state })
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn dispatch(&mut self, action: Action) -> Refresh {
        match action {
            Action::SelectMetric(metric) => {
                let palette = self.state.selection.palette;
                self.state = RenderState::build(&self.stats, Selection { metric, palette });
                Refresh {
                    regions: true,
                    labels: true,
                    legend: false,
                }
            }
            Action::SelectPalette(palette) => {
                self.state = self.state.with_palette(palette);
                Refresh {
                    regions: true,
                    labels: true,
                    legend: true,
                }
            }
        }
    }

    /// `"<metric>: <raw value>"` for a region with statistics.
    pub fn tooltip_text(&self, region: Option<&str>) -> Option<String> {
        let record = self.stats.record(region?)?;
        let metric = &self.state.selection.metric;
        Some(format!("{metric}: {}", record.display(metric)))
    }
}
