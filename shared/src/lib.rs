pub mod colors;
pub mod dashboard;
pub mod display;
pub mod geography;
pub mod interaction;
pub mod layout;
pub mod load;
pub mod palette;
pub mod projection;
pub mod scale;
pub mod scene;
pub mod spatial;
pub mod stats;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use colors::{Rgb, TextColor};
pub use display::{DisplayProperties, LabelHint};
pub use geography::{GeoFeature, parse_features};
pub use load::{ConfigError, LoadError, LoadStage};
pub use palette::Palette;
pub use scene::{Region, Scene};
pub use stats::Statistics;
pub use store::{Action, MapStore, Refresh, RenderState};
