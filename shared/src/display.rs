use std::collections::HashMap;

use serde::Deserialize;

/// Label font size used when a region has no override.
pub const DEFAULT_FONT_PX: f64 = 10.0;

/// `states_properties.json`: per-region label hints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayPropertiesFile {
    #[serde(default)]
    pub states: Vec<StateEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEntry {
    pub persian_name: String,
    /// `[dx, dy]` added to the centroid. Either axis may be missing.
    #[serde(default)]
    pub position: Vec<Option<f64>>,
    /// CSS length such as `"12px"`.
    #[serde(default)]
    pub font_size: Option<String>,
}

/// Resolved hints for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelHint {
    pub offset: (f64, f64),
    pub font_px: f64,
}

impl Default for LabelHint {
    fn default() -> Self {
        Self {
            offset: (0.0, 0.0),
            font_px: DEFAULT_FONT_PX,
        }
    }
}

/// Display hints keyed by region name. First entry for a name wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayProperties {
    hints: HashMap<String, LabelHint>,
}

impl DisplayProperties {
    /// The top level must be an object; `states` may be absent.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "display properties must be a JSON object",
            ));
        }
        let file: DisplayPropertiesFile = serde_json::from_value(value)?;
        Ok(Self::from_file(file))
    }

    pub fn from_file(file: DisplayPropertiesFile) -> Self {
        let mut hints = HashMap::with_capacity(file.states.len());
        for entry in file.states {
            let axis = |i: usize| entry.position.get(i).copied().flatten().unwrap_or(0.0);
            let hint = LabelHint {
                offset: (axis(0), axis(1)),
                font_px: entry
                    .font_size
                    .as_deref()
                    .and_then(parse_px)
                    .unwrap_or(DEFAULT_FONT_PX),
            };
            hints.entry(entry.persian_name).or_insert(hint);
        }
        Self { hints }
    }

    /// Hints for `region`, or defaults when it has no entry.
    pub fn hint(&self, region: &str) -> LabelHint {
        self.hints.get(region).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

/// `"12px"`, `"12"` or `" 9.5px "` → pixels. Anything else is rejected.
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite() && *px > 0.0)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FONT_PX, DisplayProperties, LabelHint, parse_px};

    const PROPS: &str = r#"{
        "states": [
            {"persianName": "A", "position": [3, -4], "fontSize": "12px"},
            {"persianName": "B", "position": [null, 7]},
            {"persianName": "C", "fontSize": "huge"},
            {"persianName": "A", "position": [100, 100]}
        ]
    }"#;

    #[test]
    fn resolves_offsets_and_font_sizes() {
        let props = DisplayProperties::from_json(PROPS).unwrap();
        assert_eq!(
            props.hint("A"),
            LabelHint {
                offset: (3.0, -4.0),
                font_px: 12.0
            }
        );
        assert_eq!(props.hint("B").offset, (0.0, 7.0));
        assert_eq!(props.hint("B").font_px, DEFAULT_FONT_PX);
        assert_eq!(props.hint("C").font_px, DEFAULT_FONT_PX);
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn missing_region_gets_defaults() {
        let props = DisplayProperties::from_json(PROPS).unwrap();
        assert_eq!(props.hint("Z"), LabelHint::default());
        assert_eq!(LabelHint::default().offset, (0.0, 0.0));
    }

    #[test]
    fn missing_states_key_is_empty() {
        let props = DisplayProperties::from_json("{}").unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        assert!(DisplayProperties::from_json("[]").is_err());
        assert!(DisplayProperties::from_json("[[]]").is_err());
        assert!(DisplayProperties::from_json("42").is_err());
    }

    #[test]
    fn parses_pixel_lengths() {
        assert_eq!(parse_px("12px"), Some(12.0));
        assert_eq!(parse_px(" 9.5px "), Some(9.5));
        assert_eq!(parse_px("14"), Some(14.0));
        assert_eq!(parse_px("1em"), None);
        assert_eq!(parse_px("0px"), None);
    }
}
