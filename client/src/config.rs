use iranmap_shared::dashboard::{DEFAULT_TITLE, Table};
use iranmap_shared::{ConfigError, Palette, Statistics};

/// Map surface size in CSS pixels.
pub const SURFACE_WIDTH: f64 = 800.0;
pub const SURFACE_HEIGHT: f64 = 600.0;

/// Canvas backing stores are at least this many device pixels per CSS pixel.
pub const MIN_RENDER_SCALE: f64 = 2.0;

pub const DEFAULT_GEO_SRC: &str = "./geo_jsons/iran1400.geojson";
pub const DEFAULT_PROPERTIES_SRC: &str = "./data/states_properties.json";

/// `<iran-map>` attributes.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub title: Option<String>,
    pub statistics: Statistics,
    pub geo_src: String,
    pub properties_src: String,
    pub palette: Palette,
}

impl WidgetConfig {
    /// Read the element's attributes through `attr`. A missing `map-data`
    /// is an empty payload; a malformed one is an error.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let statistics = match attr("map-data") {
            Some(raw) => Statistics::from_json(&raw)?,
            None => Statistics::default(),
        };
        Ok(Self {
            title: non_empty(attr("map-title")),
            statistics,
            geo_src: non_empty(attr("geo-src")).unwrap_or_else(|| DEFAULT_GEO_SRC.to_string()),
            properties_src: non_empty(attr("properties-src"))
                .unwrap_or_else(|| DEFAULT_PROPERTIES_SRC.to_string()),
            palette: attr("palette")
                .and_then(|name| Palette::from_name(&name))
                .unwrap_or_default(),
        })
    }
}

/// `<interactive-dashboard>` attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub title: String,
    /// `None` renders the empty-data message.
    pub table: Option<Table>,
}

impl DashboardConfig {
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            title: attr("title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            table: attr("data").and_then(|raw| Table::from_json(&raw)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{DEFAULT_GEO_SRC, DEFAULT_PROPERTIES_SRC, DashboardConfig, WidgetConfig};
    use iranmap_shared::{ConfigError, Palette};

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_attributes_are_missing() {
        let config = WidgetConfig::from_attributes(attrs(&[])).unwrap();
        assert_eq!(config.title, None);
        assert!(config.statistics.is_empty());
        assert_eq!(config.geo_src, DEFAULT_GEO_SRC);
        assert_eq!(config.properties_src, DEFAULT_PROPERTIES_SRC);
        assert_eq!(config.palette, Palette::Blues);
    }

    #[test]
    fn reads_all_attributes() {
        let config = WidgetConfig::from_attributes(attrs(&[
            ("map-title", "جمعیت استان‌ها"),
            ("map-data", r#"[{"استان":"A","pop":10}]"#),
            ("geo-src", "/geo/iran.geojson"),
            ("properties-src", "/geo/props.json"),
            ("palette", "schemeReds"),
        ]))
        .unwrap();
        assert_eq!(config.title.as_deref(), Some("جمعیت استان‌ها"));
        assert_eq!(config.statistics.default_metric(), Some("pop"));
        assert_eq!(config.geo_src, "/geo/iran.geojson");
        assert_eq!(config.properties_src, "/geo/props.json");
        assert_eq!(config.palette, Palette::Reds);
    }

    #[test]
    fn unknown_palette_and_blank_sources_fall_back() {
        let config = WidgetConfig::from_attributes(attrs(&[
            ("palette", "schemeRainbow"),
            ("geo-src", "  "),
            ("map-title", ""),
        ]))
        .unwrap();
        assert_eq!(config.palette, Palette::Blues);
        assert_eq!(config.geo_src, DEFAULT_GEO_SRC);
        assert_eq!(config.title, None);
    }

    #[test]
    fn malformed_map_data_is_rejected() {
        let result = WidgetConfig::from_attributes(attrs(&[("map-data", "[{")]));
        assert!(matches!(result, Err(ConfigError::MapData(_))));
    }

    #[test]
    fn dashboard_defaults_and_table() {
        let empty = DashboardConfig::from_attributes(attrs(&[]));
        assert_eq!(empty.title, "Ahmad Dashboard");
        assert_eq!(empty.table, None);

        let config = DashboardConfig::from_attributes(attrs(&[
            ("title", "Sales"),
            ("data", r#"[{"region":"north","total":12}]"#),
        ]));
        assert_eq!(config.title, "Sales");
        let table = config.table.unwrap();
        assert_eq!(table.headers, vec!["region", "total"]);
        assert_eq!(table.rows, vec![vec!["north", "12"]]);
    }
}
