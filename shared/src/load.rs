use std::fmt;

use thiserror::Error;

/// Initial load runs these stages in order; the first failure stops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStage {
    Geography,
    DisplayProperties,
}

impl LoadStage {
    pub const ORDER: [LoadStage; 2] = [LoadStage::Geography, LoadStage::DisplayProperties];

    pub const fn label(self) -> &'static str {
        match self {
            LoadStage::Geography => "geography",
            LoadStage::DisplayProperties => "display properties",
        }
    }
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("{stage}: fetch error: {message}")]
    Fetch { stage: LoadStage, message: String },
    #[error("{stage}: HTTP {status}")]
    Status { stage: LoadStage, status: u16 },
    #[error("{stage}: parse error: {message}")]
    Parse { stage: LoadStage, message: String },
    #[error("statistics have no metric fields")]
    NoMetrics,
}

impl LoadError {
    pub fn parse(stage: LoadStage, err: impl fmt::Display) -> Self {
        LoadError::Parse {
            stage,
            message: err.to_string(),
        }
    }
}

/// Problems with the element's own attributes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map-data is not a valid statistics payload: {0}")]
    MapData(#[from] crate::stats::StatisticsError),
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, LoadError, LoadStage};
    use crate::stats::Statistics;

    #[test]
    fn stages_run_geography_first() {
        assert_eq!(
            LoadStage::ORDER,
            [LoadStage::Geography, LoadStage::DisplayProperties]
        );
    }

    #[test]
    fn errors_name_their_stage() {
        let err = LoadError::Status {
            stage: LoadStage::DisplayProperties,
            status: 404,
        };
        assert_eq!(err.to_string(), "display properties: HTTP 404");

        let err = LoadError::parse(LoadStage::Geography, "expected a FeatureCollection");
        assert_eq!(
            err.to_string(),
            "geography: parse error: expected a FeatureCollection"
        );
        assert_eq!(
            LoadError::NoMetrics.to_string(),
            "statistics have no metric fields"
        );
    }

    #[test]
    fn malformed_map_data_is_a_config_error() {
        let err: ConfigError = Statistics::from_json("{oops").unwrap_err().into();
        assert!(err.to_string().starts_with("map-data is not a valid statistics payload"));
    }
}
