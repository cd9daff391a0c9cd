use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

/// Field holding the province name in every statistics record.
pub const KEY_FIELD: &str = "استان";

/// Shown when a record has no value for the requested field.
pub const MISSING_VALUE: &str = "n/a";

#[derive(Debug, Error)]
pub enum StatisticsError {
    #[error("statistics payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("statistics payload must be a JSON array")]
    NotArray,
    #[error("statistics record {0} is not a JSON object")]
    NotObject(usize),
}

/// One row of the statistics payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRecord {
    /// Value of [`KEY_FIELD`], if the record has one.
    pub region: Option<String>,
    /// Every field except the key, in payload order.
    pub fields: Map<String, Value>,
}

impl StatisticsRecord {
    fn from_object(object: Map<String, Value>) -> Self {
        let mut region = None;
        let mut fields = Map::new();
        for (key, value) in object {
            if key == KEY_FIELD {
                region = Some(match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                });
            } else {
                fields.insert(key, value);
            }
        }
        Self { region, fields }
    }

    /// Numeric value of `metric`, if present and numeric.
    pub fn value(&self, metric: &str) -> Option<f64> {
        self.fields.get(metric).and_then(metric_value)
    }

    /// Raw value of `metric` as it should read in the tooltip.
    pub fn display(&self, metric: &str) -> String {
        display_value(self.fields.get(metric))
    }
}

/// The externally supplied statistics, immutable after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    records: Vec<StatisticsRecord>,
}

impl Statistics {
    pub fn from_json(text: &str) -> Result<Self, StatisticsError> {
        let Value::Array(items) = serde_json::from_str::<Value>(text)? else {
            return Err(StatisticsError::NotArray);
        };
        let records = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(object) => Ok(StatisticsRecord::from_object(object)),
                _ => Err(StatisticsError::NotObject(i)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Selectable metrics: the non-key fields of the first record.
    pub fn metric_names(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.fields.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Metric selected when the map first renders.
    pub fn default_metric(&self) -> Option<&str> {
        self.records
            .first()
            .and_then(|r| r.fields.keys().next())
            .map(String::as_str)
    }

    /// First record for `region`.
    pub fn record(&self, region: &str) -> Option<&StatisticsRecord> {
        self.records
            .iter()
            .find(|r| r.region.as_deref() == Some(region))
    }

    /// Every numeric value of `metric`, across all records.
    pub fn values<'a>(&'a self, metric: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.records.iter().filter_map(move |r| r.value(metric))
    }

    pub fn index(&self, metric: &str) -> ChoroplethIndex {
        let values = self
            .records
            .iter()
            .filter_map(|r| Some((r.region.clone()?, r.value(metric)?)))
            .collect();
        ChoroplethIndex { values }
    }
}

/// Region name → value of the selected metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoroplethIndex {
    values: HashMap<String, f64>,
}

impl ChoroplethIndex {
    pub fn get(&self, region: &str) -> Option<f64> {
        self.values.get(region).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Numbers, and strings that parse as numbers, count as metric values.
pub fn metric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => MISSING_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
