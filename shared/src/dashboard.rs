use serde_json::Value;

use crate::stats::display_value;

pub const DEFAULT_TITLE: &str = "Ahmad Dashboard";
pub const WELCOME_MESSAGE: &str =
    "Welcome to the dashboard. Click on the tabs to view different sections.";
pub const EMPTY_MESSAGE: &str = "No data available.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Details,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Overview, Tab::Details];

    pub const fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Details => "Details",
        }
    }

    /// Heading shown above the tab's content.
    pub const fn heading(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Details => "User Details",
        }
    }
}

/// Details-tab table: headers from the first record, one row per record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// `None` when the payload is not a non-empty array of objects.
    pub fn from_json(text: &str) -> Option<Self> {
        let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) else {
            return None;
        };
        let Some(Value::Object(first)) = items.first() else {
            return None;
        };
        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = items
            .iter()
            .map(|item| {
                headers
                    .iter()
                    .map(|key| match item.get(key) {
                        // Rows with no such field render an empty cell.
                        None => String::new(),
                        value => display_value(value),
                    })
                    .collect()
            })
            .collect();
        Some(Self { headers, rows })
    }
}
