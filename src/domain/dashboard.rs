// Dashboard domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const GENERAL_FOLDER: &str = "General";

const RESET_VARIABLES: [&str; 2] = ["instance", "hostname"];
const ALL_VALUE_REGEX: &str = ".*";
const ALL_VALUE: &str = "$__all";

/// A single hit from the dashboard search endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub title: String,
    pub uid: String,
    #[serde(rename = "folderTitle", default, skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
}

impl DashboardSummary {
    /// Folder the dashboard lives in; dashboards without one are in the general folder.
    pub fn folder(&self) -> &str {
        self.folder_title.as_deref().unwrap_or(GENERAL_FOLDER)
    }
}

/// Full dashboard definition as returned by the fetch-by-uid endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardWithMeta {
    pub dashboard: Dashboard,
    #[serde(default)]
    pub meta: Value,
}

/// Dashboard JSON document. Fields the tools do not touch are kept verbatim and
/// in their original order.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Dashboard(Map<String, Value>);

impl Dashboard {
    pub fn title(&self) -> &str {
        self.0.get("title").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.0.insert("title".to_string(), Value::String(title.into()));
    }

    pub fn clear_id(&mut self) {
        self.0.insert("id".to_string(), Value::Null);
    }

    pub fn set_uid(&mut self, uid: Option<String>) {
        self.0
            .insert("uid".to_string(), uid.map(Value::String).unwrap_or(Value::Null));
    }

    pub fn set_version(&mut self, version: i64) {
        self.0.insert("version".to_string(), Value::from(version));
    }

    /// Reset the `instance` and `hostname` selections so a saved dashboard does
    /// not ship with whatever host the editor last looked at.
    ///
    /// Returns the number of variables reset.
    pub fn reset_host_selections(&mut self) -> usize {
        let Some(list) = self
            .0
            .get_mut("templating")
            .and_then(|templating| templating.get_mut("list"))
            .and_then(Value::as_array_mut)
        else {
            return 0;
        };

        let mut reset = 0;
        for variable in list.iter_mut().filter_map(Value::as_object_mut) {
            let name = variable
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_lowercase();
            if !RESET_VARIABLES.contains(&name.as_str()) {
                continue;
            }

            let current = if flag(variable, "includeAll") {
                variable.insert("allValue".to_string(), Value::from(ALL_VALUE_REGEX));
                if flag(variable, "multi") {
                    json!({ "selected": true, "text": ["All"], "value": [ALL_VALUE] })
                } else {
                    json!({ "selected": true, "text": "All", "value": ALL_VALUE })
                }
            } else {
                json!({ "selected": false, "text": "", "value": "" })
            };
            variable.insert("current".to_string(), current);
            reset += 1;
        }
        reset
    }
}

fn flag(variable: &Map<String, Value>, key: &str) -> bool {
    variable.get(key).and_then(Value::as_bool).unwrap_or(false)
}
