//! Rendering configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a [`RenderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid render configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which state the state diagram's `[*]` start edge points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartAnchor {
    /// The state the machine is in when rendered.
    #[default]
    Current,

    /// The state the machine was constructed with.
    Initial,
}

/// Styling knobs shared by the three renderers.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use statechart_table::render::{RenderConfig, StartAnchor};
///
/// let config = RenderConfig::from_json(r#"{ "start_anchor": "initial" }"#).unwrap();
/// assert_eq!(config.start_anchor, StartAnchor::Initial);
/// assert_eq!(config.graphviz_highlight, "red");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color attribute of the current node in the graph description.
    pub graphviz_highlight: String,

    /// Fill color of the current node in the flow chart.
    pub flowchart_highlight: String,

    pub start_anchor: StartAnchor,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            graphviz_highlight: "red".to_string(),
            flowchart_highlight: "#00AA00".to_string(),
            start_anchor: StartAnchor::Current,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
