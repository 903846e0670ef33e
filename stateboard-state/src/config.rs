//! Source configuration consumed by the backend factories

use serde::{Deserialize, Serialize};

/// One local state source: a root directory and a state file name pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LocalConfig {
    /// Directory walked for state files
    pub state_path: String,
    /// Pattern matched against each file's base name, in `glob::Pattern`
    /// syntax: negate classes with `[!...]`, no backslash escapes, and
    /// `**` only as a whole component
    pub state_file: String,
}

impl LocalConfig {
    pub fn new(state_path: impl Into<String>, state_file: impl Into<String>) -> Self {
        Self {
            state_path: state_path.into(),
            state_file: state_file.into(),
        }
    }
}

/// All configured state sources
///
/// Missing fields deserialize as empty; the backend factories reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub local: Vec<LocalConfig>,
}
