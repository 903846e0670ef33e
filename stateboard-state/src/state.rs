//! Terraform-style state file structures and decoding

use std::collections::HashMap;
use std::io::{self, Read};
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while decoding a state file
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("state file is empty")]
    Empty,

    #[error("failed to read state file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid state file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported state file format version {0}")]
    UnsupportedVersion(u32),
}

/// A decoded state file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    /// State file format version
    pub version: u32,
    /// Version of the tool that last wrote this state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    /// Monotonically increasing number for each state modification
    #[serde(default)]
    pub serial: u64,
    /// Unique identifier for this state lineage
    #[serde(default)]
    pub lineage: String,
    /// Root module outputs
    #[serde(default)]
    pub outputs: HashMap<String, OutputValue>,
    /// All managed and data resources
    #[serde(default)]
    pub resources: Vec<ResourceState>,
}

impl StateFile {
    /// Format versions this decoder accepts
    pub const SUPPORTED_VERSIONS: RangeInclusive<u32> = 1..=4;

    /// Decode a state file from a byte stream
    pub fn read<R: Read>(mut reader: R) -> Result<Self, DecodeError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::Empty);
        }

        let state: StateFile = serde_json::from_slice(&bytes)?;
        if !Self::SUPPORTED_VERSIONS.contains(&state.version) {
            return Err(DecodeError::UnsupportedVersion(state.version));
        }

        Ok(state)
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Find a resource by type and name
    pub fn find_resource(&self, resource_type: &str, name: &str) -> Option<&ResourceState> {
        self.resources
            .iter()
            .find(|r| r.resource_type == resource_type && r.name == name)
    }
}

/// A root module output value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    pub value: serde_json::Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<serde_json::Value>,
    #[serde(default)]
    pub sensitive: bool,
}

/// State of a single resource block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Module address, absent for the root module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// "managed" or "data"
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    #[serde(default)]
    pub provider: String,
    /// Raw instance objects, kept undecoded
    #[serde(default)]
    pub instances: Vec<serde_json::Value>,
}
