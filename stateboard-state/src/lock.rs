//! Lock information reported by state backends

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about a lock held on a state, as recorded by Terraform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LockInfo {
    /// Unique identifier for this lock
    #[serde(rename = "ID")]
    pub id: String,
    /// The operation holding the lock (e.g., "OperationTypeApply")
    pub operation: String,
    /// Free-form extra information
    #[serde(default)]
    pub info: String,
    /// Who acquired the lock (user@hostname)
    pub who: String,
    /// Version of the tool that acquired the lock
    #[serde(default)]
    pub version: String,
    /// When the lock was created
    pub created: DateTime<Utc>,
    /// Path of the locked state
    #[serde(default)]
    pub path: String,
}
