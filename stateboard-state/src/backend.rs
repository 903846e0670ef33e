//! State backend trait and error types

use std::collections::HashMap;
use std::io;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::discovery::{MatchError, WalkError};
use crate::lock::LockInfo;
use crate::state::{DecodeError, StateFile};

/// Errors that can occur when interacting with a state backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required configuration field is missing
    #[error("Invalid backend configuration: {0}")]
    InvalidConfiguration(String),

    /// The directory walk reported an error for one of its entries
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// The file name matcher rejected the pattern
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The state file could not be opened
    #[error("Unable to read the statefile {path}: {source}")]
    UnreadableState {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The state file was opened but its content could not be decoded
    #[error("Unable to parse the statefile {path} (version {version}): {source}")]
    UnparseableState {
        path: String,
        version: String,
        #[source]
        source: DecodeError,
    },

    /// The state file could not be stat'd for version listing
    #[error("Unable to stat the statefile {path}: {source}")]
    StatTargetMissing {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl BackendError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// A single retrievable revision of a state file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Version identifier, passed back to `retrieve_state`
    pub id: String,
    /// When this revision was last written
    pub last_modified: DateTime<Utc>,
}

/// Trait for state source backends
///
/// Every backend variant exposes the same four operations so that callers
/// can hold a collection of `Box<dyn StateBackend>` and query them
/// uniformly. All operations are blocking; callers wanting a deadline
/// must impose it themselves.
pub trait StateBackend: Send + Sync {
    /// List the locks currently held on states of this backend, keyed by lock ID
    fn list_locks(&self) -> BackendResult<HashMap<String, LockInfo>>;

    /// Enumerate the paths of all state files known to this backend
    fn discover_states(&self) -> BackendResult<Vec<String>>;

    /// Retrieve and decode one version of a state file
    fn retrieve_state(&self, path: &str, version_id: &str) -> BackendResult<StateFile>;

    /// List the available versions of a state file
    fn list_versions(&self, path: &str) -> BackendResult<Vec<Version>>;
}
