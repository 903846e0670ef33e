//! Local filesystem backend
//!
//! Discovers state files by walking a directory tree and matching file names
//! against a glob pattern. Local files have no history, so every state has
//! exactly one version: its current on-disk content, identified by its path
//! and dated by its modification time. The local filesystem never holds
//! locks.

use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::backend::{BackendError, BackendResult, StateBackend, Version};
use crate::config::LocalConfig;
use crate::discovery::{self, GlobMatcher, Matcher, WalkDirWalker, WalkError, Walker};
use crate::lock::LockInfo;
use crate::observer::{BackendObserver, LogObserver};
use crate::state::StateFile;

/// Backend serving state files from a local directory tree
#[derive(Clone)]
pub struct LocalBackend {
    /// Root directory of the walk
    path: String,
    /// Glob pattern for state file names
    pattern: String,
    walker: Arc<dyn Walker>,
    matcher: Arc<dyn Matcher>,
    observer: Arc<dyn BackendObserver>,
}

impl LocalBackend {
    /// Create a LocalBackend from configuration
    ///
    /// Only checks that both fields are set; the filesystem is not touched
    /// until the first call.
    pub fn new(config: &LocalConfig) -> BackendResult<Self> {
        if config.state_path.is_empty() {
            return Err(BackendError::invalid_configuration(
                "state path cannot be empty",
            ));
        }

        if config.state_file.is_empty() {
            return Err(BackendError::invalid_configuration(
                "state file cannot be empty",
            ));
        }

        Ok(Self {
            path: config.state_path.clone(),
            pattern: config.state_file.clone(),
            walker: Arc::new(WalkDirWalker),
            matcher: Arc::new(GlobMatcher),
            observer: Arc::new(LogObserver),
        })
    }

    /// Create one LocalBackend per configuration entry, in order
    ///
    /// Fails on the first invalid entry without returning any backend.
    pub fn collection(configs: &[LocalConfig]) -> BackendResult<Vec<Self>> {
        configs.iter().map(Self::new).collect()
    }

    /// Replace the directory walker
    pub fn with_walker(mut self, walker: impl Walker + 'static) -> Self {
        self.walker = Arc::new(walker);
        self
    }

    /// Replace the file name matcher
    pub fn with_matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matcher = Arc::new(matcher);
        self
    }

    /// Replace the diagnostic observer
    pub fn with_observer(mut self, observer: Arc<dyn BackendObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Debug for LocalBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalBackend")
            .field("path", &self.path)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

impl StateBackend for LocalBackend {
    fn list_locks(&self) -> BackendResult<HashMap<String, LockInfo>> {
        Ok(HashMap::new())
    }

    fn discover_states(&self) -> BackendResult<Vec<String>> {
        self.observer.discovery_started(&self.path, &self.pattern);

        let result = discovery::discover(
            Path::new(&self.path),
            &self.pattern,
            self.walker.as_ref(),
            self.matcher.as_ref(),
        )
        .and_then(|found| found.into_iter().map(state_path).collect::<BackendResult<Vec<_>>>());

        match result {
            Ok(states) => {
                self.observer
                    .discovery_finished(&self.path, &self.pattern, states.len());
                Ok(states)
            }
            Err(err) => {
                self.observer
                    .discovery_failed(&self.path, &self.pattern, &err);
                Err(err)
            }
        }
    }

    fn retrieve_state(&self, path: &str, version_id: &str) -> BackendResult<StateFile> {
        self.observer.retrieving_state(path, version_id);

        let file = File::open(path).map_err(|source| BackendError::UnreadableState {
            path: path.to_string(),
            source,
        })?;

        // The version is informational only: the current content is the only version
        StateFile::read(BufReader::new(file)).map_err(|source| BackendError::UnparseableState {
            path: path.to_string(),
            version: version_id.to_string(),
            source,
        })
    }

    fn list_versions(&self, path: &str) -> BackendResult<Vec<Version>> {
        self.observer.listing_versions(path);

        let stat_error = |source| BackendError::StatTargetMissing {
            path: path.to_string(),
            source,
        };
        let modified = fs::metadata(path)
            .map_err(stat_error)?
            .modified()
            .map_err(stat_error)?;

        Ok(vec![Version {
            id: path.to_string(),
            last_modified: DateTime::<Utc>::from(modified),
        }])
    }
}

/// Convert a discovered path to its string form
///
/// A path that is not valid UTF-8 could not be handed back to
/// `retrieve_state` or `list_versions`, so it aborts discovery.
fn state_path(path: PathBuf) -> BackendResult<String> {
    path.into_os_string().into_string().map_err(|raw| {
        BackendError::Walk(WalkError::new(
            Some(PathBuf::from(raw)),
            io::Error::new(io::ErrorKind::InvalidData, "state path is not valid UTF-8"),
        ))
    })
}
