//! Backend implementations for state sources

mod local;

pub use local::LocalBackend;

use crate::backend::{BackendResult, StateBackend};
use crate::config::SourcesConfig;

/// Create every configured backend
///
/// Construction is all-or-nothing: the first invalid source fails the whole
/// call and no backend is returned.
pub fn create_backends(config: &SourcesConfig) -> BackendResult<Vec<Box<dyn StateBackend>>> {
    let mut backends: Vec<Box<dyn StateBackend>> = Vec::new();

    for backend in LocalBackend::collection(&config.local)? {
        backends.push(Box::new(backend));
    }
    // Remote sources (object storage, hosted state APIs) plug in here

    Ok(backends)
}
