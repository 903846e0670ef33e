//! Diagnostic hooks for backend operations

use crate::backend::BackendError;

/// Receives diagnostic events from a backend
///
/// All methods default to doing nothing.
pub trait BackendObserver: Send + Sync {
    fn discovery_started(&self, _root: &str, _pattern: &str) {}

    fn discovery_finished(&self, _root: &str, _pattern: &str, _found: usize) {}

    fn discovery_failed(&self, _root: &str, _pattern: &str, _error: &BackendError) {}

    fn retrieving_state(&self, _path: &str, _version: &str) {}

    fn listing_versions(&self, _path: &str) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl BackendObserver for LogObserver {
    fn discovery_started(&self, root: &str, pattern: &str) {
        log::debug!("Listing states from Local (path: {root}, pattern: {pattern})");
    }

    fn discovery_finished(&self, root: &str, pattern: &str, found: usize) {
        log::debug!("Found {found} states in Local (path: {root}, pattern: {pattern})");
    }

    fn discovery_failed(&self, root: &str, pattern: &str, error: &BackendError) {
        match error {
            BackendError::Match(_) => {
                log::error!("Error matching state for Local backend (path: {root}, pattern: {pattern}): {error}")
            }
            _ => log::error!("Error retrieving state for Local backend (path: {root}): {error}"),
        }
    }

    fn retrieving_state(&self, path: &str, version: &str) {
        log::info!("Retrieving state from Local (path: {path}, version_id: {version})");
    }

    fn listing_versions(&self, path: &str) {
        log::debug!("Listing versions from Local (path: {path})");
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BackendObserver for NoopObserver {}
