//! Stateboard State Sources
//!
//! This crate discovers, versions, and retrieves Terraform-style state files.
//! Every source implements the [`StateBackend`] trait so that callers can
//! query heterogeneous sources through one collection of trait objects.
//!
//! # Overview
//!
//! - **StateBackend**: the four operations shared by every source (locks,
//!   discovery, retrieval, versions)
//! - **LocalBackend**: state files found by walking a local directory tree
//! - **Walker / Matcher**: pluggable traversal and file name matching used by
//!   discovery
//! - **StateFile**: the decoded state document
//!
//! # Example
//!
//! ```no_run
//! use stateboard_state::{create_backends, LocalConfig, SourcesConfig};
//!
//! let config = SourcesConfig {
//!     local: vec![LocalConfig::new("/var/lib/terraform", "*.tfstate")],
//! };
//!
//! for backend in create_backends(&config)? {
//!     for path in backend.discover_states()? {
//!         for version in backend.list_versions(&path)? {
//!             let state = backend.retrieve_state(&path, &version.id)?;
//!             println!("{path} @ {}: serial {}", version.last_modified, state.serial);
//!         }
//!     }
//! }
//! # Ok::<(), stateboard_state::BackendError>(())
//! ```

pub mod backend;
pub mod backends;
pub mod config;
pub mod discovery;
pub mod lock;
pub mod observer;
pub mod state;

// Re-export main types for convenience
pub use backend::{BackendError, BackendResult, StateBackend, Version};
pub use backends::{LocalBackend, create_backends};
pub use config::{LocalConfig, SourcesConfig};
pub use discovery::{GlobMatcher, MatchError, Matcher, WalkDirWalker, WalkEntry, WalkError, Walker};
pub use lock::LockInfo;
pub use observer::{BackendObserver, LogObserver, NoopObserver};
pub use state::{DecodeError, ResourceState, StateFile};
