//! State file discovery
//!
//! Discovery walks a directory tree and keeps every non-directory entry whose
//! base name matches a glob pattern. Both the walk and the match are pluggable
//! through the [`Walker`] and [`Matcher`] traits so that the algorithm can be
//! exercised without touching a real filesystem.
//!
//! The walk is fail-loud: the first error reported by the walker or the
//! matcher aborts the call and no partial result is returned.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use thiserror::Error;
use walkdir::WalkDir;

use crate::backend::BackendResult;

/// One entry visited by a [`Walker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    /// Base name of the entry, as matched against the state file pattern
    pub fn base_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.to_string_lossy().into_owned(),
        }
    }
}

/// Error reported by a [`Walker`] for a single entry
#[derive(Debug)]
pub struct WalkError {
    path: Option<PathBuf>,
    source: io::Error,
}

impl WalkError {
    pub fn new(path: Option<PathBuf>, source: io::Error) -> Self {
        Self { path, source }
    }

    /// The entry the walker was visiting when the error occurred, if known
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Error walking {}: {}", path.display(), self.source),
            None => write!(f, "Error walking state directory: {}", self.source),
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error reported by a [`Matcher`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error matching pattern '{pattern}': {reason}")]
pub struct MatchError {
    pub pattern: String,
    pub reason: String,
}

impl MatchError {
    pub fn new(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Recursive directory traversal strategy
///
/// Implementations yield entries in a deterministic order for an unchanged
/// tree. The root itself is yielded first.
pub trait Walker: Send + Sync {
    fn walk<'a>(
        &'a self,
        root: &'a Path,
    ) -> Box<dyn Iterator<Item = Result<WalkEntry, WalkError>> + 'a>;
}

/// File name matching strategy
pub trait Matcher: Send + Sync {
    fn matches(&self, pattern: &str, name: &str) -> Result<bool, MatchError>;
}

/// [`Walker`] backed by `walkdir`, visiting siblings in file name order
/// and never following symbolic links
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkDirWalker;

impl Walker for WalkDirWalker {
    fn walk<'a>(
        &'a self,
        root: &'a Path,
    ) -> Box<dyn Iterator<Item = Result<WalkEntry, WalkError>> + 'a> {
        let entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| match entry {
                Ok(entry) => Ok(WalkEntry {
                    path: entry.path().to_path_buf(),
                    is_dir: entry.file_type().is_dir(),
                }),
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf);
                    Err(WalkError::new(path, io::Error::from(err)))
                }
            });

        Box::new(entries)
    }
}

/// [`Matcher`] using `glob::Pattern` syntax
///
/// `*`, `?` and `[...]` classes are supported. A class is negated with
/// `[!...]`; `^` is a literal. There are no backslash escapes, and `**`
/// is only valid as a whole path component, so `terraform**.tfstate`
/// is a match error.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatcher;

impl Matcher for GlobMatcher {
    fn matches(&self, pattern: &str, name: &str) -> Result<bool, MatchError> {
        let compiled =
            Pattern::new(pattern).map_err(|e| MatchError::new(pattern, e.to_string()))?;
        Ok(compiled.matches(name))
    }
}

/// Walk `root` and collect, in walk order, every non-directory entry whose
/// base name matches `pattern`
pub fn discover(
    root: &Path,
    pattern: &str,
    walker: &dyn Walker,
    matcher: &dyn Matcher,
) -> BackendResult<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in walker.walk(root) {
        let entry = entry?;
        if entry.is_dir {
            continue;
        }
        if matcher.matches(pattern, &entry.base_name())? {
            found.push(entry.path);
        }
    }

    Ok(found)
}
