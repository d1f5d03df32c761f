// src/launch/candidate.rs

//! Guarded command candidates and the selection rule.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Condition deciding whether a candidate is eligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// Always eligible; used for the unconditional fallback.
    Always,
    /// Eligible only while `path` exists on the filesystem.
    ///
    /// Relative paths are resolved against the current working directory,
    /// the same way the spawned command line itself would be.
    PathExists(PathBuf),
}

impl Guard {
    /// Evaluate the guard against the filesystem.
    pub fn holds(&self) -> bool {
        match self {
            Guard::Always => true,
            Guard::PathExists(path) => path.exists(),
        }
    }
}

/// One possible command line paired with its guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub guard: Guard,
    pub command: String,
}

impl Candidate {
    /// Unconditional candidate.
    pub fn always(command: impl Into<String>) -> Self {
        Self {
            guard: Guard::Always,
            command: command.into(),
        }
    }

    /// Candidate guarded by a path-existence probe.
    pub fn when_path_exists(path: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self {
            guard: Guard::PathExists(path.into()),
            command: command.into(),
        }
    }

    /// Path probed by this candidate's guard, if it has one.
    pub fn guard_path(&self) -> Option<&Path> {
        match &self.guard {
            Guard::Always => None,
            Guard::PathExists(path) => Some(path),
        }
    }
}

/// Pick the first candidate whose guard holds, in priority order.
///
/// Returns `None` for an empty slice or when no guard holds; the caller
/// turns that into `LaunchError::NoCandidateFound`.
pub fn select_candidate(candidates: &[Candidate]) -> Option<&Candidate> {
    for candidate in candidates {
        if candidate.guard.holds() {
            return Some(candidate);
        }
        debug!(cmd = %candidate.command, "guard did not hold, skipping candidate");
    }
    None
}
