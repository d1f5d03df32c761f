// src/errors.rs

//! Error taxonomy for launch attempts.
//!
//! Every failure is terminal for the current attempt; nothing is retried.
//! `ChildFailed` is only observable under a blocking launch and its
//! propagation is up to the caller: a chain treats it as fatal, a standalone
//! caller may just report it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// No candidate's guard held (or the candidate list was empty).
    #[error("no runnable command: no candidate matched")]
    NoCandidateFound,

    /// The OS refused to create the process.
    #[error("failed to start process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// A blocking child exited with a non-zero status.
    #[error("command exited with status {code}")]
    ChildFailed { code: i32 },
}
