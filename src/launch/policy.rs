// src/launch/policy.rs

//! Per-invocation launch value types.
//!
//! These are transient: built for one launch call, dropped afterwards.

/// How the launcher relates to the child after a successful spawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LaunchPolicy {
    /// Spawn, release the child's handles immediately, return without an
    /// exit code. The child's later failures are unobservable by contract.
    Detached,
    /// Spawn and wait for termination, capturing the exit code. There is no
    /// timeout: a hung child suspends the caller indefinitely.
    Blocking,
}

/// Whether the child process gets a visible window.
///
/// `Hidden` suppresses the console window on Windows (`CREATE_NO_WINDOW`);
/// elsewhere it nulls the child's stdio, which is the closest equivalent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowVisibility {
    Hidden,
    Shown,
}

/// Successful result of one launch call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The child was started and released; its exit code is unknown and will
    /// stay unknown. This is the terminal state of a fire-and-forget launch,
    /// not a missing feature.
    Detached,
    /// A blocking child terminated with exit code 0.
    Completed(i32),
}

impl LaunchOutcome {
    /// Exit code observed for this launch, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            LaunchOutcome::Detached => None,
            LaunchOutcome::Completed(code) => Some(*code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_outcome_has_no_exit_code() {
        assert_eq!(LaunchOutcome::Detached.exit_code(), None);
        assert_eq!(LaunchOutcome::Completed(0).exit_code(), Some(0));
    }
}
