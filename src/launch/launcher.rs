// src/launch/launcher.rs

//! Candidate selection, spawning and failure reporting.

use tracing::{error, info};

use crate::errors::LaunchError;
use crate::launch::candidate::{select_candidate, Candidate};
use crate::launch::policy::{LaunchOutcome, LaunchPolicy, WindowVisibility};
use crate::launch::spawner::Spawner;
use crate::notify::Notifier;

/// One launch invocation: candidates plus how to run the winner.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub candidates: Vec<Candidate>,
    pub policy: LaunchPolicy,
    pub visibility: WindowVisibility,
}

impl LaunchRequest {
    pub fn new(candidates: Vec<Candidate>, policy: LaunchPolicy, visibility: WindowVisibility) -> Self {
        Self {
            candidates,
            policy,
            visibility,
        }
    }

    /// Single unconditional command, used for chain pre-steps.
    pub fn command(command: impl Into<String>, policy: LaunchPolicy, visibility: WindowVisibility) -> Self {
        Self::new(vec![Candidate::always(command)], policy, visibility)
    }
}

/// Guarded subprocess launcher.
///
/// Generic over the process-creation seam and the user notification seam so
/// the whole decision logic is testable without real processes or dialogs.
pub struct Launcher<S, N> {
    spawner: S,
    notifier: N,
}

impl<S: Spawner, N: Notifier> Launcher<S, N> {
    pub fn new(spawner: S, notifier: N) -> Self {
        Self { spawner, notifier }
    }

    /// Run one launch: select a candidate, spawn it, map the result.
    ///
    /// Exactly one candidate is ever spawned per call. Fatal paths
    /// (`NoCandidateFound`, `SpawnFailed`) raise exactly one modal
    /// notification before returning, so a windowless parent does not fail
    /// silently. A non-zero blocking exit comes back as
    /// [`LaunchError::ChildFailed`] and is *not* notified here; whether it
    /// is fatal is the caller's call.
    pub async fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError> {
        let Some(candidate) = select_candidate(&request.candidates) else {
            error!("no candidate matched, nothing to launch");
            self.notifier
                .alert("Launch error", "No runnable command was found.");
            return Err(LaunchError::NoCandidateFound);
        };

        info!(
            cmd = %candidate.command,
            policy = ?request.policy,
            visibility = ?request.visibility,
            "starting process"
        );

        match self
            .spawner
            .spawn(&candidate.command, request.visibility, request.policy)
            .await
        {
            Ok(None) => {
                info!(cmd = %candidate.command, "detached, child released");
                Ok(LaunchOutcome::Detached)
            }
            Ok(Some(0)) => {
                info!(cmd = %candidate.command, "command completed");
                Ok(LaunchOutcome::Completed(0))
            }
            Ok(Some(code)) => {
                info!(cmd = %candidate.command, exit_code = code, "command failed");
                Err(LaunchError::ChildFailed { code })
            }
            Err(err) => {
                error!(cmd = %candidate.command, error = %err, "process creation failed");
                self.notifier
                    .alert("Launch error", &format!("Failed to start process: {err}"));
                Err(LaunchError::SpawnFailed(err))
            }
        }
    }

    /// Run launches in sequence, aborting on the first failure.
    ///
    /// Every step before the last is forced to [`LaunchPolicy::Blocking`] so
    /// its exit code gates the rest of the chain; the final step keeps its
    /// own policy and decides the chain's outcome. A non-zero exit from a
    /// gating step raises one modal notification before the chain aborts.
    pub async fn launch_chain(&self, requests: &[LaunchRequest]) -> Result<LaunchOutcome, LaunchError> {
        let Some((last, gating)) = requests.split_last() else {
            error!("empty launch chain");
            self.notifier
                .alert("Launch error", "No runnable command was found.");
            return Err(LaunchError::NoCandidateFound);
        };

        for request in gating {
            let gate = LaunchRequest {
                policy: LaunchPolicy::Blocking,
                ..request.clone()
            };
            if let Err(err) = self.launch(&gate).await {
                if let LaunchError::ChildFailed { code } = err {
                    self.notifier.alert(
                        "Launch error",
                        &format!("A required step exited with status {code}; aborting."),
                    );
                }
                return Err(err);
            }
        }

        self.launch(last).await
    }
}
