// src/launch/spawner.rs

//! OS process-creation seam.
//!
//! The launcher only talks to [`Spawner`], so tests can substitute a fake
//! and the platform details stay in one place. [`OsSpawner`] is the real
//! implementation on top of `tokio::process::Command`.

use std::io;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::launch::policy::{LaunchPolicy, WindowVisibility};

/// Starts one command line as a new OS process.
///
/// Returns `Ok(None)` for a detached spawn (no exit code will ever be
/// observed) and `Ok(Some(code))` after a blocking wait. An `Err` means the
/// process never started.
#[async_trait]
pub trait Spawner: Send + Sync {
    async fn spawn(
        &self,
        command_line: &str,
        visibility: WindowVisibility,
        policy: LaunchPolicy,
    ) -> io::Result<Option<i32>>;
}

/// Production spawner: runs the command line through the platform shell.
pub struct OsSpawner;

#[async_trait]
impl Spawner for OsSpawner {
    async fn spawn(
        &self,
        command_line: &str,
        visibility: WindowVisibility,
        policy: LaunchPolicy,
    ) -> io::Result<Option<i32>> {
        let mut cmd = shell_command(command_line);
        apply_visibility(&mut cmd, visibility);

        match policy {
            LaunchPolicy::Detached => {
                let child = cmd.spawn()?;
                debug!(pid = child.id(), "spawned detached, releasing child");
                // Dropping the Child (no kill_on_drop) closes our handles
                // while the process keeps running.
                drop(child);
                Ok(None)
            }
            LaunchPolicy::Blocking => {
                let mut child = cmd.spawn()?;
                debug!(pid = child.id(), "spawned, waiting for termination");
                let status = child.wait().await?;
                Ok(Some(status.code().unwrap_or(-1)))
            }
        }
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(command_line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_line);
        c
    }
}

#[cfg(windows)]
fn apply_visibility(cmd: &mut Command, visibility: WindowVisibility) {
    // Same flag the classic hidden-launcher stubs pass to CreateProcess.
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    if visibility == WindowVisibility::Hidden {
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
}

#[cfg(not(windows))]
fn apply_visibility(cmd: &mut Command, visibility: WindowVisibility) {
    use std::process::Stdio;

    // No console window to suppress here; nulled stdio is the nearest thing.
    if visibility == WindowVisibility::Hidden {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
    }
}
