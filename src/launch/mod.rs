// src/launch/mod.rs

//! Guarded launch pipeline.
//!
//! - [`candidate`] holds the guarded command candidates and the
//!   priority-order selection rule.
//! - [`policy`] holds the per-invocation value types (wait policy, window
//!   visibility, outcome).
//! - [`spawner`] is the OS process-creation seam.
//! - [`launcher`] ties selection, spawning and failure reporting together.

pub mod candidate;
pub mod launcher;
pub mod policy;
pub mod spawner;

pub use candidate::{select_candidate, Candidate, Guard};
pub use launcher::{LaunchRequest, Launcher};
pub use policy::{LaunchOutcome, LaunchPolicy, WindowVisibility};
pub use spawner::{OsSpawner, Spawner};
