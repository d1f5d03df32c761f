// tests/common/mod.rs

//! Shared test doubles for the spawner and notifier seams.
//!
//! Both fakes are cheap clones over shared state, so a test can hand one to
//! the launcher and keep its own handle for inspection.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use guardspawn::launch::{LaunchPolicy, Spawner, WindowVisibility};
use guardspawn::notify::Notifier;

/// One recorded spawn call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnCall {
    pub command: String,
    pub visibility: WindowVisibility,
    pub policy: LaunchPolicy,
}

#[derive(Default)]
struct SpawnerState {
    calls: Vec<SpawnCall>,
    script: VecDeque<io::Result<Option<i32>>>,
}

/// Spawner that records every call and replays scripted results.
///
/// Unscripted calls behave like a successful detached spawn.
#[derive(Clone, Default)]
pub struct FakeSpawner {
    state: Arc<Mutex<SpawnerState>>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next spawn call.
    pub fn push_result(&self, result: io::Result<Option<i32>>) {
        self.state.lock().unwrap().script.push_back(result);
    }

    pub fn push_exit(&self, code: i32) {
        self.push_result(Ok(Some(code)));
    }

    pub fn push_detached(&self) {
        self.push_result(Ok(None));
    }

    pub fn push_spawn_error(&self) {
        self.push_result(Err(io::Error::from(io::ErrorKind::NotFound)));
    }

    pub fn calls(&self) -> Vec<SpawnCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn spawned_commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }
}

#[async_trait]
impl Spawner for FakeSpawner {
    async fn spawn(
        &self,
        command_line: &str,
        visibility: WindowVisibility,
        policy: LaunchPolicy,
    ) -> io::Result<Option<i32>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(SpawnCall {
            command: command_line.to_string(),
            visibility,
            policy,
        });
        match state.script.pop_front() {
            Some(result) => result,
            None => Ok(None),
        }
    }
}

/// Notifier that counts alerts and keeps their text.
#[derive(Clone, Default)]
pub struct CountingNotifier {
    alerts: Arc<Mutex<Vec<(String, String)>>>,
}

impl CountingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Notifier for CountingNotifier {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}
