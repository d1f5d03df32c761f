// src/lib.rs

pub mod cli;
pub mod errors;
pub mod launch;
pub mod logging;
pub mod notify;

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::launch::{
    Candidate, Guard, LaunchOutcome, LaunchPolicy, LaunchRequest, Launcher, OsSpawner,
    WindowVisibility,
};
use crate::notify::DialogNotifier;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan building from CLI args (pre-steps + guarded candidates)
/// - the OS spawner and the dialog notifier
/// - outcome/exit-status mapping
pub async fn run(args: CliArgs) -> Result<()> {
    let plan = build_plan(&args)?;

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let launcher = Launcher::new(OsSpawner, DialogNotifier);
    let outcome = launcher.launch_chain(&plan).await?;

    match outcome {
        LaunchOutcome::Detached => info!("launched detached"),
        LaunchOutcome::Completed(code) => info!(exit_code = code, "launched and completed"),
    }
    Ok(())
}

/// Turn CLI arguments into the sequence of launch requests.
///
/// Each `--pre` command becomes its own blocking step; the guarded
/// `--prefer` candidates and the unconditional fallback form the final
/// step, detached unless `--wait` was given.
pub fn build_plan(args: &CliArgs) -> Result<Vec<LaunchRequest>> {
    let visibility = if args.show_window {
        WindowVisibility::Shown
    } else {
        WindowVisibility::Hidden
    };

    let mut plan: Vec<LaunchRequest> = args
        .pre
        .iter()
        .map(|cmd| LaunchRequest::command(cmd, LaunchPolicy::Blocking, visibility))
        .collect();

    let mut candidates = Vec::with_capacity(args.prefer.len() + 1);
    for spec in &args.prefer {
        candidates.push(parse_prefer(spec)?);
    }
    candidates.push(Candidate::always(&args.command));

    let policy = if args.wait {
        LaunchPolicy::Blocking
    } else {
        LaunchPolicy::Detached
    };
    plan.push(LaunchRequest::new(candidates, policy, visibility));

    debug!(steps = plan.len(), "launch plan built");
    Ok(plan)
}

/// Parse one `--prefer PATH=CMD` value into a guarded candidate.
fn parse_prefer(spec: &str) -> Result<Candidate> {
    let (path, cmd) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("--prefer expects PATH=CMD, got '{spec}'"))?;
    if path.is_empty() || cmd.is_empty() {
        return Err(anyhow!("--prefer expects PATH=CMD, got '{spec}'"));
    }
    Ok(Candidate::when_path_exists(path, cmd))
}

/// Simple dry-run output: print steps, guards and commands.
fn print_dry_run(plan: &[LaunchRequest]) {
    println!("guardspawn dry-run");
    for (i, request) in plan.iter().enumerate() {
        println!("step {} ({:?}, {:?}):", i + 1, request.policy, request.visibility);
        for candidate in &request.candidates {
            match &candidate.guard {
                Guard::Always => println!("  - {}", candidate.command),
                Guard::PathExists(path) => {
                    println!(
                        "  - {} (if {} exists; currently {})",
                        candidate.command,
                        path.display(),
                        if candidate.guard.holds() { "yes" } else { "no" }
                    );
                }
            }
        }
    }
    debug!("dry-run complete (no execution)");
}
