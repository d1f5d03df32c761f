// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `guardspawn`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "guardspawn",
    version,
    about = "Start a command picked from guarded candidates, hidden and detached by default.",
    long_about = None
)]
pub struct CliArgs {
    /// Unconditional fallback command line.
    ///
    /// Always runnable; tried after every `--prefer` candidate.
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Guarded candidate in the form `PATH=CMD`.
    ///
    /// `CMD` is only eligible when `PATH` exists. May be repeated; candidates
    /// are tried in the order given, before the fallback.
    #[arg(long, value_name = "PATH=CMD")]
    pub prefer: Vec<String>,

    /// Command to run (blocking) before the main launch, e.g. `git pull`.
    ///
    /// May be repeated; a non-zero exit aborts the launch.
    #[arg(long, value_name = "CMD")]
    pub pre: Vec<String>,

    /// Wait for the main command and propagate its exit status.
    ///
    /// Default is to detach: spawn, release the child, return immediately.
    #[arg(long)]
    pub wait: bool,

    /// Let the child create a visible window / inherit the console.
    ///
    /// Default hides it, matching a background bootstrap step.
    #[arg(long)]
    pub show_window: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GUARDSPAWN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved launch plan without spawning anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
