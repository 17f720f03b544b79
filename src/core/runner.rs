//! The teardown runner.
//!
//! Runs each cleanup step in isolation: a step's error is logged and recorded
//! in the report, and the next step runs regardless.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::constants::{BACKUP_SUFFIX, ENV_FILE};
use crate::core::env::{self, RedactOutcome};
use crate::core::process::{KillOutcome, ProcessControl, SystemProcesses};
use crate::core::report::{Report, Status, Step, StepReport};
use crate::core::sweep::{self, Sweep};
use crate::error::Result;

/// Cleanup of one working tree against one process table.
pub struct Teardown<P> {
    root: PathBuf,
    processes: P,
}

impl<P: ProcessControl> Teardown<P> {
    pub fn new(root: impl Into<PathBuf>, processes: P) -> Self {
        Self {
            root: root.into(),
            processes,
        }
    }

    /// Run every step in order.
    pub fn run(&self) -> Report {
        Report {
            steps: Step::ALL.iter().map(|&step| self.run_step(step)).collect(),
        }
    }

    /// Run a single step. Never fails; errors become a `failed` entry.
    pub fn run_step(&self, step: Step) -> StepReport {
        debug!(step = ?step, "running step");

        let report = match step {
            Step::StopTunnel | Step::StopServer => self.stop(step),
            Step::RedactSecrets => self.redact(),
            Step::DeleteTranscripts => self.sweep(step, sweep::delete_transcripts(&self.root)),
            Step::PurgeCaches => self.sweep(step, sweep::purge_cache_dirs(&self.root)),
        };

        if report.status == Status::Failed {
            warn!(step = ?step, detail = %report.detail, "step failed");
        }
        report
    }

    fn stop(&self, step: Step) -> StepReport {
        let Some(name) = step.process() else {
            return StepReport::new(step, Status::Skipped, "no process target");
        };

        match self.processes.kill_by_name(name) {
            Ok(KillOutcome::Killed) => {
                StepReport::new(step, Status::Done, format!("stopped {}", name))
            }
            Ok(KillOutcome::NotRunning) => {
                StepReport::new(step, Status::Skipped, format!("{} not running", name))
            }
            Err(e) => StepReport::new(step, Status::Failed, e.to_string()),
        }
    }

    fn redact(&self) -> StepReport {
        let step = Step::RedactSecrets;

        match self.redact_env() {
            Ok(RedactOutcome::Absent) => StepReport::new(step, Status::Skipped, "no .env file"),
            Ok(RedactOutcome::Unchanged) => {
                StepReport::new(step, Status::Skipped, "secrets already revoked")
            }
            Ok(RedactOutcome::Redacted { revoked }) => StepReport::new(
                step,
                Status::Done,
                format!(
                    "revoked {} key{}, backup in {}{}",
                    revoked.len(),
                    if revoked.len() == 1 { "" } else { "s" },
                    ENV_FILE,
                    BACKUP_SUFFIX
                ),
            )
            .with_affected(revoked),
            Err(e) => StepReport::new(step, Status::Failed, e.to_string()),
        }
    }

    fn redact_env(&self) -> Result<RedactOutcome> {
        env::redact_file(&self.root.join(ENV_FILE))
    }

    fn sweep(&self, step: Step, sweep: Sweep) -> StepReport {
        let affected = sweep
            .removed
            .iter()
            .map(|path| self.display(path))
            .collect::<Vec<_>>();

        if !sweep.is_clean() {
            let stuck = sweep
                .errors
                .iter()
                .map(|(path, e)| format!("{}: {}", self.display(path), e))
                .collect::<Vec<_>>()
                .join("; ");
            return StepReport::new(step, Status::Failed, format!("could not remove {}", stuck))
                .with_affected(affected);
        }

        if affected.is_empty() {
            StepReport::new(step, Status::Skipped, "nothing to remove")
        } else {
            StepReport::new(step, Status::Done, format!("removed {}", affected.len()))
                .with_affected(affected)
        }
    }

    fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

impl Teardown<SystemProcesses> {
    /// Teardown of the current directory against the system process table.
    ///
    /// # Errors
    ///
    /// Returns error if the current directory cannot be determined.
    pub fn current() -> Result<Self> {
        let root = std::env::current_dir()?;
        info!(root = %root.display(), "tearing down session");
        Ok(Self::new(root, SystemProcesses))
    }
}

/// Tear down the session rooted at the current directory.
///
/// # Errors
///
/// Returns error only if the current directory cannot be determined; step
/// failures are reported, never returned.
pub fn run_cleanup() -> Result<Report> {
    Ok(Teardown::current()?.run())
}
