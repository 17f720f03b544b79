//! Process termination by exact name.
//!
//! Shells out to the platform's own killer (`pkill` on Unix, `taskkill` on
//! Windows) behind the [`ProcessControl`] trait so the runner can be driven
//! against a fake process table in tests.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::{ProcessError, Result};

/// Outcome of a kill request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    /// At least one matching process was signalled.
    Killed,
    /// No process with that name was running.
    NotRunning,
}

/// Access to the OS process table.
pub trait ProcessControl {
    /// Terminate every process whose name is exactly `name`.
    ///
    /// # Errors
    ///
    /// Returns error if the kill tool is missing or reports a failure other
    /// than "no such process".
    fn kill_by_name(&self, name: &str) -> Result<KillOutcome>;
}

/// The real process table, driven through the platform kill tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcesses;

#[cfg(not(windows))]
const KILL_TOOL: &str = "pkill";
#[cfg(windows)]
const KILL_TOOL: &str = "taskkill";

#[cfg(not(windows))]
const NO_MATCH_CODE: i32 = 1;
#[cfg(windows)]
const NO_MATCH_CODE: i32 = 128;

impl SystemProcesses {
    #[cfg(not(windows))]
    fn command(tool: &Path, name: &str) -> Command {
        let mut cmd = Command::new(tool);
        cmd.args(["-x", name]);
        cmd
    }

    #[cfg(windows)]
    fn command(tool: &Path, name: &str) -> Command {
        let image = if name.to_ascii_lowercase().ends_with(".exe") {
            name.to_string()
        } else {
            format!("{}.exe", name)
        };
        let mut cmd = Command::new(tool);
        cmd.args(["/F", "/T", "/IM", image.as_str()]);
        cmd
    }
}

impl ProcessControl for SystemProcesses {
    fn kill_by_name(&self, name: &str) -> Result<KillOutcome> {
        let tool = which::which(KILL_TOOL).map_err(|_| ProcessError::ToolMissing(KILL_TOOL))?;
        trace!(tool = %tool.display(), name, "signalling process");

        let status = Self::command(&tool, name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| ProcessError::Spawn {
                tool: KILL_TOOL,
                source,
            })?;

        match status.code() {
            Some(0) => {
                debug!(name, "process terminated");
                Ok(KillOutcome::Killed)
            }
            Some(NO_MATCH_CODE) => {
                debug!(name, "process not running");
                Ok(KillOutcome::NotRunning)
            }
            code => Err(ProcessError::Failed {
                name: name.to_string(),
                code,
            }
            .into()),
        }
    }
}
