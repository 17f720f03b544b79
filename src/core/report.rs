//! Per-step outcome of a teardown run.

use serde::Serialize;

use crate::core::constants::{SERVER_PROCESS, TUNNEL_PROCESS};

/// The five cleanup steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    StopTunnel,
    StopServer,
    RedactSecrets,
    DeleteTranscripts,
    PurgeCaches,
}

impl Step {
    /// Every step in the order the runner executes them.
    pub const ALL: [Step; 5] = [
        Step::StopTunnel,
        Step::StopServer,
        Step::RedactSecrets,
        Step::DeleteTranscripts,
        Step::PurgeCaches,
    ];

    /// Fixed status line printed for this step.
    pub fn label(&self) -> &'static str {
        match self {
            Step::StopTunnel => "Stopping cloudflared tunnel",
            Step::StopServer => "Stopping uvicorn server",
            Step::RedactSecrets => "Revoking API keys in .env",
            Step::DeleteTranscripts => "Deleting transcripts and logs",
            Step::PurgeCaches => "Removing __pycache__ directories",
        }
    }

    /// Process targeted by a stop step.
    pub fn process(&self) -> Option<&'static str> {
        match self {
            Step::StopTunnel => Some(TUNNEL_PROCESS),
            Step::StopServer => Some(SERVER_PROCESS),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Done,
    Skipped,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Done => "ok",
            Status::Skipped => "skipped",
            Status::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub status: Status,
    pub detail: String,
    /// Paths removed, keys revoked or processes stopped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected: Vec<String>,
}

impl StepReport {
    pub fn new(step: Step, status: Status, detail: impl Into<String>) -> Self {
        Self {
            step,
            status,
            detail: detail.into(),
            affected: Vec::new(),
        }
    }

    pub fn with_affected(mut self, affected: Vec<String>) -> Self {
        self.affected = affected;
        self
    }
}

/// Outcome of a full run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub steps: Vec<StepReport>,
}

impl Report {
    /// Whether no step failed.
    pub fn is_clean(&self) -> bool {
        self.steps.iter().all(|s| s.status != Status::Failed)
    }

    /// Look up the entry for one step.
    pub fn get(&self, step: Step) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }

    /// Render as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
