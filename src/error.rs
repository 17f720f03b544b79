use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while asking the OS to terminate a process.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("process tool not found on PATH: {0}")]
    ToolMissing(&'static str),

    #[error("could not terminate {name} (exit code {code:?})")]
    Failed { name: String, code: Option<i32> },

    #[error("could not run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
