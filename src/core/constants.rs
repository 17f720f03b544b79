//! Constants used throughout teardown.
//!
//! Every target the cleanup touches is fixed here; nothing is configurable.

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Suffix appended to the env file name for the pre-redaction backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Keys whose values get revoked, matched as `KEY=` at the start of a line.
pub const REDACTED_KEYS: &[&str] = &["OPENROUTER_API_KEY", "API_KEY"];

/// Literal written in place of a revoked value.
pub const REVOKED: &str = "REVOKED";

/// Tunnel client started for the demo.
pub const TUNNEL_PROCESS: &str = "cloudflared";

/// Local web server started for the demo.
pub const SERVER_PROCESS: &str = "uvicorn";

/// Substring identifying transcript dumps.
pub const TRANSCRIPT_MARKER: &str = "transcript";

/// Extension of transcript dumps.
pub const TRANSCRIPT_EXTENSION: &str = ".json";

/// Log file removed from the working directory only.
pub const LOG_FILE: &str = "logs.txt";

/// Python bytecode cache directory name.
pub const CACHE_DIR: &str = "__pycache__";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "TEARDOWN_LOG";
