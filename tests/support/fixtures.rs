//! Test fixtures and constants.

/// A demo-session .env with both tracked keys.
pub const SESSION_ENV: &str = "OPENROUTER_API_KEY=sk-123\nFOO=bar\nAPI_KEY=abc\n";

/// [`SESSION_ENV`] after redaction.
pub const SESSION_ENV_REDACTED: &str = "OPENROUTER_API_KEY=REVOKED\nFOO=bar\nAPI_KEY=REVOKED\n";

/// .env with comments, blanks, lookalike keys and CRLF endings.
pub const MESSY_ENV: &str = "# demo keys\r\n\r\nOPENROUTER_API_KEY=\"sk-or-v1-abc\"\r\nMY_API_KEY=keep\r\n  API_KEY=indented\r\nAPI_KEY=live\r\nMODEL=deepseek/deepseek-chat:free";

/// [`MESSY_ENV`] after redaction.
pub const MESSY_ENV_REDACTED: &str = "# demo keys\r\n\r\nOPENROUTER_API_KEY=REVOKED\r\nMY_API_KEY=keep\r\n  API_KEY=indented\r\nAPI_KEY=REVOKED\r\nMODEL=deepseek/deepseek-chat:free";

pub const TUNNEL: &str = "Stopping cloudflared tunnel";
pub const SERVER: &str = "Stopping uvicorn server";
pub const SECRETS: &str = "Revoking API keys in .env";
pub const TRANSCRIPTS: &str = "Deleting transcripts and logs";
pub const CACHES: &str = "Removing __pycache__ directories";

/// Status lines printed for every run, in order.
pub const STEP_LABELS: &[&str] = &[TUNNEL, SERVER, SECRETS, TRANSCRIPTS, CACHES];

/// Files a demo session leaves behind.
pub const SESSION_LEFTOVERS: &[(&str, &str)] = &[
    ("logs.txt", "INFO started"),
    ("transcript.json", "[]"),
    ("backend/debate_transcript_2024.json", "[]"),
    ("local_audio/out/mic_transcript.json", "{}"),
    ("backend/__pycache__/main.cpython-311.pyc", "pyc"),
    ("backend/__pycache__/llms_logic.cpython-311.pyc", "pyc"),
    ("local_audio/__pycache__/tts_utils.cpython-311.pyc", "pyc"),
    ("a/b/c/d/__pycache__/deep.cpython-311.pyc", "pyc"),
];

/// Files a teardown must leave alone.
pub const SESSION_KEEPERS: &[(&str, &str)] = &[
    ("backend/main.py", "app = FastAPI()"),
    ("backend/logs.txt", "nested log stays"),
    ("package.json", "{}"),
    ("transcript.md", "# notes"),
    ("transcripts/readme.txt", "keep"),
];
