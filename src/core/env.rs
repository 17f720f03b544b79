//! Secret redaction for .env files.
//!
//! Rewrites tracked `KEY=value` lines to `KEY=REVOKED` while keeping every
//! other byte of the file, including line order and line terminators. The
//! file is handled as raw bytes; it need not be valid UTF-8.

use std::ffi::OsString;
#[cfg(unix)]
use std::io::Write;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{BACKUP_SUFFIX, REDACTED_KEYS, REVOKED};
use crate::error::Result;

/// Result of redacting .env text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    /// Rewritten file contents.
    pub text: Vec<u8>,
    /// Keys whose value was replaced, in file order.
    pub revoked: Vec<String>,
}

impl Redaction {
    /// Whether any value actually changed.
    pub fn changed(&self) -> bool {
        !self.revoked.is_empty()
    }
}

/// What happened to the env file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedactOutcome {
    /// No env file in the working directory.
    Absent,
    /// Already redacted and a backup exists; nothing was written.
    Unchanged,
    /// Backup written, listed keys revoked (possibly none).
    Redacted { revoked: Vec<String> },
}

/// Replace the value of every tracked key with [`REVOKED`].
///
/// A line is tracked when it starts with one of [`REDACTED_KEYS`] directly
/// followed by `=`. Matching is case-sensitive and anchored at column zero,
/// so `MY_API_KEY=` and ` API_KEY=` are left alone.
pub fn redact(contents: &[u8]) -> Redaction {
    let mut text = Vec::with_capacity(contents.len());
    let mut revoked = Vec::new();

    for line in contents.split_inclusive(|b| *b == b'\n') {
        let (body, ending) = split_line_ending(line);

        match tracked_key(body) {
            Some(key) => {
                if &body[key.len() + 1..] != REVOKED.as_bytes() {
                    revoked.push(key.to_string());
                }
                text.extend_from_slice(key.as_bytes());
                text.push(b'=');
                text.extend_from_slice(REVOKED.as_bytes());
                text.extend_from_slice(ending);
            }
            None => text.extend_from_slice(line),
        }
    }

    Redaction { text, revoked }
}

/// Path of the backup written next to `path` (`.env` -> `.env.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Back up and redact the env file at `path`.
///
/// An absent file is a no-op. When the file holds no live secret and a
/// backup already exists, both files are left untouched so a second run
/// never replaces the real backup with the redacted copy.
///
/// # Errors
///
/// Returns error if the file cannot be read, copied or rewritten.
pub fn redact_file(path: &Path) -> Result<RedactOutcome> {
    let contents = match std::fs::read(path) {
        Ok(contents) => Zeroizing::new(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "env file absent");
            return Ok(RedactOutcome::Absent);
        }
        Err(e) => return Err(e.into()),
    };

    let redaction = redact(&contents);
    let backup = backup_path(path);

    if !redaction.changed() && backup.exists() {
        debug!(path = %path.display(), "env file already redacted");
        return Ok(RedactOutcome::Unchanged);
    }

    std::fs::copy(path, &backup)?;
    debug!(backup = %backup.display(), "env file backed up");

    if redaction.changed() {
        write_secure(path, &redaction.text)?;
        debug!(keys = ?redaction.revoked, "secrets revoked");
    }

    Ok(RedactOutcome::Redacted {
        revoked: redaction.revoked,
    })
}

fn tracked_key(line: &[u8]) -> Option<&'static str> {
    REDACTED_KEYS.iter().copied().find(|key| {
        line.strip_prefix(key.as_bytes())
            .map_or(false, |rest| rest.first() == Some(&b'='))
    })
}

fn split_line_ending(line: &[u8]) -> (&[u8], &[u8]) {
    if let Some(body) = line.strip_suffix(b"\r\n") {
        (body, b"\r\n")
    } else if let Some(body) = line.strip_suffix(b"\n") {
        (body, b"\n")
    } else {
        (line, b"")
    }
}

fn write_secure(path: &Path, content: &[u8]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(content)?;
        file.flush()?;

        // Existing files keep their old mode on open; tighten it explicitly.
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}
