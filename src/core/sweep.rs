//! Recursive removal of session leftovers.
//!
//! Transcript dumps, the session log and Python bytecode caches are located
//! by walking the working tree with `walkdir`. Symlinks are never followed,
//! so nothing outside the tree is reached. All matches are collected before
//! anything is deleted.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::constants::{CACHE_DIR, LOG_FILE, TRANSCRIPT_EXTENSION, TRANSCRIPT_MARKER};

/// Paths removed by one sweep and the ones that resisted.
#[derive(Debug, Default)]
pub struct Sweep {
    pub removed: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, std::io::Error)>,
}

impl Sweep {
    /// Whether every removal succeeded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: std::io::Result<()>) {
        match result {
            Ok(()) => {
                info!(path = %path.display(), "removed");
                self.removed.push(path);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "already gone");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not remove");
                self.errors.push((path, e));
            }
        }
    }
}

/// Find every transcript dump under `root`.
///
/// A transcript is any non-directory whose file name contains `transcript`
/// and ends in `.json`, at any depth.
pub fn find_transcripts(root: &Path) -> Vec<PathBuf> {
    let raw = format!("*{}*{}", TRANSCRIPT_MARKER, TRANSCRIPT_EXTENSION);
    let pattern = match Pattern::new(&raw) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(pattern = %raw, error = %e, "invalid transcript pattern");
            return Vec::new();
        }
    };

    let mut found: Vec<PathBuf> = walk(root)
        .filter(|entry| !entry.file_type().is_dir())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map_or(false, |name| pattern.matches(name))
        })
        .map(DirEntry::into_path)
        .collect();
    found.sort();
    found
}

/// Find every `__pycache__` directory under `root`.
///
/// The walk does not descend into a match, so only the outermost cache dir
/// of a nested pair is returned.
pub fn find_cache_dirs(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut entries = WalkDir::new(root).min_depth(1).into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                skip_unreadable(&e);
                continue;
            }
        };

        let file_type = entry.file_type();
        if entry.file_name() != CACHE_DIR || !(file_type.is_dir() || file_type.is_symlink()) {
            continue;
        }
        if file_type.is_dir() {
            entries.skip_current_dir();
        }
        found.push(entry.into_path());
    }

    found.sort();
    found
}

/// Delete transcript dumps anywhere under `root` and `logs.txt` in `root`.
pub fn delete_transcripts(root: &Path) -> Sweep {
    let mut sweep = Sweep::default();

    for path in find_transcripts(root) {
        let result = std::fs::remove_file(&path);
        sweep.record(path, result);
    }

    let log = root.join(LOG_FILE);
    let result = std::fs::remove_file(&log);
    sweep.record(log, result);

    sweep
}

/// Delete every `__pycache__` tree under `root`.
pub fn purge_cache_dirs(root: &Path) -> Sweep {
    let mut sweep = Sweep::default();

    for path in find_cache_dirs(root) {
        let result = remove_tree(&path);
        sweep.record(path, result);
    }

    sweep
}

fn remove_tree(path: &Path) -> std::io::Result<()> {
    // A symlinked cache dir is unlinked, never followed.
    if std::fs::symlink_metadata(path)?.file_type().is_symlink() {
        std::fs::remove_file(path)
    } else {
        std::fs::remove_dir_all(path)
    }
}

/// Every entry below `root`, without following symlinks.
fn walk(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                skip_unreadable(&e);
                None
            }
        })
}

fn skip_unreadable(e: &walkdir::Error) {
    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
    debug!(path = %path, error = %e, "skipping unreadable entry");
}
