//! Tests for .env backup and redaction.

use crate::support::*;

#[test]
fn test_session_env_is_redacted() {
    let t = Test::with_files(&[(".env", SESSION_ENV)]);

    let output = t.run();
    assert_success(&output);

    assert_eq!(t.read(".env"), SESSION_ENV_REDACTED);
    assert_eq!(t.read(".env.bak"), SESSION_ENV);
    assert_step(&output, SECRETS, "ok");
    assert_stdout_contains(&output, "revoked 2 keys, backup in .env.bak");
}

#[test]
fn test_backup_is_byte_identical() {
    let t = Test::with_files(&[(".env", MESSY_ENV)]);

    assert_success(&t.run());

    assert_eq!(t.read_bytes(".env.bak"), MESSY_ENV.as_bytes());
}

#[test]
fn test_untracked_lines_and_line_endings_preserved() {
    let t = Test::with_files(&[(".env", MESSY_ENV)]);

    assert_success(&t.run());

    assert_eq!(t.read(".env"), MESSY_ENV_REDACTED);
}

#[test]
fn test_non_utf8_env_is_redacted() {
    let original: &[u8] = b"# caf\xe9 latin-1 comment\nAPI_KEY=live-secret\nNAME=Ren\xe9\n";
    let t = Test::new();
    t.write_bytes(".env", original);

    let output = t.run();
    assert_success(&output);

    assert_step(&output, SECRETS, "ok");
    assert_eq!(
        t.read_bytes(".env"),
        b"# caf\xe9 latin-1 comment\nAPI_KEY=REVOKED\nNAME=Ren\xe9\n"
    );
    assert_eq!(t.read_bytes(".env.bak"), original);
}

#[test]
fn test_missing_env_is_skipped() {
    let t = Test::new();

    let output = t.run();
    assert_success(&output);

    assert_step(&output, SECRETS, "skipped");
    assert!(!t.exists(".env"));
    assert!(!t.exists(".env.bak"));
}

#[test]
fn test_env_without_tracked_keys_is_backed_up_unchanged() {
    let t = Test::with_files(&[(".env", "FOO=bar\nDEBUG=true\n")]);

    assert_success(&t.run());

    assert_eq!(t.read(".env"), "FOO=bar\nDEBUG=true\n");
    assert_eq!(t.read(".env.bak"), "FOO=bar\nDEBUG=true\n");
}

#[test]
fn test_stale_backup_is_overwritten() {
    let t = Test::with_files(&[(".env", SESSION_ENV), (".env.bak", "OLD=1\n")]);

    assert_success(&t.run());

    assert_eq!(t.read(".env.bak"), SESSION_ENV);
}

#[test]
fn test_second_run_keeps_original_backup() {
    let t = Test::with_files(&[(".env", SESSION_ENV)]);

    assert_success(&t.run());
    let output = t.run();
    assert_success(&output);

    assert_step(&output, SECRETS, "skipped");
    assert_eq!(t.read(".env"), SESSION_ENV_REDACTED);
    assert_eq!(t.read(".env.bak"), SESSION_ENV);
}

#[test]
fn test_nested_env_files_are_not_touched() {
    let t = Test::with_files(&[("backend/.env", SESSION_ENV)]);

    assert_success(&t.run());

    assert_eq!(t.read("backend/.env"), SESSION_ENV);
    assert!(!t.exists("backend/.env.bak"));
}

#[cfg(unix)]
#[test]
fn test_redacted_env_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_files(&[(".env", SESSION_ENV)]);

    assert_success(&t.run());

    let mode = std::fs::metadata(t.path(".env")).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
