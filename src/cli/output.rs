//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks, `ok`
//! - Red: errors, `failed`
//! - Yellow: warnings
//! - Cyan: hints
//! - Dimmed: secondary info, `skipped`

use console::style;
use std::io::{self, Write as IoWrite};

use crate::core::report::Status;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ teardown complete`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ could not read current directory`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ 1 step failed`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ rerun with --verbose for details`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a bold header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    if colors_enabled() {
        print!("{}... ", style(label).dim());
    } else {
        print!("{}... ", label);
    }
    let _ = io::stdout().flush();
}

/// Finish a progress line with the step status.
pub fn progress_done(status: Status) {
    let word = status.as_str();
    if colors_enabled() {
        match status {
            Status::Done => println!("{}", style(word).green()),
            Status::Skipped => println!("{}", style(word).dim()),
            Status::Failed => println!("{}", style(word).red()),
        }
    } else {
        println!("{}", word);
    }
}

/// Print an indented, dimmed detail line.
///
/// Example: `  revoked 2 keys, backup in .env.bak`
pub fn detail(msg: &str) {
    if colors_enabled() {
        println!("  {}", style(msg).dim());
    } else {
        println!("  {}", msg);
    }
}

/// Print a list item with bullet.
///
/// Example: `  • backend/__pycache__`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}
