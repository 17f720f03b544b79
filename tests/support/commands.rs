//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a teardown command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - PATH set to the test's private bin directory
    /// - NO_COLOR set so output can be matched literally
    /// - Current directory set to the test working tree
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("teardown").expect("failed to find teardown binary");
        cmd.env("PATH", self.bin.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("TEARDOWN_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for a plain `teardown` run.
    pub fn run(&self) -> Output {
        self.cmd().output().expect("failed to run teardown")
    }

    /// Shortcut for `teardown --json`.
    pub fn run_json(&self) -> serde_json::Value {
        let output = self
            .cmd()
            .arg("--json")
            .output()
            .expect("failed to run teardown --json");
        assert!(
            output.status.success(),
            "teardown --json failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
    }
}
