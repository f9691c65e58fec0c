//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a tkmanager command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - TKMANAGER_KEY set to this environment's key
    /// - Current directory set to the test working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tkmanager").expect("failed to find tkmanager binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("TKMANAGER_KEY", &self.key);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("TKMANAGER_FILE");
        cmd.env_remove("TKMANAGER_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `tkmanager make-file`.
    pub fn make_file(&self) -> Output {
        self.cmd()
            .arg("make-file")
            .output()
            .expect("failed to run tkmanager make-file")
    }

    /// Shortcut for `tkmanager store` in the default group.
    pub fn store(&self, name: &str, secret: &str) -> Output {
        self.cmd()
            .args(["store", name, secret])
            .output()
            .expect("failed to run tkmanager store")
    }

    /// Shortcut for `tkmanager store --group`.
    pub fn store_in(&self, name: &str, group: &str, secret: &str) -> Output {
        self.cmd()
            .args(["store", name, secret, "--group", group])
            .output()
            .expect("failed to run tkmanager store")
    }

    /// Shortcut for `tkmanager read` in the default group.
    pub fn read(&self, name: &str) -> Output {
        self.cmd()
            .args(["read", name])
            .output()
            .expect("failed to run tkmanager read")
    }

    /// Shortcut for `tkmanager read --group`.
    pub fn read_in(&self, name: &str, group: &str) -> Output {
        self.cmd()
            .args(["read", name, "--group", group])
            .output()
            .expect("failed to run tkmanager read")
    }

    /// Shortcut for `tkmanager list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run tkmanager list")
    }

    /// Shortcut for `tkmanager list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run tkmanager list --json")
    }

    /// Shortcut for `tkmanager delete --yes`.
    pub fn delete_in(&self, name: &str, group: &str) -> Output {
        self.cmd()
            .args(["delete", name, "--group", group, "--yes"])
            .output()
            .expect("failed to run tkmanager delete")
    }
}
