//! Shared helpers for integration tests.


use insta_cmd::get_cargo_bin;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// An isolated environment for running `comphook`.
///
/// Config lookups resolve inside a temporary directory, so neither the
/// developer's config file nor their `COMPHOOK_*` variables leak into tests.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root_path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory `comphook` reads its config file from.
    pub fn config_dir(&self) -> PathBuf {
        self.root_path().join("config").join("comphook")
    }

    pub fn write_config(&self, contents: &str) {
        let dir = self.config_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), contents).unwrap();
    }

    /// Strip user-specific state from a command's environment.
    pub fn clean_cli_env(&self, cmd: &mut Command) {
        for (key, _) in std::env::vars_os() {
            if key.to_string_lossy().starts_with("COMPHOOK_") {
                cmd.env_remove(&key);
            }
        }
        cmd.env("HOME", self.root_path());
        cmd.env("XDG_CONFIG_HOME", self.root_path().join("config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CLICOLOR_FORCE");
        cmd.env_remove("RUST_LOG");
        // No shell to detect unless a test sets one
        cmd.env_remove("SHELL");
        cmd.current_dir(self.root_path());
    }

    /// A `comphook` command with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("comphook"));
        self.clean_cli_env(&mut cmd);
        cmd
    }
}
