//! Common utilities for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, SystemTime};

/// Wrapper around the built `reap` binary
pub struct ReapCommand {
    working_dir: PathBuf,
    args: Vec<String>,
}

/// Captured output of one `reap` invocation
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

impl ReapCommand {
    /// Create a new command in the given working directory
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Execute the command and capture its output
    pub fn execute(&self) -> CommandResult {
        let output = Command::new(env!("CARGO_BIN_EXE_reap"))
            .args(&self.args)
            .current_dir(&self.working_dir)
            .output()
            .expect("failed to run reap binary");

        CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }

    /// Execute and assert a zero exit code
    pub fn assert_success(&self) -> CommandResult {
        let result = self.execute();
        assert!(
            result.success(),
            "reap {:?} failed ({}):\nstdout: {}\nstderr: {}",
            self.args,
            result.exit_code,
            result.stdout,
            result.stderr,
        );
        result
    }
}

/// Create a backup file whose mtime is backdated by `age`
pub fn backup_file(dir: &Path, name: &str, age: Duration) {
    let path = dir.join(name);
    std::fs::write(&path, name.as_bytes()).unwrap();
    let mtime = SystemTime::now() - age;
    filetime::set_file_mtime(&path, filetime::FileTime::from_system_time(mtime)).unwrap();
}

/// Names of the regular files remaining in `dir`, sorted
pub fn remaining_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| {
            let entry = entry.unwrap();
            entry
                .file_type()
                .unwrap()
                .is_file()
                .then(|| entry.file_name().to_string_lossy().into_owned())
        })
        .collect();
    names.sort();
    names
}
