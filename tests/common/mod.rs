#![allow(dead_code)]

pub mod mock_analyzer;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Lemma table covering the demo sentences
pub const DEMO_LEMMAS: &str = "\
# form\tlemma
мама
мамина\tмамин
мыла\tмыть
моет\tмыть
раму\tрама
рамы\tрама
";

/// Scratch directory holding fixture files for one test
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write `contents` to a file in the scratch directory and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("Failed to create fixture");
        file.write_all(contents.as_bytes())
            .expect("Failed to write fixture");
        path
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Run the lemmatch binary with `args`
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lemmatch"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run lemmatch")
}

/// Run the lemmatch binary with `args`, feeding `input` on stdin
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lemmatch"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start lemmatch");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to run lemmatch")
}
