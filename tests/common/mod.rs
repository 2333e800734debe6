//! Common test utilities for globedock CLI tests.
//!
//! Provides `TestEnv`, an isolated temp directory with helpers to lay
//! down a built-bundle fixture and run the globedock binary inside it.

#![allow(dead_code)] // Not every test crate uses every helper.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub const MAIN_JS: &str = "console.log('main entry');";
pub const GLOBE_JS: &str = "console.log('globe chunk');";
pub const MAIN_CSS: &str = "body { background: #000; }";

/// Result of running a globedock CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Lay down a complete built bundle under `static/`.
    pub fn write_bundle(&self) {
        self.write_bundle_at("static");
    }

    /// Lay down a complete built bundle under an arbitrary root.
    pub fn write_bundle_at(&self, root: &str) {
        let root = self.path(root);
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("index.html"), "<html></html>").unwrap();

        let assets = root.join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("index-Ab12Cd34.js"), MAIN_JS).unwrap();
        fs::write(assets.join("globe-Ef56Gh78.js"), GLOBE_JS).unwrap();
        fs::write(assets.join("index-Ij90Kl12.css"), MAIN_CSS).unwrap();
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Run globedock in this environment from the temp root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_globedock");

        let output = Command::new(bin)
            .args(args)
            .current_dir(cwd)
            // Pin terminal detection so assertions see ascii output
            // regardless of the host environment.
            .env("TERM", "dumb")
            .env_remove("NO_COLOR")
            .env_remove("GLOBEDOCK_HOST")
            .env_remove("GLOBEDOCK_PORT")
            .env_remove("GLOBEDOCK_BUNDLE_ROOT")
            .env_remove("GLOBEDOCK_USE_DEV_SERVER")
            .output()
            .expect("run globedock binary");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
