//! Common test utilities and helpers
//!
//! Builds directory trees with fake or real git repositories inside a
//! temporary directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// `git` is on PATH and runnable
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Run git in `dir` and panic when it fails
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Temporary tree of repositories, removed on drop
pub struct RepoTree {
    root: TempDir,
}

impl RepoTree {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Directory at `relative` containing an empty `.git` directory
    pub fn fake_repo(&self, relative: &str) -> PathBuf {
        let dir = self.root.path().join(relative);
        fs::create_dir_all(dir.join(".git")).expect("failed to create fake repository");
        dir
    }

    /// Plain directory at `relative`
    pub fn plain_dir(&self, relative: &str) -> PathBuf {
        let dir = self.root.path().join(relative);
        fs::create_dir_all(&dir).expect("failed to create directory");
        dir
    }

    /// Working tree at `relative` created with `git init`
    pub fn git_repo(&self, relative: &str) -> PathBuf {
        let dir = self.plain_dir(relative);
        run_git(&dir, &["init", "--quiet"]);
        dir
    }

    /// Working tree with one untracked file
    pub fn dirty_git_repo(&self, relative: &str) -> PathBuf {
        let dir = self.git_repo(relative);
        fs::write(dir.join("notes.txt"), "work in progress\n").expect("failed to write file");
        dir
    }

    /// Bare repository at `relative`, usable as a clone source
    pub fn bare_repo(&self, relative: &str) -> PathBuf {
        let dir = self.plain_dir(relative);
        run_git(&dir, &["init", "--quiet", "--bare"]);
        dir
    }
}

impl Default for RepoTree {
    fn default() -> Self {
        Self::new()
    }
}
