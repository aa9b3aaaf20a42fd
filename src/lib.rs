//! # gitkit - local repository status and GitHub mirroring
//!
//! `gitkit` bundles three small command-line tools:
//!
//! - **git-check**: walk a directory tree and report every git repository that has
//!   uncommitted changes
//! - **git-scan**: list every git repository below a directory
//! - **gitdown**: clone every repository of a GitHub user that is not present locally
//!
//! The same tools are available as `gitkit check`, `gitkit scan` and `gitkit down`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Which of my projects have work that is not committed yet?
//! git-check --path ~/projects
//!
//! # Where are all the checkouts on this machine?
//! git-scan --path /srv
//!
//! # Mirror a user's public repositories into ./mirror
//! gitdown --username octocat --path mirror
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Repository locations, statuses, remote descriptors and path resolution
//! - [`application`]: Use cases (status check, plain scan, fetch) and their services
//! - [`infrastructure`]: Directory walking, the `git` executable, the GitHub API
//! - [`presentation`]: CLI interface and console reporting
//! - [`common`]: Shared error handling
//!
//! All work is sequential: directories are walked, then each repository is queried,
//! then each clone runs, one at a time.
//!
//! ## Error Handling
//!
//! - [`common::error::GitkitError`]: Main error type
//! - [`common::result::GitkitResult`]: Type alias for `Result<T, GitkitError>`
//!
//! Failures of a single status query or clone are reported and the run continues.
//! Failures to resolve the base path, walk it (in strict mode) or list the remote
//! repositories end the command.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use gitkit::application::use_cases::status_check::{StatusCheckConfig, StatusCheckUseCase};
//! use gitkit::domain::value_objects::resolved_path::ResolvedPath;
//! use gitkit::infrastructure::scm::GitScm;
//!
//! # fn example() -> gitkit::Result<()> {
//! let base = ResolvedPath::resolve("~/projects")?;
//! let use_case = StatusCheckUseCase::new(StatusCheckConfig::new(base.into_path_buf()), GitScm::new());
//! let result = use_case.execute()?;
//!
//! for location in result.dirty() {
//!     println!("{} has uncommitted changes", location);
//! }
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::GitkitError;
pub use crate::common::result::GitkitResult as Result;
