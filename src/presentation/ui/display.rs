use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use crate::application::use_cases::fetch_repositories::{FetchEvent, FetchResult};
use crate::application::use_cases::status_check::ScanResult;
use crate::infrastructure::filesystem::WalkOutcome;

/// Semantic level of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Style `text` for `level`. Honors `colored`'s global override, so `--no-color`
/// and non-terminal output yield the plain text.
pub fn style(level: Level, text: &str) -> String {
    match level {
        Level::Info => text.cyan().to_string(),
        Level::Success => text.green().to_string(),
        Level::Warning => text.yellow().to_string(),
        Level::Error => text.red().to_string(),
    }
}

/// Writes the human-readable output of the three tools
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print one styled line
    pub fn line(&mut self, level: Level, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", style(level, message))
    }

    pub fn searching(&mut self, base: &Path) -> io::Result<()> {
        self.line(
            Level::Info,
            &format!("Searching for git repositories in {}...", base.display()),
        )
    }

    /// Summary of a scan with status classification
    pub fn status_report(&mut self, result: &ScanResult) -> io::Result<()> {
        if result.is_empty() {
            return self.line(Level::Warning, "No git repositories found.");
        }

        if result.all_clean() {
            return self.line(
                Level::Success,
                &format!("All {} repositories are clean", result.total_count()),
            );
        }

        let dirty = result.dirty();
        if !dirty.is_empty() {
            self.line(
                Level::Warning,
                "The following repositories have uncommitted changes:",
            )?;
            for location in dirty {
                self.line(Level::Warning, &format!(" - {}", location))?;
            }
        }

        let unknown = result.unknown();
        if !unknown.is_empty() {
            self.line(
                Level::Error,
                "The following repositories could not be checked:",
            )?;
            for (location, reason) in unknown {
                self.line(Level::Error, &format!(" - {} ({})", location, reason))?;
            }
        }

        Ok(())
    }

    /// Plain listing of discovered repositories
    pub fn scan_report(&mut self, outcome: &WalkOutcome) -> io::Result<()> {
        for skipped in &outcome.skipped {
            let path = skipped
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| skipped.reason.clone());
            writeln!(self.out, "Permission denied for {}. Skipping...", path)?;
        }

        if outcome.locations.is_empty() {
            return writeln!(self.out, "No Git repository found.");
        }

        writeln!(self.out, "Git repositories found:")?;
        for location in &outcome.locations {
            writeln!(self.out, "{}", location)?;
        }
        Ok(())
    }

    pub fn fetch_event(&mut self, event: &FetchEvent<'_>) -> io::Result<()> {
        match event {
            FetchEvent::Skipped { repository, .. } => self.line(
                Level::Warning,
                &format!("Repository {} already exists, skipping...", repository.name),
            ),
            FetchEvent::Cloning { repository, target } => self.line(
                Level::Info,
                &format!("Cloning {} into {}...", repository.name, target.display()),
            ),
            FetchEvent::Failed { repository, error } => self.line(
                Level::Error,
                &format!("Error cloning repository {}: {}", repository.name, error),
            ),
        }
    }

    pub fn fetch_summary(&mut self, result: &FetchResult) -> io::Result<()> {
        if result.is_success() {
            self.line(Level::Success, "All repositories cloned successfully!")
        } else {
            self.line(
                Level::Warning,
                &format!("{} repositories failed to clone", result.failed_count()),
            )
        }
    }
}
