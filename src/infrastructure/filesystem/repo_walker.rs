use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::common::error::GitkitError;
use crate::common::result::GitkitResult;
use crate::domain::entities::repository::{RepositoryLocation, GIT_MARKER};

/// How a directory walk reacts to an entry it cannot read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalPolicy {
    /// The first unreadable entry aborts the whole walk.
    #[default]
    Strict,
    /// Unreadable entries are recorded, skipped, and the walk continues.
    Lenient,
}

/// An entry the lenient walk could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// Result of walking a tree for repository roots.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Repository roots in depth-first pre-order, sorted by file name within a directory.
    pub locations: Vec<RepositoryLocation>,
    /// Entries skipped under [`TraversalPolicy::Lenient`]. Always empty for strict walks.
    pub skipped: Vec<SkippedEntry>,
}

/// Depth-first walker that collects every directory directly containing a `.git` entry.
///
/// Nested repositories (submodules, vendored checkouts) are reported alongside their
/// parents. Symlinks are not followed.
#[derive(Debug, Clone, Default)]
pub struct RepoWalker {
    policy: TraversalPolicy,
}

impl RepoWalker {
    pub fn new(policy: TraversalPolicy) -> Self {
        Self { policy }
    }

    pub fn walk(&self, base: &Path) -> GitkitResult<WalkOutcome> {
        let mut outcome = WalkOutcome::default();
        let mut entries = WalkDir::new(base).sort_by_file_name().into_iter();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => match self.policy {
                    TraversalPolicy::Strict => return Err(GitkitError::from(err)),
                    TraversalPolicy::Lenient => {
                        let path = err.path().map(Path::to_path_buf);
                        warn!(path = ?path, "skipping unreadable entry: {}", err);
                        outcome.skipped.push(SkippedEntry {
                            path,
                            reason: err.to_string(),
                        });
                        continue;
                    }
                },
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            // metadata directories hold no working trees of their own
            if entry.file_name() == GIT_MARKER {
                entries.skip_current_dir();
                continue;
            }

            if let Some(location) = RepositoryLocation::detect(entry.path()) {
                debug!(path = %location, "found repository");
                outcome.locations.push(location);
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn make_repo(base: &Path, rel: &str) -> PathBuf {
        let path = base.join(rel);
        fs::create_dir_all(path.join(".git")).unwrap();
        path
    }

    fn paths(outcome: &WalkOutcome) -> Vec<PathBuf> {
        outcome
            .locations
            .iter()
            .map(|l| l.path().to_path_buf())
            .collect()
    }

    #[test]
    fn test_empty_tree_has_no_repositories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("a/b/c")).unwrap();
        fs::write(temp_dir.path().join("a/readme.txt"), "hello").unwrap();

        let outcome = RepoWalker::new(TraversalPolicy::Strict)
            .walk(temp_dir.path())
            .unwrap();
        assert!(outcome.locations.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_finds_repositories_in_preorder() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        let beta = make_repo(base, "beta");
        let alpha = make_repo(base, "group/alpha");
        let gamma = make_repo(base, "group/gamma");

        let outcome = RepoWalker::default().walk(base).unwrap();
        assert_eq!(paths(&outcome), vec![beta, alpha, gamma]);
    }

    #[test]
    fn test_base_itself_can_be_a_repository() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();

        let outcome = RepoWalker::default().walk(temp_dir.path()).unwrap();
        assert_eq!(paths(&outcome), vec![temp_dir.path().to_path_buf()]);
    }

    #[test]
    fn test_nested_repositories_are_reported_independently() {
        let temp_dir = TempDir::new().unwrap();
        let outer = make_repo(temp_dir.path(), "outer");
        let inner = make_repo(temp_dir.path(), "outer/vendor/inner");

        let outcome = RepoWalker::default().walk(temp_dir.path()).unwrap();
        assert_eq!(paths(&outcome), vec![outer, inner]);
    }

    #[test]
    fn test_worktree_pointer_file_marks_repository() {
        let temp_dir = TempDir::new().unwrap();
        let worktree = temp_dir.path().join("feature");
        fs::create_dir(&worktree).unwrap();
        fs::write(worktree.join(".git"), "gitdir: ../main/.git/worktrees/feature\n").unwrap();

        let outcome = RepoWalker::default().walk(temp_dir.path()).unwrap();
        assert_eq!(paths(&outcome), vec![worktree]);
    }

    #[test]
    fn test_does_not_descend_into_git_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let repo = make_repo(temp_dir.path(), "repo");
        // looks like a repository but lives inside metadata
        fs::create_dir_all(repo.join(".git/modules/sub/.git")).unwrap();

        let outcome = RepoWalker::default().walk(temp_dir.path()).unwrap();
        assert_eq!(paths(&outcome), vec![repo]);
    }

    #[test]
    fn test_missing_base_is_fatal_when_strict() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let result = RepoWalker::new(TraversalPolicy::Strict).walk(&missing);
        assert!(matches!(result, Err(GitkitError::TraversalError { .. })));
    }

    #[test]
    fn test_missing_base_is_skipped_when_lenient() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let outcome = RepoWalker::new(TraversalPolicy::Lenient)
            .walk(&missing)
            .unwrap();
        assert!(outcome.locations.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].path.as_deref(), Some(missing.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_policies() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let visible = make_repo(temp_dir.path(), "a-visible");
        let locked = temp_dir.path().join("b-locked");
        make_repo(&locked, "hidden");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores permission bits, nothing to observe there
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let strict = RepoWalker::new(TraversalPolicy::Strict).walk(temp_dir.path());
        let lenient = RepoWalker::new(TraversalPolicy::Lenient).walk(temp_dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(strict, Err(GitkitError::TraversalError { .. })));

        let lenient = lenient.unwrap();
        assert_eq!(paths(&lenient), vec![visible]);
        assert_eq!(lenient.skipped.len(), 1);
        assert_eq!(lenient.skipped[0].path.as_deref(), Some(locked.as_path()));
    }
}
