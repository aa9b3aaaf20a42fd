pub mod repo_walker;

pub use repo_walker::{RepoWalker, SkippedEntry, TraversalPolicy, WalkOutcome};
