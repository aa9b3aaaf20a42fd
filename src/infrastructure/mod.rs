/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Directory walking (repository discovery)
/// - SCM operations through the `git` executable (status, clone)
/// - Hosting provider access (GitHub repository listing)
pub mod filesystem;
pub mod hosting;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{RepoWalker, TraversalPolicy, WalkOutcome};
pub use hosting::{GitHubClient, HostingError, RepositoryLister};
pub use scm::{GitScm, ScmError, ScmOperations};
