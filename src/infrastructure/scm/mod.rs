/// SCM (Source Control Management) operations infrastructure
///
/// Status queries and clones are delegated to an external `git` executable.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{ScmError, ScmOperations};
