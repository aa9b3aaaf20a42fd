use super::scm_interface::{ScmError, ScmOperations};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Git implementation of SCM operations, driving the `git` executable on PATH
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Command line for messages and logs; non-UTF-8 path bytes are shown lossily
    fn describe(&self, args: &[&OsStr]) -> String {
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy()).collect();
        format!("{} {}", self.git_executable, args.join(" "))
    }

    /// Execute a git command, capturing stdout and stderr
    fn execute_git_command(&self, args: &[&OsStr]) -> Result<Output, ScmError> {
        debug!(command = %self.describe(args), "running git");
        Command::new(&self.git_executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ScmError::spawn_failed(self.describe(args), e))
    }
}

impl ScmOperations for GitScm {
    fn status_porcelain(&self, repo_path: &Path) -> Result<String, ScmError> {
        let args = [
            OsStr::new("-C"),
            repo_path.as_os_str(),
            OsStr::new("status"),
            OsStr::new("--porcelain"),
        ];
        let output = self.execute_git_command(&args)?;

        if !output.status.success() {
            return Err(ScmError::command_failed(
                self.describe(&args),
                output.status.code(),
                String::from_utf8_lossy(&output.stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError> {
        let args = [OsStr::new("clone"), OsStr::new(url), dest_path.as_os_str()];
        debug!(command = %self.describe(&args), "running git");

        // progress goes straight to the user's terminal
        let status = Command::new(&self.git_executable)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ScmError::spawn_failed(self.describe(&args), e))?;

        if !status.success() {
            return Err(ScmError::command_failed(
                self.describe(&args),
                status.code(),
                "",
            ));
        }

        Ok(())
    }
}
