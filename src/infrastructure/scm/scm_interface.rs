use std::path::Path;

/// Subprocess-backed source control operations used by the scanner and the clone executor
#[cfg_attr(test, mockall::automock)]
pub trait ScmOperations {
    /// Run a porcelain status query in `repo_path` and return its captured stdout
    fn status_porcelain(&self, repo_path: &Path) -> Result<String, ScmError>;

    /// Clone `url` into `dest_path`, letting the tool write its progress to the console
    fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError>;
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Failed to run {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {}{}", exit_label(*exit_code), stderr_suffix(stderr))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl ScmError {
    /// Create a spawn failed error
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}

fn exit_label(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit status {}", code),
        None => "a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}
