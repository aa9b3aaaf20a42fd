use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::application::use_cases::fetch_repositories::{FetchConfig, FetchRepositoriesUseCase};
use crate::domain::value_objects::resolved_path::ResolvedPath;
use crate::infrastructure::hosting::GitHubClient;
use crate::infrastructure::scm::GitScm;
use crate::presentation::cli::DownArgs;
use crate::presentation::ui::display::{style, Level, Reporter};

/// Handler for the down command
pub struct DownCommand {
    pub args: DownArgs,
}

impl DownCommand {
    pub fn new(args: DownArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<()> {
        let username = match &self.args.username {
            Some(username) if !username.trim().is_empty() => username.trim().to_string(),
            _ => prompt_username(io::stdin().lock(), io::stdout())?,
        };

        let destination = ResolvedPath::resolve(&self.args.path)
            .map_err(|e| anyhow::anyhow!("Error resolving path {}: {}", self.args.path, e))?;

        let client = GitHubClient::with_api_url(&self.args.api_url)
            .map_err(|e| anyhow::anyhow!("Error creating API client: {}", e))?;
        let config = FetchConfig::new(username, destination.into_path_buf());
        let use_case = FetchRepositoriesUseCase::new(config, client, GitScm::new());

        let mut reporter = Reporter::stdout();
        let result = use_case
            .execute(|event| {
                if let Err(e) = reporter.fetch_event(&event) {
                    tracing::debug!("cannot write progress: {}", e);
                }
            })
            .map_err(|e| anyhow::anyhow!("Error getting repositories: {}", e))?;

        reporter.fetch_summary(&result)?;
        Ok(())
    }
}

/// Ask for the username on `output` and read one line from `input`
pub fn prompt_username(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    write!(output, "{}", style(Level::Info, "Enter your GitHub username: "))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
