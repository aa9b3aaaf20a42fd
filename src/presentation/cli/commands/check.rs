use anyhow::Result;

use crate::application::use_cases::status_check::{StatusCheckConfig, StatusCheckUseCase};
use crate::domain::value_objects::resolved_path::ResolvedPath;
use crate::infrastructure::scm::GitScm;
use crate::presentation::cli::CheckArgs;
use crate::presentation::ui::display::Reporter;

/// Handler for the check command
pub struct CheckCommand {
    pub args: CheckArgs,
}

impl CheckCommand {
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<()> {
        let base_path = self.resolve_base_path()?;

        let mut reporter = Reporter::stdout();
        reporter.searching(base_path.as_path())?;

        let config = StatusCheckConfig::new(base_path.into_path_buf())
            .with_policy(self.args.traversal.into());
        let use_case = StatusCheckUseCase::new(config, GitScm::new());

        match use_case.execute() {
            Ok(result) => {
                reporter.status_report(&result)?;
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("Error walking the path: {}", e)),
        }
    }

    /// `--path` when given, the home directory otherwise
    fn resolve_base_path(&self) -> Result<ResolvedPath> {
        match &self.args.path {
            Some(raw) => ResolvedPath::resolve(raw)
                .map_err(|e| anyhow::anyhow!("Error resolving path {}: {}", raw, e)),
            None => ResolvedPath::home_dir()
                .map_err(|e| anyhow::anyhow!("Error getting user home directory: {}", e)),
        }
    }
}
