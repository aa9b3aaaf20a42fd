use anyhow::Result;

use crate::application::use_cases::scan_repositories::{ScanConfig, ScanRepositoriesUseCase};
use crate::domain::value_objects::resolved_path::ResolvedPath;
use crate::presentation::cli::ScanArgs;
use crate::presentation::ui::display::Reporter;

/// Handler for the scan command
pub struct ScanCommand {
    pub args: ScanArgs,
}

impl ScanCommand {
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<()> {
        let base_path = ResolvedPath::resolve(&self.args.path)
            .map_err(|e| anyhow::anyhow!("Error resolving path {}: {}", self.args.path, e))?;

        let config =
            ScanConfig::new(base_path.into_path_buf()).with_policy(self.args.traversal.into());
        let outcome = ScanRepositoriesUseCase::new(config)
            .execute()
            .map_err(|e| anyhow::anyhow!("Error scanning repositories: {}", e))?;

        Reporter::stdout().scan_report(&outcome)?;
        Ok(())
    }
}
