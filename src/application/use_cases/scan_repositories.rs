use std::path::PathBuf;

use crate::common::result::GitkitResult;
use crate::infrastructure::filesystem::{RepoWalker, TraversalPolicy, WalkOutcome};

/// リポジトリ探索の設定
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 探索を開始するディレクトリ
    pub base_path: PathBuf,

    /// 読み取れないエントリに出会ったときの方針（既定はスキップして続行）
    pub policy: TraversalPolicy,
}

impl ScanConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            policy: TraversalPolicy::Lenient,
        }
    }

    pub fn with_policy(mut self, policy: TraversalPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// ステータス確認を行わずにリポジトリの場所だけを列挙するユースケース
pub struct ScanRepositoriesUseCase {
    config: ScanConfig,
}

impl ScanRepositoriesUseCase {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// 探索を実行
    pub fn execute(&self) -> GitkitResult<WalkOutcome> {
        RepoWalker::new(self.config.policy).walk(&self.config.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_scan_config_defaults_to_lenient() {
        let config = ScanConfig::new(".");
        assert_eq!(config.policy, TraversalPolicy::Lenient);
    }

    #[test]
    fn test_scan_lists_all_locations() {
        let temp_dir = TempDir::new().unwrap();
        for rel in ["one", "nested/two", "nested/two/sub/three"] {
            std::fs::create_dir_all(temp_dir.path().join(rel).join(".git")).unwrap();
        }

        let outcome = ScanRepositoriesUseCase::new(ScanConfig::new(temp_dir.path()))
            .execute()
            .unwrap();
        let names: Vec<String> = outcome.locations.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["two", "three", "one"]);
    }

    #[test]
    fn test_scan_of_missing_base_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = ScanRepositoriesUseCase::new(ScanConfig::new(temp_dir.path().join("gone")))
            .execute()
            .unwrap();
        assert!(outcome.locations.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
    }
}
