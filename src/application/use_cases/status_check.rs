use std::path::PathBuf;

use crate::application::services::status_classifier::StatusClassifier;
use crate::common::result::GitkitResult;
use crate::domain::entities::repository::{RepositoryLocation, RepositoryStatus};
use crate::infrastructure::filesystem::{RepoWalker, TraversalPolicy};
use crate::infrastructure::scm::ScmOperations;

/// ステータス確認の設定
#[derive(Debug, Clone)]
pub struct StatusCheckConfig {
    /// 探索を開始するディレクトリ（解決済みの絶対パス）
    pub base_path: PathBuf,

    /// 読み取れないエントリに出会ったときの方針
    pub policy: TraversalPolicy,
}

impl StatusCheckConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            policy: TraversalPolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: TraversalPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// 単一リポジトリのステータス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReport {
    pub location: RepositoryLocation,
    pub status: RepositoryStatus,
}

/// 全体のスキャン結果（発見順）
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub repositories: Vec<RepositoryReport>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// リポジトリステータスを追加
    pub fn add_repository(&mut self, location: RepositoryLocation, status: RepositoryStatus) {
        self.repositories.push(RepositoryReport { location, status });
    }

    /// 合計リポジトリ数
    pub fn total_count(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// 未コミットの変更があるリポジトリ
    pub fn dirty(&self) -> Vec<&RepositoryLocation> {
        self.repositories
            .iter()
            .filter(|r| r.status.is_dirty())
            .map(|r| &r.location)
            .collect()
    }

    /// ステータスを取得できなかったリポジトリと理由
    pub fn unknown(&self) -> Vec<(&RepositoryLocation, &str)> {
        self.repositories
            .iter()
            .filter_map(|r| match &r.status {
                RepositoryStatus::Unknown { reason } => Some((&r.location, reason.as_str())),
                _ => None,
            })
            .collect()
    }

    /// 全てクリーンか（空の場合はfalse）
    pub fn all_clean(&self) -> bool {
        !self.is_empty() && self.repositories.iter().all(|r| r.status.is_clean())
    }
}

/// ステータス確認のユースケース
pub struct StatusCheckUseCase<S: ScmOperations> {
    /// 設定
    config: StatusCheckConfig,
    classifier: StatusClassifier<S>,
}

impl<S: ScmOperations> StatusCheckUseCase<S> {
    /// 新しいStatusCheckUseCaseインスタンスを作成
    pub fn new(config: StatusCheckConfig, scm: S) -> Self {
        Self {
            config,
            classifier: StatusClassifier::new(scm),
        }
    }

    /// ステータス確認を実行
    ///
    /// 探索が完了してから各リポジトリのステータスを順に取得する。
    /// strictモードでは探索エラーで全体が失敗する。
    pub fn execute(&self) -> GitkitResult<ScanResult> {
        // 1. リポジトリの探索
        let outcome = RepoWalker::new(self.config.policy).walk(&self.config.base_path)?;

        // 2. 各リポジトリのステータス確認
        let mut result = ScanResult::new();
        for location in outcome.locations {
            let status = self.classifier.classify(&location);
            result.add_repository(location, status);
        }

        Ok(result)
    }
}
