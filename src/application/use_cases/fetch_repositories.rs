use std::path::{Path, PathBuf};
use tracing::info;

use crate::application::services::clone_executor::{CloneExecutor, CloneOutcome};
use crate::common::error::GitkitError;
use crate::common::result::{GitkitResult, ResultExt};
use crate::domain::entities::repository::RemoteRepository;
use crate::infrastructure::hosting::RepositoryLister;
use crate::infrastructure::scm::ScmOperations;

/// リモートリポジトリ取得の設定
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// ホスティングサービスのアカウント名
    pub username: String,

    /// クローン先のディレクトリ（存在しなければ作成する）
    pub destination: PathBuf,
}

impl FetchConfig {
    pub fn new(username: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            username: username.into(),
            destination: destination.into(),
        }
    }
}

/// 取得処理の進捗イベント
#[derive(Debug)]
pub enum FetchEvent<'a> {
    /// クローン先が既に存在する
    Skipped {
        repository: &'a RemoteRepository,
        target: &'a Path,
    },
    /// クローンを開始する
    Cloning {
        repository: &'a RemoteRepository,
        target: &'a Path,
    },
    /// クローンに失敗した（処理は続行する）
    Failed {
        repository: &'a RemoteRepository,
        error: &'a GitkitError,
    },
}

/// 単一リポジトリの処理結果
#[derive(Debug)]
pub struct CloneReport {
    pub repository: RemoteRepository,
    /// 名前が拒否された場合は`None`
    pub target: Option<PathBuf>,
    pub outcome: CloneOutcome,
}

/// 取得処理全体の結果
#[derive(Debug, Default)]
pub struct FetchResult {
    /// リモートの一覧順
    pub reports: Vec<CloneReport>,
}

impl FetchResult {
    pub fn cloned_count(&self) -> usize {
        self.count(|o| matches!(o, CloneOutcome::Cloned))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, CloneOutcome::Skipped))
    }

    pub fn failed_count(&self) -> usize {
        self.count(CloneOutcome::is_failed)
    }

    /// 失敗したクローンが一つもないか
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    fn count(&self, pred: impl Fn(&CloneOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// アカウントのリポジトリを一覧取得し、未取得のものをクローンするユースケース
pub struct FetchRepositoriesUseCase<L: RepositoryLister, S: ScmOperations> {
    config: FetchConfig,
    lister: L,
    executor: CloneExecutor<S>,
}

impl<L: RepositoryLister, S: ScmOperations> FetchRepositoriesUseCase<L, S> {
    /// 新しいFetchRepositoriesUseCaseインスタンスを作成
    pub fn new(config: FetchConfig, lister: L, scm: S) -> Self {
        Self {
            config,
            lister,
            executor: CloneExecutor::new(scm),
        }
    }

    /// 取得処理を実行
    ///
    /// 一覧取得とクローン先ディレクトリの作成の失敗は全体の失敗になる。
    /// 個々のクローンの失敗は `on_event` に通知され、残りの処理は続行する。
    pub fn execute(&self, mut on_event: impl FnMut(FetchEvent<'_>)) -> GitkitResult<FetchResult> {
        // 1. 入力チェック
        let username = self.config.username.trim();
        if username.is_empty() {
            return Err(GitkitError::validation_error(
                "username",
                "must not be empty",
            ));
        }

        // 2. リモートの一覧取得
        let repositories = self.lister.list_repositories(username)?;
        info!(count = repositories.len(), username, "listed remote repositories");

        // 3. クローン先の用意
        let destination = &self.config.destination;
        std::fs::create_dir_all(destination).with_filesystem_error(
            format!("Cannot create directory {}", destination.display()),
            Some(destination.clone()),
        )?;

        // 4. 各リポジトリのクローン
        let mut result = FetchResult::default();
        for repository in repositories {
            let outcome = self.executor.ensure(&repository, destination, |target| {
                on_event(FetchEvent::Cloning {
                    repository: &repository,
                    target,
                })
            });
            let target = repository.destination_in(destination).ok();

            match (&outcome, &target) {
                (CloneOutcome::Skipped, Some(target)) => on_event(FetchEvent::Skipped {
                    repository: &repository,
                    target,
                }),
                (CloneOutcome::Failed(error), _) => on_event(FetchEvent::Failed {
                    repository: &repository,
                    error,
                }),
                _ => {}
            }

            result.reports.push(CloneReport {
                repository,
                target,
                outcome,
            });
        }

        Ok(result)
    }
}
