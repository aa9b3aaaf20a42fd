use std::path::Path;
use tracing::{debug, warn};

use crate::common::error::GitkitError;
use crate::domain::entities::repository::RemoteRepository;
use crate::infrastructure::scm::ScmOperations;

/// 単一リポジトリのクローン結果
#[derive(Debug)]
pub enum CloneOutcome {
    /// 新しくクローンした
    Cloned,
    /// クローン先が既に存在したためスキップした
    Skipped,
    /// クローンに失敗した
    Failed(GitkitError),
}

impl CloneOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// ローカルに作業コピーを用意するサービス
///
/// 既存のエントリは更新も上書きもしない。
pub struct CloneExecutor<S: ScmOperations> {
    scm: S,
}

impl<S: ScmOperations> CloneExecutor<S> {
    /// 新しいCloneExecutorインスタンスを作成
    pub fn new(scm: S) -> Self {
        Self { scm }
    }

    /// クローン先 `<destination>/<name>` に何かあるか
    pub fn already_present(target: &Path) -> bool {
        std::fs::symlink_metadata(target).is_ok()
    }

    /// 作業コピーを用意する
    ///
    /// `before_clone` はクローンを開始する直前にだけ呼ばれる。
    /// クローン先ディレクトリの外を指す名前は何もせずに失敗とする。
    pub fn ensure(
        &self,
        repository: &RemoteRepository,
        destination: &Path,
        before_clone: impl FnOnce(&Path),
    ) -> CloneOutcome {
        let target = match repository.destination_in(destination) {
            Ok(target) => target,
            Err(e) => {
                warn!("{}", e);
                return CloneOutcome::Failed(e);
            }
        };

        if Self::already_present(&target) {
            debug!(name = %repository.name, path = %target.display(), "already exists, skipping");
            return CloneOutcome::Skipped;
        }

        before_clone(&target);

        match self.scm.clone_repository(&repository.clone_url, &target) {
            Ok(()) => CloneOutcome::Cloned,
            Err(e) => {
                let failure =
                    GitkitError::clone_error_with_source(e.to_string(), &repository.name, e);
                warn!("{}", failure);
                CloneOutcome::Failed(failure)
            }
        }
    }
}
