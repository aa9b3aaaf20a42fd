use tracing::{debug, warn};

use crate::common::error::GitkitError;
use crate::domain::entities::repository::{RepositoryLocation, RepositoryStatus};
use crate::infrastructure::scm::ScmOperations;

/// 未コミット変更の有無を判定するサービス
///
/// ステータス取得に失敗したリポジトリはクリーン扱いせず `Unknown` として返す。
pub struct StatusClassifier<S: ScmOperations> {
    scm: S,
}

impl<S: ScmOperations> StatusClassifier<S> {
    /// 新しいStatusClassifierインスタンスを作成
    pub fn new(scm: S) -> Self {
        Self { scm }
    }

    /// 単一リポジトリの状態を判定
    pub fn classify(&self, location: &RepositoryLocation) -> RepositoryStatus {
        match self.scm.status_porcelain(location.path()) {
            Ok(output) => {
                let status = RepositoryStatus::from_porcelain(&output);
                debug!(path = %location, ?status, "classified repository");
                status
            }
            Err(e) => {
                let error =
                    GitkitError::status_query_error_with_source(e.to_string(), location.path(), e);
                warn!("{}", error);
                RepositoryStatus::unknown(error.to_string())
            }
        }
    }
}
