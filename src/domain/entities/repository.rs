use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::common::error::GitkitError;
use crate::common::result::GitkitResult;

/// リポジトリのルートを示すメタデータエントリ名
pub const GIT_MARKER: &str = ".git";

/// スキャン中に発見されたリポジトリのルートディレクトリ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryLocation {
    /// リポジトリのルートパス
    path: PathBuf,
}

impl RepositoryLocation {
    /// 新しいRepositoryLocationインスタンスを作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ディレクトリ直下に`.git`エントリ（ディレクトリまたはworktreeのポインタファイル）があれば
    /// リポジトリとして扱う
    pub fn detect(dir: &Path) -> Option<Self> {
        std::fs::symlink_metadata(dir.join(GIT_MARKER))
            .ok()
            .map(|_| Self::new(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ名
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for RepositoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for RepositoryLocation {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// リポジトリの未コミット変更の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryStatus {
    /// クリーン（変更なし）
    Clean,
    /// ダーティ（未コミットの変更あり）
    Dirty,
    /// ステータスを取得できなかった
    Unknown { reason: String },
}

impl RepositoryStatus {
    /// `git status --porcelain` の出力から状態を判定
    ///
    /// 前後の空白を除いて空ならクリーン、それ以外はダーティ。
    pub fn from_porcelain(output: &str) -> Self {
        if output.trim().is_empty() {
            Self::Clean
        } else {
            Self::Dirty
        }
    }

    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::Unknown {
            reason: reason.into(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty)
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// ホスティングサービスが返すリモートリポジトリの記述子
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    /// リポジトリ名（クローン先のディレクトリ名にもなる）
    pub name: String,
    /// クローンURL
    pub clone_url: String,
}

impl RemoteRepository {
    /// 新しいRemoteRepositoryインスタンスを作成
    pub fn new(name: impl Into<String>, clone_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clone_url: clone_url.into(),
        }
    }

    /// `<destination>/<name>`
    ///
    /// `base` の外を指しうる名前（区切り文字を含む、空、`.`、`..`）は `CloneError` になる。
    pub fn destination_in(&self, base: &Path) -> GitkitResult<PathBuf> {
        let name = self.name.as_str();
        let escapes = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(|c: char| c == '/' || c == '\\');
        if escapes {
            return Err(GitkitError::clone_error(
                format!("repository name {:?} is not a plain directory name", name),
                name,
            ));
        }
        Ok(base.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_detect_git_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join(".git")).unwrap();

        let location = RepositoryLocation::detect(temp_dir.path());
        assert_eq!(location, Some(RepositoryLocation::new(temp_dir.path())));
    }

    #[test]
    fn test_detect_worktree_pointer_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(".git"),
            "gitdir: /elsewhere/.git/worktrees/feature\n",
        )
        .unwrap();

        assert!(RepositoryLocation::detect(temp_dir.path()).is_some());
    }

    #[test]
    fn test_detect_plain_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("src")).unwrap();

        assert!(RepositoryLocation::detect(temp_dir.path()).is_none());
    }

    #[test]
    fn test_location_name_and_display() {
        let location = RepositoryLocation::new("/home/dev/projects/gitkit");
        assert_eq!(location.name(), "gitkit");
        assert_eq!(location.to_string(), "/home/dev/projects/gitkit");
    }

    #[test]
    fn test_status_from_porcelain() {
        assert_eq!(RepositoryStatus::from_porcelain(""), RepositoryStatus::Clean);
        assert_eq!(
            RepositoryStatus::from_porcelain("  \n\t\n"),
            RepositoryStatus::Clean
        );
        assert_eq!(
            RepositoryStatus::from_porcelain(" M src/lib.rs\n"),
            RepositoryStatus::Dirty
        );
        assert_eq!(
            RepositoryStatus::from_porcelain("?? notes.txt"),
            RepositoryStatus::Dirty
        );
    }

    #[test]
    fn test_unknown_is_neither_clean_nor_dirty() {
        let status = RepositoryStatus::unknown("not a git repository");
        assert!(!status.is_clean());
        assert!(!status.is_dirty());
    }

    #[test]
    fn test_remote_repository_deserialize_ignores_extra_fields() {
        let json = r#"[
            {"id": 1, "name": "x", "clone_url": "https://github.com/octo/x.git", "fork": false},
            {"id": 2, "name": "y", "clone_url": "https://github.com/octo/y.git"}
        ]"#;
        let repos: Vec<RemoteRepository> = serde_json::from_str(json).unwrap();
        assert_eq!(
            repos,
            vec![
                RemoteRepository::new("x", "https://github.com/octo/x.git"),
                RemoteRepository::new("y", "https://github.com/octo/y.git"),
            ]
        );
    }

    #[test]
    fn test_destination_in() {
        let repo = RemoteRepository::new("dotfiles", "https://github.com/octo/dotfiles.git");
        assert_eq!(
            repo.destination_in(Path::new("/srv/mirror")).unwrap(),
            PathBuf::from("/srv/mirror/dotfiles")
        );
    }

    #[test]
    fn test_destination_in_rejects_names_leaving_the_destination() {
        for name in ["../x", "/abs", "a/b", "a\\b", "..", ".", ""] {
            let repo = RemoteRepository::new(name, "https://evil.example/x.git");
            match repo.destination_in(Path::new("/srv/mirror")) {
                Err(GitkitError::CloneError { repository, .. }) => assert_eq!(repository, name),
                other => panic!("Expected CloneError for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_destination_in_allows_dotted_names() {
        let repo = RemoteRepository::new(".github", "https://github.com/octo/.github.git");
        assert_eq!(
            repo.destination_in(Path::new("/srv/mirror")).unwrap(),
            PathBuf::from("/srv/mirror/.github")
        );
    }
}
