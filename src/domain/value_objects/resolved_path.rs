use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::common::error::GitkitError;
use crate::common::result::GitkitResult;

const HOME_MARKER: char = '~';
const QUOTES: [char; 2] = ['"', '\''];
const SEPARATORS: [char; 2] = ['/', '\\'];

/// 解決済みの絶対パスの値オブジェクト
///
/// `~` をホームディレクトリに展開し、相対パスはカレントディレクトリ基準で絶対化する。
/// 前後の引用符と末尾の区切り文字は取り除かれる。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    path: PathBuf,
}

impl ResolvedPath {
    /// 現在のプロセス環境（ホームディレクトリ、カレントディレクトリ）でパスを解決
    pub fn resolve(raw: &str) -> GitkitResult<Self> {
        let home = dirs::home_dir();
        let cwd = std::env::current_dir().map_err(|e| {
            GitkitError::path_resolution_error_with_source(
                "Cannot determine current directory",
                Some(raw.to_string()),
                e,
            )
        })?;
        Self::resolve_with(raw, home.as_deref(), &cwd)
    }

    /// ホームディレクトリとカレントディレクトリを指定してパスを解決
    pub fn resolve_with(raw: &str, home: Option<&Path>, cwd: &Path) -> GitkitResult<Self> {
        let input = raw.trim_matches(&QUOTES[..]);

        let expanded = match input.strip_prefix(HOME_MARKER) {
            Some(rest) => {
                let home = home.ok_or_else(|| {
                    GitkitError::path_resolution_error(
                        "Cannot determine user home directory",
                        Some(raw.to_string()),
                    )
                })?;
                home.join(rest.trim_start_matches(&SEPARATORS[..]))
            }
            // joining an absolute input replaces cwd entirely
            None => cwd.join(input),
        };

        Ok(Self {
            path: Self::trim_stray_characters(Self::normalize(&expanded)),
        })
    }

    /// ユーザーのホームディレクトリ
    pub fn home_dir() -> GitkitResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            GitkitError::path_resolution_error("Cannot determine user home directory", None)
        })?;
        Ok(Self {
            path: Self::trim_stray_characters(Self::normalize(&home)),
        })
    }

    /// `.` と `..` を字句的に畳み込む（シンボリックリンクは解決しない）
    fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();

        for component in path.components() {
            match component {
                Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
                Component::RootDir => normalized.push(component.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::Normal(part) => normalized.push(part),
            }
        }

        normalized
    }

    fn trim_stray_characters(path: PathBuf) -> PathBuf {
        // filesystem roots keep their separator
        if path.parent().is_none() {
            return path;
        }

        match path.to_str() {
            Some(s) => {
                let trimmed = s
                    .trim_matches(&QUOTES[..])
                    .trim_end_matches(&SEPARATORS[..]);
                if trimmed.is_empty() {
                    path
                } else {
                    PathBuf::from(trimmed)
                }
            }
            None => path,
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
