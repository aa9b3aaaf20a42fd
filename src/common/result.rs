use crate::common::error::GitkitError;

/// gitkit全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use gitkit::common::result::GitkitResult;
/// use gitkit::common::error::GitkitError;
///
/// fn example_function() -> GitkitResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> GitkitResult<()> {
///     Err(GitkitError::validation_error("username", "must not be empty"))
/// }
/// ```
pub type GitkitResult<T> = Result<T, GitkitError>;

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T, E> {
    /// ファイルシステムエラーとしてGitkitResultに変換
    ///
    /// # Examples
    ///
    /// ```
    /// use gitkit::common::result::{GitkitResult, ResultExt};
    /// use std::path::PathBuf;
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::PermissionDenied, "denied"
    /// ));
    /// let converted: GitkitResult<()> =
    ///     result.with_filesystem_error("Cannot create directory", Some(PathBuf::from("/srv")));
    /// assert!(converted.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> GitkitResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> GitkitResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| GitkitError::filesystem_error_with_source(message, path, e.into()))
    }
}
