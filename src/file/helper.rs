use std::path::PathBuf;

use super::error::FileHelperError;
use super::path;
use super::style::PathStyle;
use super::temp::{self, TempDirOverride};

/// Resolves paths against a fixed working directory.
///
/// The working directory is normalized once on construction and never
/// changes afterwards, so a `FileHelper` can be shared freely by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHelper {
    working_directory: String,
    style: PathStyle,
}

impl FileHelper {
    /// Create a helper for `working_directory` using the given separator style.
    pub fn new(working_directory: &str, style: PathStyle) -> Self {
        FileHelper {
            working_directory: path::normalize(working_directory, style),
            style,
        }
    }

    /// Create a helper using the host's separator style.
    pub fn native(working_directory: &str) -> Self {
        Self::new(working_directory, PathStyle::native())
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Return `path` unchanged when absolute, otherwise joined onto the
    /// working directory. The result is not normalized.
    pub fn absolutize_path(&self, path: &str) -> String {
        path::absolutize(path, &self.working_directory, self.style)
    }

    /// Normalize separators and `.`/`..` segments of `original_path`.
    ///
    /// Never fails. A `..` with nothing before it is silently dropped, and
    /// leaving a `*.phar` segment of a `phar://` path drops the scheme.
    pub fn normalize_path(&self, original_path: &str) -> String {
        path::normalize(original_path, self.style)
    }

    /// Resolve the temp directory for a project rooted at `root_dir`.
    ///
    /// - With an override, it must be an existing writable directory and is
    ///   returned verbatim; otherwise [`FileHelperError::InvalidOverrideDir`].
    /// - Without one, `root_dir/tmp` is returned as-is (the caller creates it),
    ///   unless it lives inside a `phar://` archive. In that case a fresh
    ///   `phpstan_*` directory is created under the system temp root.
    pub fn resolve_temp_dir(
        &self,
        root_dir: &str,
        override_dir: Option<&TempDirOverride>,
    ) -> Result<PathBuf, FileHelperError> {
        temp::resolve_temp_dir(root_dir, override_dir)
    }
}
