use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving the temporary directory.
///
/// Both resolution failures are configuration-level: the caller cannot make
/// progress without a usable temp directory, so nothing here is retried.
#[derive(Error, Debug)]
pub enum FileHelperError {
    /// The `PHPSTAN_TEMP_DIR` override does not name a writable directory.
    #[error("Directory {} provided in PHPSTAN_TEMP_DIR is not writable.", path.display())]
    InvalidOverrideDir { path: PathBuf },

    /// The fallback directory under the system temp root could not be
    /// reserved or created.
    #[error("Cannot create a temp directory in system path {}", path.display())]
    TempDirCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
