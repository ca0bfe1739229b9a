use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::{debug, warn};

use super::error::FileHelperError;
use super::path::{split_scheme, PHAR_SCHEME};
use super::stat;

/// Environment variable that overrides temp-directory resolution.
pub const TEMP_DIR_ENV: &str = "PHPSTAN_TEMP_DIR";

/// Prefix for directories created under the system temp root.
const SYSTEM_TEMP_PREFIX: &str = "phpstan_";

/// Attempts at reserving a unique name before giving up.
const RESERVE_ATTEMPTS: usize = 16;

/// An explicitly supplied temp-directory override.
///
/// Resolution never reads the process environment itself; callers build one
/// of these (usually via [`TempDirOverride::from_env`]) and pass it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempDirOverride(PathBuf);

impl TempDirOverride {
    /// Wrap `value`, treating an empty value as no override.
    pub fn new(value: impl Into<OsString>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(TempDirOverride(PathBuf::from(value)))
        }
    }

    /// Read [`TEMP_DIR_ENV`] from the process environment.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(TEMP_DIR_ENV).and_then(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Resolve the temp directory for a project rooted at `root_dir`.
///
/// See [`crate::file::FileHelper::resolve_temp_dir`] for the full contract.
pub fn resolve_temp_dir(
    root_dir: &str,
    override_dir: Option<&TempDirOverride>,
) -> Result<PathBuf, FileHelperError> {
    if let Some(dir) = override_dir {
        let path = dir.path();
        if !stat::is_writable_dir(path) {
            warn!("{} points at {}, which is not a writable directory", TEMP_DIR_ENV, path.display());
            return Err(FileHelperError::InvalidOverrideDir {
                path: path.to_path_buf(),
            });
        }
        debug!("using temp dir override {}", path.display());
        return Ok(path.to_path_buf());
    }

    let candidate = format!("{}/tmp", root_dir);
    let (scheme, _) = split_scheme(&candidate);
    if scheme != Some(PHAR_SCHEME) {
        return Ok(PathBuf::from(candidate));
    }

    debug!("root dir {} is inside a phar archive, falling back to system temp", root_dir);
    create_system_temp_dir(&std::env::temp_dir())
}

/// Create a fresh, uniquely named directory under `parent`.
///
/// The name is first reserved as an empty file (so two callers cannot pick
/// the same one), the file is removed and a directory takes its place.
pub fn create_system_temp_dir(parent: &Path) -> Result<PathBuf, FileHelperError> {
    let path = reserve_unique_name(parent)?;

    if stat::is_file(&path) {
        if let Err(source) = fs::remove_file(&path) {
            return Err(FileHelperError::TempDirCreationFailed { path, source });
        }
    }

    match fs::create_dir(&path) {
        Ok(()) => {
            debug!("created temp dir {}", path.display());
            Ok(path)
        }
        Err(_) if stat::is_dir(&path) => Ok(path),
        Err(source) => Err(FileHelperError::TempDirCreationFailed { path, source }),
    }
}

fn reserve_unique_name(parent: &Path) -> Result<PathBuf, FileHelperError> {
    let mut candidate = parent.join(format!("{}XXXXXX", SYSTEM_TEMP_PREFIX));
    let mut last_err = None;
    for _ in 0..RESERVE_ATTEMPTS {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(char::from)
            .collect();
        candidate = parent.join(format!("{}{}", SYSTEM_TEMP_PREFIX, suffix));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(_) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => last_err = Some(e),
            Err(source) => {
                return Err(FileHelperError::TempDirCreationFailed {
                    path: candidate,
                    source,
                })
            }
        }
    }
    Err(FileHelperError::TempDirCreationFailed {
        path: candidate,
        source: last_err.unwrap_or_else(|| io::Error::other("could not reserve a unique temp name")),
    })
}
