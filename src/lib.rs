pub mod config;
pub mod file;
pub mod logging;

pub use crate::file::{FileHelper, FileHelperError, PathStyle, TempDirOverride};
