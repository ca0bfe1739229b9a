//! Path normalization and temp-directory resolution.

pub mod error;
pub mod helper;
pub mod path;
pub mod stat;
pub mod style;
pub mod temp;

pub use error::FileHelperError;
pub use helper::FileHelper;
pub use style::PathStyle;
pub use temp::{TempDirOverride, TEMP_DIR_ENV};
