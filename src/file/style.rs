use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Separator convention used when absolutizing and reassembling paths.
///
/// Injected into `FileHelper` instead of being compiled in so both
/// conventions can be exercised on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum PathStyle {
    /// `/` separator; a path is absolute when it starts with `/`.
    Posix,
    /// `\` separator; a path is absolute when its second character is `:`.
    Windows,
}

impl PathStyle {
    /// The style matching the host's main separator.
    pub fn native() -> Self {
        if std::path::MAIN_SEPARATOR == '/' {
            PathStyle::Posix
        } else {
            PathStyle::Windows
        }
    }

    pub fn separator(self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    /// Whether `path` is already absolute under this style.
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            PathStyle::Posix => path.starts_with('/'),
            // Compared bytewise; drive letters are ASCII.
            PathStyle::Windows => path.as_bytes().get(1) == Some(&b':'),
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        PathStyle::native()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::Posix => write!(f, "posix"),
            PathStyle::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(PathStyle::Posix),
            "windows" | "win" => Ok(PathStyle::Windows),
            "native" => Ok(PathStyle::native()),
            other => Err(format!("unknown path style `{}` (expected posix, windows or native)", other)),
        }
    }
}

impl TryFrom<String> for PathStyle {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
