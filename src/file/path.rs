//! String-level path manipulation.
//!
//! Paths are handled as `&str` rather than `Path` because they may carry a
//! stream-wrapper scheme (`phar://...`) that `std::path` knows nothing about.

use once_cell::sync::Lazy;
use regex::Regex;

use super::style::PathStyle;

/// Scheme used for paths that point inside a phar archive.
pub const PHAR_SCHEME: &str = "phar";

static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^([a-z]+)://(.+)").expect("scheme regex is valid"));

static SLASH_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/{2,}").expect("slash regex is valid"));

/// Split `path` into an optional lowercase scheme and the remaining body.
///
/// `phar:///a/b` yields `(Some("phar"), "/a/b")`. Inputs with an empty body
/// (`phar://`) or an uppercase scheme are not considered scheme-prefixed.
pub fn split_scheme(path: &str) -> (Option<&str>, &str) {
    match SCHEME_RE.captures(path) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(scheme), Some(body)) => (Some(scheme.as_str()), body.as_str()),
            _ => (None, path),
        },
        None => (None, path),
    }
}

/// Normalize `original` under `style`.
///
/// Backslashes become slashes, slash runs collapse, `.` segments vanish and
/// `..` pops the previous segment. Walking `..` out of a `*.phar` segment of
/// a `phar://` path drops the scheme. An unmatched `..` is discarded.
pub fn normalize(original: &str, style: PathStyle) -> String {
    let (mut scheme, body) = split_scheme(original);

    let body = body.replace('\\', "/");
    let body = SLASH_RUN_RE.replace_all(&body, "/");

    let is_absolute = body.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in body.trim_matches('/').split('/') {
        match part {
            "." => {}
            ".." => {
                if let Some(removed) = parts.pop() {
                    if scheme == Some(PHAR_SCHEME) && removed.ends_with(".phar") {
                        scheme = None;
                    }
                }
            }
            _ => parts.push(part),
        }
    }

    let sep = style.separator();
    let mut buf = [0u8; 4];
    let sep_str: &str = sep.encode_utf8(&mut buf);
    let mut out = String::with_capacity(original.len() + 8);
    if let Some(s) = scheme {
        out.push_str(s);
        out.push_str("://");
    }
    if is_absolute {
        out.push(sep);
    }
    out.push_str(&parts.join(sep_str));
    out
}

/// Resolve `path` against `working_directory` unless it is already absolute.
///
/// The join trims separators at the boundary but otherwise leaves both sides
/// untouched; run the result through [`normalize`] when needed.
pub fn absolutize(path: &str, working_directory: &str, style: PathStyle) -> String {
    if style.is_absolute(path) {
        return path.to_string();
    }

    let is_sep = |c: char| c == '/' || c == '\\';
    let base = working_directory.trim_end_matches(is_sep);
    let rest = path.trim_start_matches(is_sep);

    let mut out = String::with_capacity(base.len() + rest.len() + 1);
    out.push_str(base);
    out.push(style.separator());
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSIX: PathStyle = PathStyle::Posix;
    const WIN: PathStyle = PathStyle::Windows;

    #[test]
    fn splits_scheme_prefix() {
        assert_eq!(split_scheme("phar:///a/b.phar/c"), (Some("phar"), "/a/b.phar/c"));
        assert_eq!(split_scheme("file://x"), (Some("file"), "x"));
        assert_eq!(split_scheme("/plain/path"), (None, "/plain/path"));
        assert_eq!(split_scheme("Phar://x"), (None, "Phar://x"));
        assert_eq!(split_scheme("phar://"), (None, "phar://"));
        assert_eq!(split_scheme("C://x"), (None, "C://x"));
    }

    #[test]
    fn scheme_body_spans_newlines() {
        assert_eq!(split_scheme("phar://a\nb/c"), (Some("phar"), "a\nb/c"));
        assert_eq!(normalize("phar://x.phar/a\nb/..", POSIX), "phar://x.phar");
    }

    #[test]
    fn collapses_dots_and_slashes() {
        assert_eq!(normalize("a/./b//c/../d", POSIX), "a/b/d");
        assert_eq!(normalize("/a/./b/", POSIX), "/a/b");
        assert_eq!(normalize("//a///b", POSIX), "/a/b");
    }

    #[test]
    fn backslashes_are_separators() {
        assert_eq!(normalize("C:\\foo\\..\\bar", POSIX), "C:/bar");
        assert_eq!(normalize("C:\\foo\\..\\bar", WIN), "C:\\bar");
        assert_eq!(normalize("/a/b", WIN), "\\a\\b");
    }

    #[test]
    fn unmatched_parent_is_dropped() {
        assert_eq!(normalize("../a", POSIX), "a");
        assert_eq!(normalize("/../../a", POSIX), "/a");
        assert_eq!(normalize("..", POSIX), "");
    }

    #[test]
    fn root_and_empty_inputs() {
        assert_eq!(normalize("/", POSIX), "/");
        assert_eq!(normalize("", POSIX), "");
        assert_eq!(normalize(".", POSIX), "");
    }

    #[test]
    fn leaving_phar_archive_drops_scheme() {
        assert_eq!(normalize("phar://archive.phar/a/../../b", POSIX), "b");
        assert_eq!(
            normalize("phar:///opt/tool.phar/src/../../vendor", POSIX),
            "/opt/vendor"
        );
    }

    #[test]
    fn staying_inside_phar_keeps_scheme() {
        assert_eq!(
            normalize("phar:///opt/tool.phar/src/../conf", POSIX),
            "phar:///opt/tool.phar/conf"
        );
        // Only `phar` is archive-aware.
        assert_eq!(normalize("zip://x.phar/..", POSIX), "zip://");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "a/./b//c/../d",
            "phar://archive.phar/a/../../b",
            "phar:///opt/tool.phar/src/./x",
            "C:\\Windows\\..\\System32\\\\drivers",
            "../../x/y/..",
            "///",
            "",
            "file://host//share/./x",
        ];
        for style in [POSIX, WIN] {
            for s in samples {
                let once = normalize(s, style);
                assert_eq!(normalize(&once, style), once, "input {:?} style {}", s, style);
            }
        }
    }

    #[test]
    fn clean_paths_are_unchanged() {
        for s in ["/usr/local/lib", "src/File/Helper.php", "phar:///a.phar/b"] {
            assert_eq!(normalize(s, POSIX), s);
        }
    }

    #[test]
    fn absolutize_keeps_absolute_paths() {
        assert_eq!(absolutize("/etc/hosts", "/work", POSIX), "/etc/hosts");
        assert_eq!(absolutize("C:\\x", "D:\\work", WIN), "C:\\x");
    }

    #[test]
    fn absolutize_joins_relative_paths() {
        assert_eq!(absolutize("src/a.php", "/work", POSIX), "/work/src/a.php");
        assert_eq!(absolutize("\\src", "/work//", POSIX), "/work/src");
        assert_eq!(absolutize("src\\a.php", "D:\\work\\", WIN), "D:\\work\\src\\a.php");
        // Windows rules do not treat a leading slash as absolute.
        assert_eq!(absolutize("/src", "D:\\work", WIN), "D:\\work\\src");
    }

    #[test]
    fn absolutize_does_not_normalize() {
        assert_eq!(absolutize("./a/../b", "/work", POSIX), "/work/./a/../b");
    }
}
