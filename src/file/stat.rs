use std::path::Path;

/// Lightweight classification of what currently occupies a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing exists at the path.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// Something else (socket, FIFO, dangling symlink, ...).
    Other,
}

impl PathType {
    /// Classify `path` and return its `PathType`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        if !p.exists() {
            PathType::NotFound
        } else if p.is_dir() {
            PathType::Directory
        } else if p.is_file() {
            PathType::File
        } else {
            PathType::Other
        }
    }
}

/// Return `true` if the provided `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}

/// Return `true` when `path` is a directory the current process may write to.
///
/// On Unix this asks the kernel via `access(2)` so ACLs and the effective
/// uid are honoured; elsewhere it falls back to the read-only permission bit.
pub fn is_writable_dir<P: AsRef<Path>>(path: P) -> bool {
    let p = path.as_ref();
    if !is_dir(p) {
        return false;
    }
    writable(p)
}

#[cfg(unix)]
fn writable(p: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};
    access(p, AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
fn writable(p: &Path) -> bool {
    std::fs::metadata(p)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn path_type_nonexistent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_entry");
        assert_eq!(PathType::of(&p), PathType::NotFound);
        assert!(!is_file(&p));
        assert!(!is_dir(&p));
        assert!(!is_writable_dir(&p));
    }

    #[test]
    fn path_type_file_and_dir() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert_eq!(PathType::of(&file), PathType::File);
        assert!(is_file(&file));
        assert!(!is_writable_dir(&file));

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        assert_eq!(PathType::of(&dir), PathType::Directory);
        assert!(is_dir(&dir));
        assert!(is_writable_dir(&dir));
    }
}
