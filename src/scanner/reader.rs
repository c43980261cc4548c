//! Single-level directory reader built on walkdir.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use super::names::NameCollection;
use super::ListError;

/// Read the visible entry names of `dir`.
///
/// Hidden entries (names starting with `.`, which includes `.` and `..`) are
/// skipped. The returned collection is in enumeration order; call
/// [`NameCollection::sort`] before rendering.
pub fn read_names(dir: &Path) -> Result<NameCollection, ListError> {
    let unavailable = |source: io::Error| ListError::Unavailable {
        path: dir.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(dir).map_err(unavailable)?;
    if !metadata.is_dir() {
        // Let the OS report the reason (ENOTDIR on Unix)
        let source = std::fs::read_dir(dir).err().unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::Other, "not a directory")
        });
        return Err(unavailable(source));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    let mut names = NameCollection::new();
    for entry in walker {
        match entry {
            Ok(entry) => names.push(entry.file_name().to_os_string()),
            // Failing to open the listing directory itself is fatal
            Err(err) if err.depth() == 0 || err.path() == Some(dir) => {
                return Err(unavailable(into_os_error(err)));
            }
            Err(err) => {
                warn!("skipping entry: {}", err);
            }
        }
    }

    debug!(
        "read {} entries from {} (maxlen {})",
        names.len(),
        dir.display(),
        names.maxlen()
    );

    Ok(names)
}

/// Unwrap the OS error from a walk error, dropping walkdir's path prefix.
fn into_os_error(err: walkdir::Error) -> io::Error {
    err.into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "cannot read directory"))
}

/// Hidden-file convention: any name beginning with a dot.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sorted_names(names: &NameCollection) -> Vec<String> {
        let mut out: Vec<String> = names
            .iter()
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(OsStr::new(".")));
        assert!(is_hidden(OsStr::new("..")));
        assert!(is_hidden(OsStr::new(".git")));
        assert!(!is_hidden(OsStr::new("a.b")));
        assert!(!is_hidden(OsStr::new("")));
    }

    #[test]
    fn test_read_nonexistent_path() {
        let result = read_names(Path::new("/nonexistent/path/that/does/not/exist"));
        match result {
            Err(ListError::Unavailable { path, source }) => {
                assert_eq!(path, Path::new("/nonexistent/path/that/does/not/exist"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = read_names(&file_path);
        assert!(matches!(result, Err(ListError::Unavailable { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_file_reports_os_reason() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.txt");
        fs::write(&file_path, "").unwrap();

        match read_names(&file_path) {
            Err(ListError::Unavailable { source, .. }) => {
                assert_eq!(source.raw_os_error(), Some(20)); // ENOTDIR
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_read_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("inside"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = read_names(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        let message = format!("{:#}", anyhow::Error::from(err));
        assert!(message.starts_with("cannot open directory '"));
        assert_eq!(message.matches("Permission denied").count(), 1);
        assert_eq!(message.matches(locked.to_str().unwrap()).count(), 1);
    }

    #[test]
    fn test_read_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let names = read_names(temp_dir.path()).unwrap();
        assert!(names.is_empty());
        assert_eq!(names.maxlen(), 0);
    }

    #[test]
    fn test_read_skips_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("apple"), "").unwrap();
        fs::write(temp_dir.path().join("banana"), "").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "").unwrap();
        fs::write(temp_dir.path().join("Zebra"), "").unwrap();
        fs::create_dir(temp_dir.path().join(".config")).unwrap();

        let names = read_names(temp_dir.path()).unwrap();
        assert_eq!(sorted_names(&names), vec!["Zebra", "apple", "banana"]);
        assert_eq!(names.maxlen(), 6);
    }

    #[test]
    fn test_read_does_not_descend() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();
        fs::write(temp_dir.path().join("subdir/nested.txt"), "nested").unwrap();
        fs::write(temp_dir.path().join("top.txt"), "top").unwrap();

        let names = read_names(temp_dir.path()).unwrap();
        assert_eq!(sorted_names(&names), vec!["subdir", "top.txt"]);
    }

    #[test]
    fn test_read_only_hidden_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".a"), "").unwrap();
        fs::write(temp_dir.path().join(".b"), "").unwrap();

        let names = read_names(temp_dir.path()).unwrap();
        assert!(names.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_lists_symlink_without_following() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("target")).unwrap();
        fs::write(temp_dir.path().join("target/inner"), "").unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("target"),
            temp_dir.path().join("link"),
        )
        .unwrap();

        let names = read_names(temp_dir.path()).unwrap();
        assert_eq!(sorted_names(&names), vec!["link", "target"]);
    }
}
