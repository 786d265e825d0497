//! Recursive copy, removal and sizing of files and directories.
//!

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// Copy a file or directory tree from `source` to `destination`, creating parent directories.
///
/// Symbolic links are never followed or copied. Returns the links that were skipped.
pub fn copy_tree(source: &Path, destination: &Path) -> io::Result<Vec<PathBuf>> {
    let mut skipped_links = Vec::new();

    for entry in walk(source) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(io::Error::other)?;
        let target = if relative.as_os_str().is_empty() {
            destination.to_path_buf()
        } else {
            destination.join(relative)
        };

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            skipped_links.push(entry.into_path());
        } else if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(skipped_links)
}

/// Remove a file or directory tree. Does nothing if `path` does not exist.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(error) => return Err(error),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// The total size in bytes of every regular file under `path`, links are not followed.
pub fn tree_size(path: &Path) -> io::Result<u64> {
    let mut size = 0;

    for entry in walk(path) {
        let entry = entry?;
        if entry.file_type().is_file() {
            size += entry.metadata()?.len();
        }
    }

    Ok(size)
}

fn walk(root: &Path) -> WalkDir {
    WalkDir::new(root).follow_links(false).follow_root_links(false)
}

#[cfg(test)]
mod tests {
    use shared::test::TestDirectory;

    use super::*;

    #[test]
    fn copy_and_size_nested_tree() {
        let directory = TestDirectory::new("copy_and_size_nested_tree");
        directory.write("from/a.txt", "aaaa");
        directory.write("from/nested/b.txt", "bb");

        let from = directory.path().join("from");
        let to = directory.path().join("to/deeper");
        let skipped = copy_tree(&from, &to).unwrap();

        assert!(skipped.is_empty());
        assert_eq!(directory.read("to/deeper/a.txt"), "aaaa");
        assert_eq!(directory.read("to/deeper/nested/b.txt"), "bb");
        assert_eq!(tree_size(&to).unwrap(), 6);
    }

    #[test]
    fn remove_missing_is_ok() {
        let directory = TestDirectory::new("remove_missing_is_ok");
        remove_tree(&directory.path().join("missing")).unwrap();
    }

    #[test]
    fn remove_file_and_directory() {
        let directory = TestDirectory::new("remove_file_and_directory");
        directory.write("file.txt", "contents");
        directory.write("tree/inner/file.txt", "contents");

        remove_tree(&directory.path().join("file.txt")).unwrap();
        remove_tree(&directory.path().join("tree")).unwrap();

        assert!(!directory.path().join("file.txt").exists());
        assert!(!directory.path().join("tree").exists());
    }

    #[test]
    fn copy_single_file() {
        let directory = TestDirectory::new("copy_single_file");
        directory.write("index.html", "<html></html>");

        let from = directory.path().join("index.html");
        let to = directory.path().join("copy/index.html");
        copy_tree(&from, &to).unwrap();

        assert_eq!(directory.read("copy/index.html"), "<html></html>");
        assert_eq!(tree_size(&to).unwrap(), 13);
    }

    #[cfg(unix)]
    #[test]
    fn links_are_skipped_not_followed() {
        let directory = TestDirectory::new("links_are_skipped_not_followed");
        directory.write("from/a.txt", "aaaa");
        directory.write("outside/big.txt", "outside the tree");

        let from = directory.path().join("from");
        std::os::unix::fs::symlink("..", from.join("up")).unwrap();
        let outside = directory.path().join("outside/big.txt");
        std::os::unix::fs::symlink(outside, from.join("big.txt")).unwrap();

        let to = directory.path().join("to");
        let mut skipped = copy_tree(&from, &to).unwrap();
        skipped.sort();

        assert_eq!(skipped, vec![from.join("big.txt"), from.join("up")]);
        assert_eq!(directory.read("to/a.txt"), "aaaa");
        assert!(fs::symlink_metadata(to.join("up")).is_err());
        assert!(fs::symlink_metadata(to.join("big.txt")).is_err());
        assert_eq!(tree_size(&from).unwrap(), 4);
    }
}
