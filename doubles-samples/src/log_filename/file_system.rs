use std::path::Path;

/// Checks performed by the file system on a file name.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Check if a file with the given name can be used.
    fn is_valid(&self, filename: &str) -> bool;
}

/// A [FileSystem] backed by the local disk.
///
/// A filename is valid when it is not empty, does not point to an existing directory and its
/// parent directory exists (a bare filename is relative to the current directory).
#[derive(Debug, Default, Clone)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn is_valid(&self, filename: &str) -> bool {
        let path = Path::new(filename);
        if filename.is_empty() || path.is_dir() {
            return false;
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
            _ => true,
        }
    }
}
