//! Validation of log file names.
//!
//! The [LogFilenameValidator] checks the name length itself and asks a [FileSystem] for the
//! rest. Tests replace the file system with a stub so the length rule can be checked without
//! touching the disk.

mod file_system;
mod validator;

pub use file_system::{FileSystem, LocalFileSystem};
pub use validator::{DEFAULT_MIN_NAME_LENGTH, LogFilenameValidator};

#[cfg(test)]
pub use file_system::MockFileSystem;
