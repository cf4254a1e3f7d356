use std::sync::Arc;

use slog::{Logger, debug};

use doubles_common::logging::LoggerExtensions;

use super::FileSystem;

/// Minimum number of characters of a log filename, extension excluded.
pub const DEFAULT_MIN_NAME_LENGTH: usize = 5;

/// Validate log filenames.
///
/// A log filename is valid if its base name (the filename without its extension) is long
/// enough and the [FileSystem] accepts it.
pub struct LogFilenameValidator {
    file_system: Arc<dyn FileSystem>,
    min_name_length: usize,
    logger: Logger,
}

impl LogFilenameValidator {
    /// Create a new validator requiring [DEFAULT_MIN_NAME_LENGTH] characters.
    pub fn new(file_system: Arc<dyn FileSystem>, logger: Logger) -> Self {
        Self {
            file_system,
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Change the minimum number of characters of the base name.
    pub fn with_min_name_length(mut self, min_name_length: usize) -> Self {
        self.min_name_length = min_name_length;
        self
    }

    /// The filename without its extension, ie: the text before its last `.`.
    ///
    /// A filename without any `.` has no extension: it is its own base name. Path separators are
    /// not interpreted, a dot in a directory name counts like any other.
    pub fn base_name(filename: &str) -> &str {
        filename
            .rfind('.')
            .map_or(filename, |dot_index| &filename[..dot_index])
    }

    /// Check if the given filename can be used as a log file.
    ///
    /// The file system is not consulted when the base name is too short.
    pub fn is_valid_log_filename(&self, filename: &str) -> bool {
        let name_length = Self::base_name(filename).chars().count();
        if name_length < self.min_name_length {
            debug!(
                self.logger, "Log filename rejected: base name too short";
                "filename" => filename,
                "length" => name_length,
                "min_length" => self.min_name_length
            );
            return false;
        }

        let is_valid = self.file_system.is_valid(filename);
        debug!(
            self.logger, "Log filename checked by the file system";
            "filename" => filename, "is_valid" => is_valid
        );

        is_valid
    }
}
