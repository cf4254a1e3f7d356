use std::sync::Arc;

use clap::Parser;

use doubles_common::StdResult;

use crate::CommandContext;
use crate::log_filename::{LocalFileSystem, LogFilenameValidator};

/// Check-log-filename command
#[derive(Parser, Debug, Clone)]
pub struct CheckLogFilenameCommand {
    /// Filename to check
    filename: String,
}

impl CheckLogFilenameCommand {
    /// Main command execution, return whether the filename is valid
    pub fn execute(&self, context: &CommandContext) -> StdResult<bool> {
        let configuration = context.configuration()?;
        let validator =
            LogFilenameValidator::new(Arc::new(LocalFileSystem), context.logger().clone())
                .with_min_name_length(configuration.min_log_name_length);

        let is_valid = validator.is_valid_log_filename(&self.filename);
        println!("{}", if is_valid { "valid" } else { "invalid" });

        Ok(is_valid)
    }
}

#[cfg(test)]
mod tests {
    use doubles_common::test::TempDir;

    use crate::DefaultConfiguration;
    use crate::test_tools::logger_for_tests;

    use super::*;

    fn context_with_min_length(min_log_name_length: i64) -> CommandContext {
        let config_builder = config::Config::builder()
            .add_source(DefaultConfiguration::default())
            .set_override("min_log_name_length", min_log_name_length)
            .unwrap();

        CommandContext::new(config_builder, logger_for_tests())
    }

    #[test]
    fn long_filename_in_an_existing_directory_is_valid() {
        let dir = TempDir::create("check_log_filename_command", "long_filename");
        let command = CheckLogFilenameCommand {
            filename: dir.join("valid_file_name.log").to_string_lossy().to_string(),
        };

        assert!(command.execute(&context_with_min_length(5)).unwrap());
    }

    #[test]
    fn short_filename_is_invalid() {
        let command = CheckLogFilenameCommand {
            filename: "bad.log".to_string(),
        };

        assert!(!command.execute(&context_with_min_length(5)).unwrap());
    }

    #[test]
    fn configured_minimum_length_is_used() {
        let command = CheckLogFilenameCommand {
            filename: "bad.log".to_string(),
        };

        assert!(command.execute(&context_with_min_length(3)).unwrap());
    }
}
