use config::ConfigBuilder;
use config::builder::DefaultState;
use slog::Logger;

use doubles_common::StdResult;

use crate::Configuration;

/// Context for the command execution
pub struct CommandContext {
    config_builder: ConfigBuilder<DefaultState>,
    logger: Logger,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config_builder: ConfigBuilder<DefaultState>, logger: Logger) -> Self {
        Self {
            config_builder,
            logger,
        }
    }

    /// Build the configuration from all the configured sources
    pub fn configuration(&self) -> StdResult<Configuration> {
        let configuration = self
            .config_builder
            .clone()
            .build()?
            .try_deserialize::<Configuration>()?;

        Ok(configuration)
    }

    /// Get the shared logger
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
