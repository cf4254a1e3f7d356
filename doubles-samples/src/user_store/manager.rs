use std::sync::Arc;

use anyhow::Context;
use slog::{Logger, debug};

use doubles_common::StdResult;
use doubles_common::logging::LoggerExtensions;

use super::{User, UserDatabase};

/// Save and load users through a [UserDatabase].
pub struct UserManager {
    database: Arc<dyn UserDatabase>,
    logger: Logger,
}

impl UserManager {
    /// UserManager factory
    pub fn new(database: Arc<dyn UserDatabase>, logger: Logger) -> Self {
        Self {
            database,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Save the user under its name.
    pub fn save(&self, user: &User) -> StdResult<()> {
        debug!(self.logger, "Saving user"; "name" => &user.name, "age" => user.age);
        self.database
            .save_user(&user.name, user)
            .with_context(|| format!("UserManager can not save user '{}'", user.name))
    }

    /// Load the user saved under the given name, `None` if there is none.
    pub fn load(&self, name: &str) -> StdResult<Option<User>> {
        debug!(self.logger, "Loading user"; "name" => name);
        self.database
            .load_user(name)
            .with_context(|| format!("UserManager can not load user '{name}'"))
    }

    /// Check if a user was saved under the given name.
    pub fn exists(&self, name: &str) -> StdResult<bool> {
        Ok(self.load(name)?.is_some())
    }
}
