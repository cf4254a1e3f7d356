use thiserror::Error;

use doubles_common::{StdError, StdResult};

use super::User;

/// Store [users][User] by name.
#[cfg_attr(test, mockall::automock)]
pub trait UserDatabase: Send + Sync {
    /// Save the user under the given name, replacing any user previously saved under it.
    fn save_user(&self, name: &str, user: &User) -> StdResult<()>;

    /// Load the user last saved under the given name, `None` if no user was saved under it.
    fn load_user(&self, name: &str) -> StdResult<Option<User>>;
}

/// [UserDatabase] related errors.
#[derive(Error, Debug)]
pub enum UserDatabaseError {
    /// The same name is used twice in the initial data.
    #[error("duplicate user name found: '{0}'")]
    DuplicateKey(String),

    /// The database could not be created.
    #[error("could not initialize the user database")]
    InitializationError(#[source] StdError),

    /// A user could not be read.
    #[error("could not read user '{name}'")]
    ReadError {
        /// Name of the user
        name: String,
        /// Error cause
        #[source]
        source: StdError,
    },

    /// A user could not be written.
    #[error("could not write user '{name}'")]
    WriteError {
        /// Name of the user
        name: String,
        /// Error cause
        #[source]
        source: StdError,
    },
}
