//! Commands of the `doubles` CLI.
//!
//! Each command runs a sample with its real collaborator: the local file system for the log
//! filename validator and the json file database for the user manager.

mod log_filename;
mod user;

pub use log_filename::CheckLogFilenameCommand;
pub use user::{UserCommands, UserExistsCommand, UserLoadCommand, UserSaveCommand};
