#![warn(missing_docs)]
//! Samples of unit tests relying on test doubles.
//!
//! Each module is a small piece of production code depending on an abstract collaborator, tested
//! with a test double standing in for that collaborator:
//! - [log_filename]: a validator delegating part of its work to a
//!   [FileSystem][log_filename::FileSystem], replaced by a stub in tests.
//! - [user_store]: a façade over a [UserDatabase][user_store::UserDatabase], tested with an
//!   in-memory fake while the real, on-disk, database is also available.
//! - [behavior]: routines whose only observable effect is the calls they make, verified with
//!   mocks (call counts, argument matchers and call ordering).

pub mod behavior;
mod command_context;
pub mod commands;
mod configuration;
pub mod log_filename;
pub mod user_store;

pub use command_context::CommandContext;
pub use configuration::{Configuration, DefaultConfiguration};
