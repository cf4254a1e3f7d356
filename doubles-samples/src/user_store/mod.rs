//! Persistence of [users][User] behind a [UserDatabase].
//!
//! The [UserManager] only knows the [UserDatabase] interface. The [MemoryUserDatabase] is a
//! fake: a working but lightweight implementation, used when the real database is not ready,
//! too slow or too hard to set up. The [JsonFileUserDatabase] is the real, on-disk, database.

mod database;
mod json_file_database;
mod manager;
mod memory_database;
mod user;

pub use database::{UserDatabase, UserDatabaseError};
pub use json_file_database::JsonFileUserDatabase;
pub use manager::UserManager;
pub use memory_database::MemoryUserDatabase;
pub use user::User;

#[cfg(test)]
pub use database::MockUserDatabase;
