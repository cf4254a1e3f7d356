use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use anyhow::anyhow;

use doubles_common::StdResult;

use super::{User, UserDatabase, UserDatabaseError};

/// A [UserDatabase] keeping its users in memory.
///
/// Users live as long as the database instance: nothing is evicted, nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryUserDatabase {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserDatabase {
    /// MemoryUserDatabase factory
    pub fn new(data: Option<Vec<(String, User)>>) -> Result<Self, UserDatabaseError> {
        let data = data.unwrap_or_default();
        let mut users = HashMap::new();

        for (name, user) in data {
            if users.contains_key(&name) {
                return Err(UserDatabaseError::DuplicateKey(name));
            }
            users.insert(name, user);
        }

        Ok(Self {
            users: RwLock::new(users),
        })
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if no user is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserDatabase for MemoryUserDatabase {
    fn save_user(&self, name: &str, user: &User) -> StdResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|e| anyhow!("user database lock is poisoned: {e}"))?;
        users.insert(name.to_string(), user.clone());

        Ok(())
    }

    fn load_user(&self, name: &str) -> StdResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|e| anyhow!("user database lock is poisoned: {e}"))?;

        Ok(users.get(name).cloned())
    }
}
