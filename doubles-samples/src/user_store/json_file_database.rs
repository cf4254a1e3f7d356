use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use doubles_common::StdResult;

use super::{User, UserDatabase, UserDatabaseError};

/// Content of a user file: the name is kept alongside the user to detect hash collisions.
#[derive(Debug, Serialize, Deserialize)]
struct UserFile {
    name: String,
    user: User,
}

/// A [UserDatabase] storing each user on disk in its own json file.
#[derive(Debug)]
pub struct JsonFileUserDatabase {
    dirpath: PathBuf,
}

impl JsonFileUserDatabase {
    /// JsonFileUserDatabase factory, the directory is created if it does not exist.
    pub fn new(dirpath: PathBuf) -> Result<Self, UserDatabaseError> {
        if !dirpath.exists() {
            fs::create_dir_all(&dirpath)
                .map_err(|e| UserDatabaseError::InitializationError(e.into()))?;
        }

        Ok(Self { dirpath })
    }

    /// Directory where the users files are written.
    pub fn dirpath(&self) -> &Path {
        &self.dirpath
    }

    /// Users files are named after the sha256 of the user name, so they stay readable whatever
    /// the toolchain that wrote them.
    fn get_filename_from_name(&self, name: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(name.as_bytes());
        let checksum = hex::encode(hasher.finalize());

        self.dirpath.join(format!("{checksum}.json"))
    }
}

impl UserDatabase for JsonFileUserDatabase {
    fn save_user(&self, name: &str, user: &User) -> StdResult<()> {
        let content = serde_json::to_string(&UserFile {
            name: name.to_string(),
            user: user.clone(),
        })
        .map_err(|e| UserDatabaseError::WriteError {
            name: name.to_string(),
            source: e.into(),
        })?;

        fs::write(self.get_filename_from_name(name), content).map_err(|e| {
            UserDatabaseError::WriteError {
                name: name.to_string(),
                source: e.into(),
            }
        })?;

        Ok(())
    }

    fn load_user(&self, name: &str) -> StdResult<Option<User>> {
        let filepath = self.get_filename_from_name(name);
        if !filepath.exists() {
            return Ok(None);
        }

        let read_error = |source: anyhow::Error| UserDatabaseError::ReadError {
            name: name.to_string(),
            source,
        };
        let content = fs::read_to_string(&filepath).map_err(|e| read_error(e.into()))?;
        let user_file: UserFile =
            serde_json::from_str(&content).map_err(|e| read_error(e.into()))?;

        // Another name with the same hash
        if user_file.name != name {
            return Ok(None);
        }

        Ok(Some(user_file.user))
    }
}
