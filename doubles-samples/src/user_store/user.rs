use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A user, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Name of the user, used as its key in a [UserDatabase][crate::user_store::UserDatabase]
    pub name: String,

    /// Age of the user
    pub age: i32,
}

impl User {
    /// User factory
    pub fn new<T: Into<String>>(name: T, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "User{{name={}, age={}}}", self.name, self.age)
    }
}
