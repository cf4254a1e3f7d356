use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use doubles_common::StdResult;

use crate::CommandContext;
use crate::user_store::{JsonFileUserDatabase, User, UserManager};

/// User commands
#[derive(Subcommand, Debug, Clone)]
pub enum UserCommands {
    /// Save a user, replacing any user with the same name
    #[clap(arg_required_else_help = true)]
    Save(UserSaveCommand),

    /// Show a saved user
    #[clap(arg_required_else_help = true)]
    Load(UserLoadCommand),

    /// Check if a user was saved
    #[clap(arg_required_else_help = true)]
    Exists(UserExistsCommand),
}

impl UserCommands {
    /// Execute the user command, return whether it succeeded
    pub fn execute(&self, context: &CommandContext) -> StdResult<bool> {
        let manager = build_user_manager(context)?;

        match self {
            Self::Save(cmd) => cmd.execute(&manager),
            Self::Load(cmd) => cmd.execute(&manager),
            Self::Exists(cmd) => cmd.execute(&manager),
        }
    }
}

fn build_user_manager(context: &CommandContext) -> StdResult<UserManager> {
    let configuration = context.configuration()?;
    let database =
        JsonFileUserDatabase::new(configuration.data_directory.clone()).with_context(|| {
            format!(
                "Could not open the user database in '{}'",
                configuration.data_directory.display()
            )
        })?;

    Ok(UserManager::new(Arc::new(database), context.logger().clone()))
}

/// User save command
#[derive(Parser, Debug, Clone)]
pub struct UserSaveCommand {
    /// Name of the user
    #[clap(long)]
    name: String,

    /// Age of the user
    #[clap(long)]
    age: i32,
}

impl UserSaveCommand {
    /// Main command execution
    pub fn execute(&self, manager: &UserManager) -> StdResult<bool> {
        let user = User::new(&self.name, self.age);
        manager.save(&user)?;
        println!("{user} saved");

        Ok(true)
    }
}

/// User load command
#[derive(Parser, Debug, Clone)]
pub struct UserLoadCommand {
    /// Name of the user
    #[clap(long)]
    name: String,
}

impl UserLoadCommand {
    /// Main command execution, return `false` if the user does not exist
    pub fn execute(&self, manager: &UserManager) -> StdResult<bool> {
        match manager.load(&self.name)? {
            Some(user) => {
                println!("{user}");
                Ok(true)
            }
            None => {
                println!("User '{}' not found", self.name);
                Ok(false)
            }
        }
    }
}

/// User exists command
#[derive(Parser, Debug, Clone)]
pub struct UserExistsCommand {
    /// Name of the user
    #[clap(long)]
    name: String,
}

impl UserExistsCommand {
    /// Main command execution, return whether the user exists
    pub fn execute(&self, manager: &UserManager) -> StdResult<bool> {
        let exists = manager.exists(&self.name)?;
        println!("{exists}");

        Ok(exists)
    }
}
