/*
[INPUT]:  Process arguments and SMSAPI_* environment variables
[OUTPUT]: Parsed command line
[POS]:    CLI layer - argument definitions
[UPDATE]: When changing CLI flags or subcommands
*/

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "smsapi-contacts", version, about = "SMSAPI contacts command line client")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH", env = "SMSAPI_CONFIG")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
    #[arg(long, env = "SMSAPI_SERVER")]
    pub server: Option<String>,
    #[arg(long, env = "SMSAPI_USERNAME")]
    pub username: Option<String>,
    #[arg(long, env = "SMSAPI_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[arg(long = "token", env = "SMSAPI_TOKEN", hide_env_values = true)]
    pub oauth_token: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            server: self.server.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            oauth_token: self.oauth_token.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Verify credentials and show the account balance
    Login,
    #[command(subcommand)]
    Contacts(ContactsCommand),
    #[command(subcommand)]
    Groups(GroupsCommand),
    #[command(subcommand)]
    Fields(FieldsCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ContactsCommand {
    List(ContactFilter),
    Get { id: String },
    Add(NewContact),
    Delete { id: String },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub limit: Option<u64>,
    #[arg(long)]
    pub offset: Option<u64>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    #[arg(long)]
    pub phone_number: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GroupsCommand {
    List {
        #[arg(long)]
        name: Option<String>,
    },
    Get { id: String },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FieldsCommand {
    List,
}
