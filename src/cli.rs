// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines subcommands for rendering box requests and managing config.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tntbox::api::schema::ObjectType;
use tntbox::output::OutputMode;

#[derive(Parser)]
#[command(name = "tntbox")]
#[command(about = "Build and inspect Tarantool box administration requests")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (overrides discovery and TNTBOX_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for rendered requests
    #[arg(short, long, global = true, value_enum, default_value_t = OutputMode::Text)]
    pub format: OutputMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new tntbox.yml configuration file
    Init {
        /// User written as default_user
        #[arg(long)]
        default_user: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved configuration (passwords are not printed)
    Config,

    /// Print the call a box operation would send
    Render {
        #[command(subcommand)]
        request: RenderCommand,
    },
}

#[derive(Subcommand)]
pub enum RenderCommand {
    /// box.session.su
    Su {
        /// Target user (defaults to default_user from config)
        username: Option<String>,
    },

    /// box.session.user
    SessionUser,

    /// box.info
    Info,

    /// box.schema.user operations
    User {
        #[command(subcommand)]
        op: UserCommand,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// box.schema.user.exists
    Exists { name: String },

    /// box.schema.user.create
    Create {
        name: String,

        /// Password (defaults to the configured credential, if any)
        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        if_not_exists: bool,
    },

    /// box.schema.user.drop
    Drop {
        name: String,

        #[arg(long)]
        if_exists: bool,
    },

    /// box.schema.user.passwd
    Passwd {
        /// User whose password changes (current user when omitted)
        name: Option<String>,

        /// New password (defaults to the configured credential)
        #[arg(long)]
        password: Option<String>,
    },

    /// box.schema.user.password
    Password { password: String },

    /// box.schema.user.grant
    Grant {
        name: String,

        /// Comma-separated privileges, e.g. read,write
        privileges: String,

        object_type: ObjectType,

        object_name: Option<String>,

        #[arg(long)]
        grantor: Option<String>,

        #[arg(long)]
        if_not_exists: bool,
    },

    /// box.schema.user.revoke
    Revoke {
        name: String,

        /// Comma-separated privileges, e.g. read,write
        privileges: String,

        object_type: ObjectType,

        object_name: Option<String>,

        #[arg(long)]
        if_exists: bool,
    },

    /// box.schema.user.info
    Info { name: String },
}
