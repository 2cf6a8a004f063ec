// ABOUTME: Entry point for the tntbox CLI application.
// ABOUTME: Parses arguments, loads config and prints rendered box requests.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, RenderCommand, UserCommand};
use std::env;
use tntbox::api::schema::{
    GrantOptions, Privilege, RevokeOptions, UserCreateOptions, UserCreateRequest,
    UserDropOptions, UserDropRequest, UserExistsRequest, UserGrantRequest, UserInfoRequest,
    UserPasswdRequest, UserPasswordRequest, UserRevokeRequest,
};
use tntbox::api::{InfoRequest, SessionSuRequest, SessionUserRequest};
use tntbox::config::{self, Config};
use tntbox::doer::{CallRequest, Request};
use tntbox::error::{Error, Result};
use tntbox::output;
use tntbox::types::{Password, Username};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Init {
            default_user,
            force,
        } => {
            config::init_config(&cwd, default_user.as_deref(), force)?;
            println!("Wrote {}", config::CONFIG_FILENAME);
            Ok(())
        }
        Commands::Config => {
            let config = load_config(cli.config.as_deref(), &cwd)?;
            print_config(&config);
            Ok(())
        }
        Commands::Render { request } => {
            let config = load_config(cli.config.as_deref(), &cwd)?;
            let call = build_call(request, &config)?;
            println!("{}", output::render(&call, cli.format)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>, cwd: &std::path::Path) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::resolve(cwd),
    }
}

fn print_config(config: &Config) {
    match config.timeout {
        Some(timeout) => println!("timeout: {timeout:?}"),
        None => println!("timeout: none"),
    }
    match &config.default_user {
        Some(user) => println!("default_user: {user}"),
        None => println!("default_user: none"),
    }
    if config.credentials.is_empty() {
        println!("credentials: none");
    } else {
        println!("credentials:");
        for (user, value) in &config.credentials {
            println!("  {user}: {}", value.describe());
        }
    }
}

fn build_call(request: RenderCommand, config: &Config) -> Result<CallRequest> {
    let call = match request {
        RenderCommand::Su { username } => {
            let user = config.username_or_default(username.as_deref())?;
            SessionSuRequest::from(user).to_call()
        }
        RenderCommand::SessionUser => SessionUserRequest.to_call(),
        RenderCommand::Info => InfoRequest.to_call(),
        RenderCommand::User { op } => build_user_call(op, config)?,
    };
    tracing::debug!(function = %call.function, "built request");
    Ok(call)
}

fn build_user_call(op: UserCommand, config: &Config) -> Result<CallRequest> {
    let call = match op {
        UserCommand::Exists { name } => UserExistsRequest::new(Username::new(&name)?).to_call(),
        UserCommand::Create {
            name,
            password,
            if_not_exists,
        } => {
            let password = match password {
                Some(p) => Some(Password::new(p)),
                None => optional_credential(config, &name)?,
            };
            let options = UserCreateOptions {
                password,
                if_not_exists,
            };
            UserCreateRequest::new(Username::new(&name)?, options).to_call()
        }
        UserCommand::Drop { name, if_exists } => {
            UserDropRequest::new(Username::new(&name)?, UserDropOptions { if_exists }).to_call()
        }
        UserCommand::Passwd { name, password } => {
            let target = name.as_deref().map(Username::new).transpose()?;
            let password = match password {
                Some(p) => Password::new(p),
                None => {
                    let owner = match &target {
                        Some(user) => user.clone(),
                        None => config.username_or_default(None)?,
                    };
                    config.credential(owner.as_str())?
                }
            };
            UserPasswdRequest::new(target, password).to_call()
        }
        UserCommand::Password { password } => {
            UserPasswordRequest::new(Password::new(password)).to_call()
        }
        UserCommand::Grant {
            name,
            privileges,
            object_type,
            object_name,
            grantor,
            if_not_exists,
        } => {
            let options = GrantOptions {
                grantor: grantor.as_deref().map(Username::new).transpose()?,
                if_not_exists,
            };
            UserGrantRequest::new(
                Username::new(&name)?,
                parse_privileges(&privileges)?,
                object_type,
                object_name,
                options,
            )?
            .to_call()
        }
        UserCommand::Revoke {
            name,
            privileges,
            object_type,
            object_name,
            if_exists,
        } => UserRevokeRequest::new(
            Username::new(&name)?,
            parse_privileges(&privileges)?,
            object_type,
            object_name,
            RevokeOptions { if_exists },
        )?
        .to_call(),
        UserCommand::Info { name } => UserInfoRequest::new(Username::new(&name)?).to_call(),
    };
    Ok(call)
}

fn parse_privileges(list: &str) -> Result<Vec<Privilege>> {
    Privilege::parse_list(list).map_err(|e| Error::InvalidArgument(e.to_string()))
}

fn optional_credential(config: &Config, user: &str) -> Result<Option<Password>> {
    match config.credential(user) {
        Ok(password) => Ok(Some(password)),
        Err(Error::UnknownCredential(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
