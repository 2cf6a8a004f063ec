// ABOUTME: Application-wide error types for tntbox.
// ABOUTME: Covers configuration, CLI input and wraps box API failures.

use std::path::PathBuf;
use thiserror::Error;

use crate::api::BoxError;
use crate::types::UsernameError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("credential {user}: missing environment variable {var}")]
    MissingEnvVar { user: String, var: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no username given and no default_user configured")]
    MissingUsername,

    #[error("no credential configured for user: {0}")]
    UnknownCredential(String),

    #[error("invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error(transparent)]
    Box(#[from] BoxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
