// ABOUTME: Credential passwords given inline or read from the environment.
// ABOUTME: Resolves them into Password values and describes them redacted.

use crate::error::{Error, Result};
use crate::types::Password;
use serde::Deserialize;

/// A password entry under `credentials:`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    /// Resolve the password of the credential named `user`.
    pub fn resolve(&self, user: &str) -> Result<Password> {
        let secret = match self {
            EnvValue::Literal(s) => s.clone(),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => val,
                Err(_) => default.clone().ok_or_else(|| Error::MissingEnvVar {
                    user: user.to_string(),
                    var: var.clone(),
                })?,
            },
        };
        Ok(Password::new(secret))
    }

    /// Where the value comes from, without revealing it.
    pub fn describe(&self) -> String {
        match self {
            EnvValue::Literal(_) => "literal".to_string(),
            EnvValue::FromEnv { var, default: None } => format!("env {var}"),
            EnvValue::FromEnv {
                var,
                default: Some(_),
            } => format!("env {var} (with default)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_names_the_credential() {
        let value = EnvValue::FromEnv {
            var: "TNTBOX_UNIT_UNSET_PASSWORD".into(),
            default: None,
        };
        temp_env::with_var_unset("TNTBOX_UNIT_UNSET_PASSWORD", || {
            let err = value.resolve("replicator").unwrap_err();
            assert_eq!(
                err.to_string(),
                "credential replicator: missing environment variable TNTBOX_UNIT_UNSET_PASSWORD"
            );
        });
    }
}
