// ABOUTME: Tarantool user name validation.
// ABOUTME: Enforces the server's name length limit and rejects control and line-break characters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Longest name the server accepts for users, roles and other schema objects.
pub const MAX_USERNAME_LEN: usize = 65000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("username cannot be empty")]
    Empty,

    #[error("username is {0} bytes long, maximum is 65000")]
    TooLong(usize),

    #[error("username contains a control or line-break character at byte {0}")]
    ControlChar(usize),
}

/// Characters the server refuses in identifiers: Unicode `Cc` plus the
/// line and paragraph separators U+2028 and U+2029.
fn is_forbidden(c: char) -> bool {
    c.is_control() || c == '\u{2028}' || c == '\u{2029}'
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: &str) -> Result<Self, UsernameError> {
        if value.is_empty() {
            return Err(UsernameError::Empty);
        }

        if value.len() > MAX_USERNAME_LEN {
            return Err(UsernameError::TooLong(value.len()));
        }

        if let Some((pos, _)) = value.char_indices().find(|(_, c)| is_forbidden(*c)) {
            return Err(UsernameError::ControlChar(pos));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Username {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

// Deserialization re-runs validation.
impl<'de> Deserialize<'de> for Username {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Username::new(&value).map_err(serde::de::Error::custom)
    }
}
