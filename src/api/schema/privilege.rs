// ABOUTME: Privilege and object type names used by grant, revoke and user info.
// ABOUTME: Parses and renders the comma-separated lists the server speaks.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePrivilegeError {
    #[error("unknown privilege: {0}")]
    UnknownPrivilege(String),

    #[error("unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("malformed privilege entry: {0}")]
    MalformedEntry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    Read,
    Write,
    Execute,
    Session,
    Usage,
    Create,
    Drop,
    Alter,
    Reference,
    Trigger,
    Insert,
    Update,
    Delete,
}

impl Privilege {
    pub fn as_str(self) -> &'static str {
        match self {
            Privilege::Read => "read",
            Privilege::Write => "write",
            Privilege::Execute => "execute",
            Privilege::Session => "session",
            Privilege::Usage => "usage",
            Privilege::Create => "create",
            Privilege::Drop => "drop",
            Privilege::Alter => "alter",
            Privilege::Reference => "reference",
            Privilege::Trigger => "trigger",
            Privilege::Insert => "insert",
            Privilege::Update => "update",
            Privilege::Delete => "delete",
        }
    }

    /// Render a privilege list the way `grant` and `revoke` expect it.
    pub fn join(privileges: &[Privilege]) -> String {
        privileges
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse a comma-separated list such as `"session,usage"`.
    pub fn parse_list(list: &str) -> Result<Vec<Privilege>, ParsePrivilegeError> {
        list.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Privilege::from_str)
            .collect()
    }
}

impl FromStr for Privilege {
    type Err = ParsePrivilegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let privilege = match s {
            "read" => Privilege::Read,
            "write" => Privilege::Write,
            "execute" => Privilege::Execute,
            "session" => Privilege::Session,
            "usage" => Privilege::Usage,
            "create" => Privilege::Create,
            "drop" => Privilege::Drop,
            "alter" => Privilege::Alter,
            "reference" => Privilege::Reference,
            "trigger" => Privilege::Trigger,
            "insert" => Privilege::Insert,
            "update" => Privilege::Update,
            "delete" => Privilege::Delete,
            other => return Err(ParsePrivilegeError::UnknownPrivilege(other.to_string())),
        };
        Ok(privilege)
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of object a privilege applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Universe,
    Space,
    Function,
    Sequence,
    Role,
    User,
}

impl ObjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Universe => "universe",
            ObjectType::Space => "space",
            ObjectType::Function => "function",
            ObjectType::Sequence => "sequence",
            ObjectType::Role => "role",
            ObjectType::User => "user",
        }
    }
}

impl FromStr for ObjectType {
    type Err = ParsePrivilegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "universe" => Ok(ObjectType::Universe),
            "space" => Ok(ObjectType::Space),
            "function" => Ok(ObjectType::Function),
            "sequence" => Ok(ObjectType::Sequence),
            "role" => Ok(ObjectType::Role),
            "user" => Ok(ObjectType::User),
            other => Err(ParsePrivilegeError::UnknownObjectType(other.to_string())),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `box.schema.user.info`: privileges held on one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrivilege {
    pub privileges: Vec<Privilege>,
    pub object_type: ObjectType,
    /// Object name; absent for universe grants.
    pub object_name: Option<String>,
}

impl UserPrivilege {
    /// Convert one `{privileges, type, name}` row. The server drops a trailing
    /// nil name, so rows may have two elements.
    pub fn from_row(row: &Value) -> Result<Self, ParsePrivilegeError> {
        let malformed = || ParsePrivilegeError::MalformedEntry(row.to_string());

        let items = row.as_array().ok_or_else(malformed)?;
        let privileges = items
            .first()
            .and_then(Value::as_str)
            .ok_or_else(malformed)?;
        let object_type = items.get(1).and_then(Value::as_str).ok_or_else(malformed)?;
        let object_name = match items.get(2) {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => return Err(malformed()),
        };

        Ok(Self {
            privileges: Privilege::parse_list(privileges)?,
            object_type: object_type.parse()?,
            object_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn join_and_parse_are_symmetric() {
        let privileges = [Privilege::Read, Privilege::Write, Privilege::Execute];
        let joined = Privilege::join(&privileges);
        assert_eq!(joined, "read,write,execute");
        assert_eq!(Privilege::parse_list(&joined).unwrap(), privileges);
    }

    #[test]
    fn unknown_privilege_is_rejected() {
        assert_eq!(
            "fly".parse::<Privilege>(),
            Err(ParsePrivilegeError::UnknownPrivilege("fly".to_string()))
        );
    }

    #[test]
    fn row_without_name_is_universe_grant() {
        let row = json!(["session,usage", "universe"]);
        let entry = UserPrivilege::from_row(&row).unwrap();
        assert_eq!(entry.privileges, vec![Privilege::Session, Privilege::Usage]);
        assert_eq!(entry.object_type, ObjectType::Universe);
        assert_eq!(entry.object_name, None);
    }

    #[test]
    fn row_with_name() {
        let row = json!(["execute", "role", "public"]);
        let entry = UserPrivilege::from_row(&row).unwrap();
        assert_eq!(entry.object_type, ObjectType::Role);
        assert_eq!(entry.object_name.as_deref(), Some("public"));
    }

    #[test]
    fn malformed_row_is_rejected() {
        assert!(UserPrivilege::from_row(&json!("read")).is_err());
        assert!(UserPrivilege::from_row(&json!([1, "space"])).is_err());
    }
}
