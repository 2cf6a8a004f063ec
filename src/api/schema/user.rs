// ABOUTME: User management requests for box.schema.user.
// ABOUTME: Covers existence checks, create/drop, passwords, grants and user info.

use serde::Serialize;
use serde_json::Value;
use snafu::ResultExt;

use super::privilege::{ObjectType, Privilege, UserPrivilege};
use crate::api::error::DecodeSnafu;
use crate::api::{BoxApi, BoxError, Result};
use crate::doer::{CallRequest, Doer, Request};
use crate::types::{Password, Username};

fn options_value<T: Serialize>(options: &T) -> Value {
    // Option structs hold only strings and bools, which always serialize.
    serde_json::to_value(options).unwrap_or_else(|_| Value::Object(Default::default()))
}

/// `box.schema.user.exists(name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserExistsRequest {
    pub name: Username,
}

impl UserExistsRequest {
    pub fn new(name: Username) -> Self {
        Self { name }
    }
}

impl Request for UserExistsRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.schema.user.exists").arg(self.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserCreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub if_not_exists: bool,
}

/// `box.schema.user.create(name, options)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreateRequest {
    pub name: Username,
    pub options: UserCreateOptions,
}

impl UserCreateRequest {
    pub fn new(name: Username, options: UserCreateOptions) -> Self {
        Self { name, options }
    }
}

impl Request for UserCreateRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.schema.user.create")
            .arg(self.name.as_str())
            .arg(options_value(&self.options))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserDropOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub if_exists: bool,
}

/// `box.schema.user.drop(name, options)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDropRequest {
    pub name: Username,
    pub options: UserDropOptions,
}

impl UserDropRequest {
    pub fn new(name: Username, options: UserDropOptions) -> Self {
        Self { name, options }
    }
}

impl Request for UserDropRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.schema.user.drop")
            .arg(self.name.as_str())
            .arg(options_value(&self.options))
    }
}

/// `box.schema.user.passwd([name,] password)`.
///
/// Without a name the server changes the current session user's password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPasswdRequest {
    pub name: Option<Username>,
    pub password: Password,
}

impl UserPasswdRequest {
    pub fn new(name: Option<Username>, password: Password) -> Self {
        Self { name, password }
    }
}

impl Request for UserPasswdRequest {
    fn to_call(&self) -> CallRequest {
        let call = CallRequest::new("box.schema.user.passwd");
        let call = match &self.name {
            Some(name) => call.arg(name.as_str()),
            None => call,
        };
        call.arg(self.password.expose())
    }
}

/// `box.schema.user.password(password)`: compute a password hash server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPasswordRequest {
    pub password: Password,
}

impl UserPasswordRequest {
    pub fn new(password: Password) -> Self {
        Self { password }
    }
}

impl Request for UserPasswordRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.schema.user.password").arg(self.password.expose())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GrantOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grantor: Option<Username>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RevokeOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub if_exists: bool,
}

/// Target and privileges shared by grant and revoke.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PrivilegeChange {
    name: Username,
    privileges: Vec<Privilege>,
    object_type: ObjectType,
    object_name: Option<String>,
}

impl PrivilegeChange {
    fn new(
        name: Username,
        privileges: Vec<Privilege>,
        object_type: ObjectType,
        object_name: Option<String>,
    ) -> Result<Self> {
        if privileges.is_empty() {
            return Err(BoxError::InvalidArgument {
                reason: "at least one privilege is required".to_string(),
            });
        }

        if object_type == ObjectType::Universe && object_name.is_some() {
            return Err(BoxError::InvalidArgument {
                reason: "universe privileges take no object name".to_string(),
            });
        }

        Ok(Self {
            name,
            privileges,
            object_type,
            object_name,
        })
    }

    fn to_call(&self, function: &str, options: Value) -> CallRequest {
        CallRequest::new(function)
            .arg(self.name.as_str())
            .arg(Privilege::join(&self.privileges))
            .arg(self.object_type.as_str())
            .arg(self.object_name.clone().map_or(Value::Null, Value::String))
            .arg(options)
    }
}

/// `box.schema.user.grant(name, privileges, object_type, object_name, options)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGrantRequest {
    change: PrivilegeChange,
    pub options: GrantOptions,
}

impl UserGrantRequest {
    pub fn new(
        name: Username,
        privileges: Vec<Privilege>,
        object_type: ObjectType,
        object_name: Option<String>,
        options: GrantOptions,
    ) -> Result<Self> {
        Ok(Self {
            change: PrivilegeChange::new(name, privileges, object_type, object_name)?,
            options,
        })
    }
}

impl Request for UserGrantRequest {
    fn to_call(&self) -> CallRequest {
        self.change
            .to_call("box.schema.user.grant", options_value(&self.options))
    }
}

/// `box.schema.user.revoke(name, privileges, object_type, object_name, options)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRevokeRequest {
    change: PrivilegeChange,
    pub options: RevokeOptions,
}

impl UserRevokeRequest {
    pub fn new(
        name: Username,
        privileges: Vec<Privilege>,
        object_type: ObjectType,
        object_name: Option<String>,
        options: RevokeOptions,
    ) -> Result<Self> {
        Ok(Self {
            change: PrivilegeChange::new(name, privileges, object_type, object_name)?,
            options,
        })
    }
}

impl Request for UserRevokeRequest {
    fn to_call(&self) -> CallRequest {
        self.change
            .to_call("box.schema.user.revoke", options_value(&self.options))
    }
}

/// `box.schema.user.info(name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfoRequest {
    pub name: Username,
}

impl UserInfoRequest {
    pub fn new(name: Username) -> Self {
        Self { name }
    }
}

impl Request for UserInfoRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.schema.user.info").arg(self.name.as_str())
    }
}

/// User management facade. Every name is validated before dispatch.
#[derive(Debug)]
pub struct SchemaUser<'a, D> {
    api: &'a BoxApi<D>,
}

impl<'a, D: Doer> SchemaUser<'a, D> {
    pub fn new(api: &'a BoxApi<D>) -> Self {
        Self { api }
    }

    pub async fn exists(&self, name: &str) -> Result<bool> {
        let request = UserExistsRequest::new(Username::new(name)?);
        self.api.call(&request).await
    }

    pub async fn create(&self, name: &str, options: UserCreateOptions) -> Result<()> {
        let request = UserCreateRequest::new(Username::new(name)?, options);
        self.api.call_unit(&request).await
    }

    pub async fn drop(&self, name: &str, options: UserDropOptions) -> Result<()> {
        let request = UserDropRequest::new(Username::new(name)?, options);
        self.api.call_unit(&request).await
    }

    /// Set the password of `name`, or of the current user when `name` is `None`.
    pub async fn passwd(&self, name: Option<&str>, password: impl Into<Password>) -> Result<()> {
        let name = name.map(Username::new).transpose()?;
        let request = UserPasswdRequest::new(name, password.into());
        self.api.call_unit(&request).await
    }

    /// Hash a password the way the server stores it.
    pub async fn password(&self, password: impl Into<Password>) -> Result<String> {
        let request = UserPasswordRequest::new(password.into());
        self.api.call(&request).await
    }

    pub async fn grant(
        &self,
        name: &str,
        privileges: &[Privilege],
        object_type: ObjectType,
        object_name: Option<&str>,
        options: GrantOptions,
    ) -> Result<()> {
        let request = UserGrantRequest::new(
            Username::new(name)?,
            privileges.to_vec(),
            object_type,
            object_name.map(str::to_string),
            options,
        )?;
        self.api.call_unit(&request).await
    }

    pub async fn revoke(
        &self,
        name: &str,
        privileges: &[Privilege],
        object_type: ObjectType,
        object_name: Option<&str>,
        options: RevokeOptions,
    ) -> Result<()> {
        let request = UserRevokeRequest::new(
            Username::new(name)?,
            privileges.to_vec(),
            object_type,
            object_name.map(str::to_string),
            options,
        )?;
        self.api.call_unit(&request).await
    }

    /// Privileges held by `name`, one entry per object.
    pub async fn info(&self, name: &str) -> Result<Vec<UserPrivilege>> {
        let request = UserInfoRequest::new(Username::new(name)?);
        let rows: Vec<Value> = self.api.call(&request).await?;
        rows.iter()
            .map(|row| {
                UserPrivilege::from_row(row).map_err(|e| {
                    <serde_json::Error as serde::de::Error>::custom(e.to_string())
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .context(DecodeSnafu {
                function: "box.schema.user.info",
            })
    }
}
