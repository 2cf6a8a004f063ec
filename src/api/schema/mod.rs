// ABOUTME: Schema administration facade over box.schema.
// ABOUTME: Currently exposes user management.

mod privilege;
mod user;

pub use privilege::{ObjectType, ParsePrivilegeError, Privilege, UserPrivilege};
pub use user::{
    GrantOptions, RevokeOptions, SchemaUser, UserCreateOptions, UserCreateRequest,
    UserDropOptions, UserDropRequest, UserExistsRequest, UserGrantRequest, UserInfoRequest,
    UserPasswdRequest, UserPasswordRequest, UserRevokeRequest,
};

use super::BoxApi;
use crate::doer::Doer;

/// View over `box.schema` for one connection.
#[derive(Debug)]
pub struct Schema<'a, D> {
    api: &'a BoxApi<D>,
}

impl<'a, D: Doer> Schema<'a, D> {
    pub fn new(api: &'a BoxApi<D>) -> Self {
        Self { api }
    }

    /// User management (`box.schema.user`).
    pub fn user(&self) -> SchemaUser<'a, D> {
        SchemaUser::new(self.api)
    }
}
