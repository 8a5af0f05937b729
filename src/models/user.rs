use serde::{Deserialize, Serialize};

use super::enums::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Stored as-is. This is a mock store; there is no hashing.
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
}

/// Fields supplied when creating a user; id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
}

/// Shallow-merge update payload. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
}

impl UserPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}
