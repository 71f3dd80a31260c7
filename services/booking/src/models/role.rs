//! User role model

use serde::{Deserialize, Serialize};

/// Access class of a user
///
/// Stored as an integer in the `users.role` column: 1 for regular users,
/// 2 for administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum Role {
    Regular = 1,
    Admin = 2,
}

impl Role {
    /// Whether this role grants administrative access
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}
