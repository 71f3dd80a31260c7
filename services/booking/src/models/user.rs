//! User model and related payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::role::Role;

/// User entity
///
/// The `password_hash` field holds the one-way Argon2 hash; the plaintext
/// password is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub role: Role,
}

/// Registration payload as received from the presentation layer
///
/// All fields arrive as raw strings and are validated before any use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
}

/// Validated user insert payload
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub role: Role,
}
