mod repository;
mod service;

pub use repository::*;
pub use service::*;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User as saved on database.
///
/// `id` is assigned exactly once, by the storage layer, and is never
/// client-supplied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl User {
    pub(crate) fn from_input(id: &ObjectId, input: &NewUser) -> Self {
        Self {
            id: id.to_hex(),
            name: input.name.clone(),
            email: input.email.clone(),
            age: input.age,
        }
    }
}

/// Declared schema for user creation, validated once at the boundary.
#[derive(Clone, Debug, Validate, Serialize, Deserialize)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,
    #[validate(email(message = "Email must be formated."))]
    pub email: String,
    pub age: u32,
}

/// Partial-field update. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Validate, Serialize, Deserialize)]
pub struct UserPatch {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: Option<String>,
    #[validate(email(message = "Email must be formated."))]
    pub email: Option<String>,
}

impl UserPatch {
    /// Whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Optional predicate narrowing a list query. Empty filter = all records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Case-insensitive substring match.
    pub name: Option<String>,
    /// Case-insensitive substring match.
    pub email: Option<String>,
    /// Numeric equality.
    pub age: Option<u32>,
}

impl UserFilter {
    /// Reference matching semantics, shared by the in-memory backend and
    /// mirrored by the MongoDB query translation.
    pub fn matches(&self, user: &User) -> bool {
        fn contains_ci(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }

        self.name
            .as_deref()
            .is_none_or(|name| contains_ci(&user.name, name))
            && self
                .email
                .as_deref()
                .is_none_or(|email| contains_ci(&user.email, email))
            && self.age.is_none_or(|age| user.age == age)
    }
}
