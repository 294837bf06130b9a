use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::error::{Result, ServerError};
use crate::user::{NewUser, User, UserFilter, UserPatch, UserRepository};

/// User manager.
///
/// Enforces the declared schema before delegating, and hides
/// storage-engine error shapes from callers.
#[derive(Clone)]
pub struct UserService {
    pub repo: UserRepository,
}

impl UserService {
    /// Create a new [`UserService`].
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Validate input, insert, then re-read by the new identifier.
    ///
    /// The re-read guarantees the response reflects exactly what is
    /// stored rather than echoing client input. Insert and re-read are
    /// two independent operations with no atomicity guarantee.
    pub async fn create_user(&self, input: NewUser) -> Result<User> {
        input.validate()?;

        let id = self.repo.insert(&input).await?;
        self.repo.find_by_id(&id).await?.ok_or_else(|| {
            ServerError::Internal(format!(
                "created user {id} missing on read-back"
            ))
        })
    }

    /// Pure pass-through. An empty result set is a valid outcome.
    pub async fn get_all_users(
        &self,
        filter: &UserFilter,
    ) -> Result<Vec<User>> {
        self.repo.find_all(filter).await
    }

    /// Pass-through. `None` signals "not found" as a normal outcome.
    pub async fn get_user_by_id(&self, id: &ObjectId) -> Result<Option<User>> {
        self.repo.find_by_id(id).await
    }

    /// Pass-through. No re-read guarantee.
    pub async fn update_user(
        &self,
        id: &ObjectId,
        patch: &UserPatch,
    ) -> Result<bool> {
        self.repo.update_by_id(id, patch).await
    }

    /// Pass-through.
    pub async fn delete_user(&self, id: &ObjectId) -> Result<bool> {
        self.repo.delete_by_id(id).await
    }
}
