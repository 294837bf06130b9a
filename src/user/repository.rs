//! Handle database requests.

use mongodb::bson::oid::ObjectId;

use crate::database::mem::MemoryUsers;
use crate::database::mongo::MongoUsers;
use crate::error::Result;
use crate::user::{NewUser, User, UserFilter, UserPatch};

/// Persistence accessor for the users collection.
///
/// Sole component touching the storage layer; no business rules, no
/// caching, no retries. Failures propagate to the caller.
#[derive(Clone)]
pub enum UserRepository {
    Mongo(MongoUsers),
    Memory(MemoryUsers),
}

impl UserRepository {
    /// Insert a record and return the store-assigned identifier.
    pub async fn insert(&self, input: &NewUser) -> Result<ObjectId> {
        match self {
            Self::Mongo(store) => Ok(store.insert(input).await?),
            Self::Memory(store) => Ok(store.insert(input)),
        }
    }

    /// All matching records, ordered by insertion.
    pub async fn find_all(&self, filter: &UserFilter) -> Result<Vec<User>> {
        match self {
            Self::Mongo(store) => Ok(store.find_all(filter).await?),
            Self::Memory(store) => Ok(store.find_all(filter)),
        }
    }

    /// The matching record, or `None`. Absence is not an error.
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>> {
        match self {
            Self::Mongo(store) => Ok(store.find_by_id(id).await?),
            Self::Memory(store) => Ok(store.find_by_id(id)),
        }
    }

    /// Merge supplied fields into the stored record. Returns whether a
    /// match was found, not the updated record.
    pub async fn update_by_id(
        &self,
        id: &ObjectId,
        patch: &UserPatch,
    ) -> Result<bool> {
        match self {
            Self::Mongo(store) => Ok(store.update_by_id(id, patch).await?),
            Self::Memory(store) => Ok(store.update_by_id(id, patch)),
        }
    }

    /// Remove the record if present. Returns whether a match was found.
    pub async fn delete_by_id(&self, id: &ObjectId) -> Result<bool> {
        match self {
            Self::Mongo(store) => Ok(store.delete_by_id(id).await?),
            Self::Memory(store) => Ok(store.delete_by_id(id)),
        }
    }
}
