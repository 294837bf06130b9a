//! In-memory users collection.
//!
//! Driver-compatible stand-in for [`super::mongo::MongoUsers`], used when
//! no `mongo` configuration is present and by the test suite.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mongodb::bson::oid::ObjectId;

use crate::user::{NewUser, User, UserFilter, UserPatch};

#[derive(Clone, Debug, Default)]
pub struct MemoryUsers {
    records: Arc<RwLock<Vec<User>>>,
}

impl MemoryUsers {
    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.records.read().expect("users store poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.records.write().expect("users store poisoned")
    }

    pub fn insert(&self, input: &NewUser) -> ObjectId {
        let id = ObjectId::new();
        self.write().push(User::from_input(&id, input));
        id
    }

    /// Insertion order by construction.
    pub fn find_all(&self, filter: &UserFilter) -> Vec<User> {
        self.read()
            .iter()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: &ObjectId) -> Option<User> {
        let id = id.to_hex();
        self.read().iter().find(|user| user.id == id).cloned()
    }

    pub fn update_by_id(&self, id: &ObjectId, patch: &UserPatch) -> bool {
        let id = id.to_hex();
        match self.write().iter_mut().find(|user| user.id == id) {
            Some(user) => {
                if let Some(name) = &patch.name {
                    user.name = name.clone();
                }
                if let Some(email) = &patch.email {
                    user.email = email.clone();
                }
                true
            },
            None => false,
        }
    }

    pub fn delete_by_id(&self, id: &ObjectId) -> bool {
        let id = id.to_hex();
        let mut records = self.write();
        let before = records.len();
        records.retain(|user| user.id != id);
        records.len() < before
    }
}
