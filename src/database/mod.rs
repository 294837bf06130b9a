//! database (db) union structure.

pub mod mem;
pub mod mongo;

use axum::extract::FromRef;

use crate::AppState;
use crate::user::UserRepository;

pub const DEFAULT_DATABASE_NAME: &str = "test";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Custom db structure to pass to Axum.
#[derive(Clone)]
pub struct Database {
    pub users: UserRepository,
}

impl Database {
    /// Init database connections.
    pub async fn new(
        address: &str,
        database: &str,
        pool_size: u32,
    ) -> Result<Self, mongodb::error::Error> {
        let users = mongo::MongoUsers::new(address, database, pool_size).await?;

        tracing::info!(%database, "mongodb connected");

        Ok(Self {
            users: UserRepository::Mongo(users),
        })
    }

    /// Volatile store, shared storage for a single process only.
    pub fn in_memory() -> Self {
        Self {
            users: UserRepository::Memory(mem::MemoryUsers::default()),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Database {
        app_state.db.clone()
    }
}
