//! MongoDB-backed users collection.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::user::{NewUser, User, UserFilter, UserPatch};

const USERS_COLLECTION: &str = "users";

type Result<T> = std::result::Result<T, mongodb::error::Error>;

/// Accessor over the `users` collection of a MongoDB database.
#[derive(Clone)]
pub struct MongoUsers {
    collection: Collection<User>,
}

impl MongoUsers {
    /// Connect and select the `users` collection.
    ///
    /// A database name carried by the connection string takes precedence
    /// over the `database` argument.
    pub async fn new(
        address: &str,
        database: &str,
        pool_size: u32,
    ) -> Result<Self> {
        let mut options = ClientOptions::parse(address).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_owned());
        options.max_pool_size = Some(pool_size);

        let database = options
            .default_database
            .clone()
            .unwrap_or_else(|| database.to_owned());

        let client = Client::with_options(options)?;
        let collection = client
            .database(&database)
            .collection::<User>(USERS_COLLECTION);

        Ok(Self { collection })
    }

    pub async fn insert(&self, input: &NewUser) -> Result<ObjectId> {
        let id = ObjectId::new();
        let user = User::from_input(&id, input);

        self.collection.insert_one(&user).await?;
        Ok(id)
    }

    /// Matching records in natural (insertion) order.
    pub async fn find_all(&self, filter: &UserFilter) -> Result<Vec<User>> {
        let mut cursor = self.collection.find(filter_document(filter)).await?;

        let mut users = Vec::new();
        while let Some(user) = cursor.try_next().await? {
            users.push(user);
        }
        Ok(users)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>> {
        self.collection.find_one(doc! { "_id": id.to_hex() }).await
    }

    pub async fn update_by_id(
        &self,
        id: &ObjectId,
        patch: &UserPatch,
    ) -> Result<bool> {
        let changes = set_document(patch);
        if changes.is_empty() {
            // `$set: {}` is rejected by the server. Nothing to merge, so
            // the match indicator degrades to an existence check.
            return Ok(self.find_by_id(id).await?.is_some());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id.to_hex() }, doc! { "$set": changes })
            .await?;

        Ok(result.matched_count > 0)
    }

    pub async fn delete_by_id(&self, id: &ObjectId) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_hex() })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

/// Translate a [`UserFilter`] into a MongoDB query document.
///
/// Must agree with [`UserFilter::matches`].
fn filter_document(filter: &UserFilter) -> Document {
    let mut document = Document::new();

    if let Some(name) = &filter.name {
        document.insert("name", substring_ci(name));
    }
    if let Some(email) = &filter.email {
        document.insert("email", substring_ci(email));
    }
    if let Some(age) = filter.age {
        document.insert("age", i64::from(age));
    }

    document
}

/// Case-insensitive substring predicate. The needle is escaped so it is
/// matched literally.
fn substring_ci(needle: &str) -> Document {
    doc! { "$regex": regex_lite::escape(needle), "$options": "i" }
}

/// Translate a [`UserPatch`] into a `$set` payload.
fn set_document(patch: &UserPatch) -> Document {
    let mut document = Document::new();

    if let Some(name) = &patch.name {
        document.insert("name", name.as_str());
    }
    if let Some(email) = &patch.email {
        document.insert("email", email.as_str());
    }

    document
}
