use crate::core::errors::UserError;
use crate::core::models::user::User;
use crate::infrastructure::storage::{UserRepository, UserStream};
use async_trait::async_trait;
use futures::StreamExt;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

struct StoredUser {
    seq: u64,
    user: User,
}

#[derive(Default)]
struct Documents {
    users: HashMap<String, StoredUser>,
    ids_by_email: HashMap<String, String>,
    next_seq: u64,
}

/// Document store for users with a unique index on `email`.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    collection: String,
    documents: Arc<RwLock<Documents>>,
}

impl InMemoryUserRepository {
    pub fn new(collection: impl Into<String>) -> Self {
        InMemoryUserRepository {
            collection: collection.into(),
            documents: Arc::new(RwLock::new(Documents::default())),
        }
    }

    fn duplicate_email(&self, email: &str) -> UserError {
        UserError::DuplicateKey(format!(
            "E11000 duplicate key error collection: {} index: email dup key: {{ email: \"{}\" }}",
            self.collection, email
        ))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        InMemoryUserRepository::new("users")
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserError> {
        let documents = self.documents.read().await;
        Ok(documents.users.get(id).map(|stored| stored.user.clone()))
    }

    async fn find_all(&self) -> Result<UserStream, UserError> {
        let documents = self.documents.read().await;
        let mut snapshot: Vec<(u64, User)> = documents
            .users
            .values()
            .map(|stored| (stored.seq, stored.user.clone()))
            .collect();
        snapshot.sort_by_key(|(seq, _)| *seq);
        Ok(futures::stream::iter(snapshot.into_iter().map(|(_, user)| Ok(user))).boxed())
    }

    async fn save(&self, mut user: User) -> Result<User, UserError> {
        let mut documents = self.documents.write().await;

        if let Some(owner) = documents.ids_by_email.get(&user.email) {
            if *owner != user.id {
                return Err(self.duplicate_email(&user.email));
            }
        }

        if user.id.is_empty() {
            user.id = Uuid::new_v4().simple().to_string();
        }

        let previous = documents
            .users
            .get(&user.id)
            .map(|stored| (stored.seq, stored.user.email.clone()));
        let seq = match previous {
            Some((seq, old_email)) => {
                documents.ids_by_email.remove(&old_email);
                seq
            }
            None => {
                documents.next_seq += 1;
                documents.next_seq
            }
        };

        documents.ids_by_email.insert(user.email.clone(), user.id.clone());
        documents.users.insert(
            user.id.clone(),
            StoredUser {
                seq,
                user: user.clone(),
            },
        );
        Ok(user)
    }

    async fn find_and_remove(&self, id: &str) -> Result<Option<User>, UserError> {
        let mut documents = self.documents.write().await;
        let removed = documents.users.remove(id).map(|stored| stored.user);
        if let Some(user) = &removed {
            documents.ids_by_email.remove(&user.email);
        }
        Ok(removed)
    }
}
