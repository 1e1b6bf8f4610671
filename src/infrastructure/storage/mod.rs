use crate::core::errors::UserError;
use crate::core::models::user::User;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Stream of stored users, consumed once.
pub type UserStream = BoxStream<'static, Result<User, UserError>>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserError>;

    /// Every stored user, without pagination.
    async fn find_all(&self) -> Result<UserStream, UserError>;

    /// Inserts or replaces `user`, assigning an id when it has none.
    /// Fails with [`UserError::DuplicateKey`] when another user already owns the email.
    async fn save(&self, user: User) -> Result<User, UserError>;

    /// Removes and returns the user in one step.
    async fn find_and_remove(&self, id: &str) -> Result<Option<User>, UserError>;
}

pub mod in_memory;
