use crate::core::errors::UserError;
use crate::core::mapper::UserMapper;
use crate::core::models::user::{USER_TYPE_NAME, User, UserRequest, UserResponse};
use crate::infrastructure::storage::{UserRepository, UserStream};
use tracing::{debug, info};

pub struct UserService<R: UserRepository, M: UserMapper> {
    repository: R,
    mapper: M,
}

impl<R: UserRepository, M: UserMapper> UserService<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        UserService { repository, mapper }
    }

    pub fn to_response(&self, user: &User) -> UserResponse {
        self.mapper.to_response(user)
    }

    pub async fn save(&self, request: UserRequest) -> Result<User, UserError> {
        let user = self.repository.save(self.mapper.to_entity(request)).await?;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<User, UserError> {
        debug!(user_id = %id, "finding user");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::not_found(id, USER_TYPE_NAME))
    }

    pub async fn find_all(&self) -> Result<UserStream, UserError> {
        debug!("listing users");
        self.repository.find_all().await
    }

    pub async fn update(&self, id: &str, request: UserRequest) -> Result<User, UserError> {
        let existing = self.find_by_id(id).await?;
        let merged = self.mapper.merge(request, existing);
        let user = self.repository.save(merged).await?;
        info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    pub async fn delete(&self, id: &str) -> Result<User, UserError> {
        let removed = self
            .repository
            .find_and_remove(id)
            .await?
            .ok_or_else(|| UserError::not_found(id, USER_TYPE_NAME))?;
        info!(user_id = %removed.id, "user deleted");
        Ok(removed)
    }
}
