use crate::core::models::user::{User, UserRequest, UserResponse};

/// Conversions between the wire DTOs and the persisted [`User`].
pub trait UserMapper: Send + Sync {
    /// Builds a new entity from a request. The id is left for the store to assign.
    fn to_entity(&self, request: UserRequest) -> User;

    fn to_response(&self, entity: &User) -> UserResponse;

    /// Copies every present request field onto `entity`. Absent fields and the id are kept.
    fn merge(&self, request: UserRequest, entity: User) -> User;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultUserMapper;

impl UserMapper for DefaultUserMapper {
    fn to_entity(&self, request: UserRequest) -> User {
        User {
            id: String::new(),
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
        }
    }

    fn to_response(&self, entity: &User) -> UserResponse {
        UserResponse {
            id: entity.id.clone(),
            name: entity.name.clone(),
            email: entity.email.clone(),
            password: entity.password.clone(),
        }
    }

    fn merge(&self, request: UserRequest, mut entity: User) -> User {
        if let Some(name) = request.name {
            entity.name = name;
        }
        if let Some(email) = request.email {
            entity.email = email;
        }
        if let Some(password) = request.password {
            entity.password = password;
        }
        entity
    }
}
