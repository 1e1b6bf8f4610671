mod service_tests;
mod storage_tests;

use crate::api::handlers::{SharedUserService, api_routes};
use crate::core::mapper::DefaultUserMapper;
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryUserRepository;
use axum::Router;
use std::sync::Arc;

pub const NAME: &str = "Ademir";
pub const EMAIL: &str = "ademir@email.com";
pub const PASSWORD: &str = "Ad123456789@";
pub const BAD_PASSWORD: &str = "Ad56789@";

pub fn create_test_service() -> UserService<InMemoryUserRepository, DefaultUserMapper> {
    UserService::new(InMemoryUserRepository::new("users"), DefaultUserMapper)
}

pub fn create_test_router() -> Router {
    let service: SharedUserService = Arc::new(create_test_service());
    api_routes(service)
}
