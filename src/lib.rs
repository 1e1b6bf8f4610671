pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::api::handlers::{SharedUserService, api_routes};
pub use crate::core::errors::UserError;
pub use crate::core::mapper::DefaultUserMapper;
pub use crate::core::services::UserService;
pub use crate::infrastructure::storage::in_memory::InMemoryUserRepository;

#[cfg(test)]
mod tests;
