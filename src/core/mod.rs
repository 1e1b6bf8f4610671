pub mod errors;
pub mod mapper;
pub mod models;
pub mod services;
pub mod validation;
