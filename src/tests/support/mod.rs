pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory_registration_store;
pub mod in_memory_token_repository;
pub mod in_memory_user_store;
pub mod registration_fixtures;
pub mod stubs;
pub mod user_fixtures;
