pub mod jwt;
pub mod token_repository_redis;

pub use token_repository_redis::RedisTokenRepository;
