pub mod token_hasher;
pub mod token_provider;
pub mod token_repository;

pub use token_provider::{
    IssuedToken, SessionClaims, TokenError, TokenProvider, ADMIN_SESSION_TOKEN_TYPE,
};
pub use token_repository::{TokenRepository, TokenRepositoryError};
