pub mod entities;

pub use entities::{AdminCredentials, AdminSession, CredentialsError, IssuedSession};
