mod registration_mapping;
pub mod registration_query_postgres;
pub mod registration_repository_postgres;
pub mod sea_orm_entity;

pub use registration_query_postgres::RegistrationQueryPostgres;
pub use registration_repository_postgres::RegistrationRepositoryPostgres;
