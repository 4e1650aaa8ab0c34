pub mod sea_orm_entity;
mod user_mapping;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
