use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string_len(50))
                    .col(
                        ColumnDef::new(Users::WaId)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    // Enumerations are enforced by the application, not the database
                    .col(
                        ColumnDef::new(Users::State)
                            .string_len(50)
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(Users::OnboardingState)
                            .string_len(50)
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(20)
                            .not_null()
                            .default("teacher"),
                    )
                    .col(ColumnDef::new(Users::ClassInfo).json())
                    .col(ColumnDef::new(Users::SchoolName).string_len(100))
                    .col(ColumnDef::new(Users::Birthday).date())
                    .col(ColumnDef::new(Users::Region).string_len(50))
                    .col(ColumnDef::new(Users::LastMessageAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Review table sorts newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_users_created_at")
                    .table(Users::Table)
                    .col((Users::CreatedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        // Status filter
        manager
            .create_index(
                Index::create()
                    .name("idx_users_state")
                    .table(Users::Table)
                    .col(Users::State)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_users_created_at;
                DROP INDEX IF EXISTS idx_users_state;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    WaId,
    State,
    OnboardingState,
    Role,
    ClassInfo,
    SchoolName,
    Birthday,
    Region,
    LastMessageAt,
    CreatedAt,
    UpdatedAt,
}
