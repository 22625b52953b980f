use sea_orm_migration::prelude::*;

/// Creates the `game` table with one availability flag per supported platform.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Game::Name)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Game::Ps3).boolean().not_null().default(false))
                    .col(ColumnDef::new(Game::Ps4).boolean().not_null().default(false))
                    .col(ColumnDef::new(Game::Ps5).boolean().not_null().default(false))
                    .col(ColumnDef::new(Game::Copies).integer().not_null())
                    .col(ColumnDef::new(Game::Price).integer().not_null())
                    .col(ColumnDef::new(Game::Image).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Name,
    Ps3,
    Ps4,
    Ps5,
    Copies,
    Price,
    Image,
}
