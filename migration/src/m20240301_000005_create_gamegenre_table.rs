use sea_orm_migration::prelude::*;

/// Creates the `gamegenre` join table.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameGenre::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameGenre::GameId).integer().not_null())
                    .col(ColumnDef::new(GameGenre::GenreId).integer().not_null())
                    .primary_key(Index::create().col(GameGenre::GameId).col(GameGenre::GenreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gamegenre_gameid")
                            .from(GameGenre::Table, GameGenre::GameId)
                            .to(Game::Table, Game::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gamegenre_genreid")
                            .from(GameGenre::Table, GameGenre::GenreId)
                            .to(Genre::Table, Genre::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Add index on genreid for reverse lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_gamegenre_genreid")
                    .table(GameGenre::Table)
                    .col(GameGenre::GenreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GameGenre {
    #[sea_orm(iden = "gamegenre")]
    Table,
    #[sea_orm(iden = "gameid")]
    GameId,
    #[sea_orm(iden = "genreid")]
    GenreId,
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
}
