use sea_orm_migration::prelude::*;

/// Creates the `gamecompany` join table ("game published by company").
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameCompany::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameCompany::GameId).integer().not_null())
                    .col(ColumnDef::new(GameCompany::CompanyId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(GameCompany::GameId)
                            .col(GameCompany::CompanyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gamecompany_gameid")
                            .from(GameCompany::Table, GameCompany::GameId)
                            .to(Game::Table, Game::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gamecompany_companyid")
                            .from(GameCompany::Table, GameCompany::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookup: games published by a company
        manager
            .create_index(
                Index::create()
                    .name("idx_gamecompany_companyid")
                    .table(GameCompany::Table)
                    .col(GameCompany::CompanyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameCompany::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GameCompany {
    #[sea_orm(iden = "gamecompany")]
    Table,
    #[sea_orm(iden = "gameid")]
    GameId,
    #[sea_orm(iden = "companyid")]
    CompanyId,
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
}
