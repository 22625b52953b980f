use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::entities::{company, game, game_company, game_genre, genre};

/// Game data access, including both join tables.
pub struct GameRepository;

impl GameRepository {
    // ==================== game rows ====================

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<game::Model>, DbErr> {
        game::Entity::find()
            .order_by_asc(game::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<game::Model>, DbErr> {
        game::Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<game::Model>, DbErr> {
        game::Entity::find()
            .filter(game::Column::Name.eq(name))
            .one(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, game: game::ActiveModel) -> Result<i32, DbErr> {
        Ok(game.insert(db).await?.id)
    }

    pub async fn update(db: &DatabaseConnection, game: game::ActiveModel) -> Result<(), DbErr> {
        game.update(db).await?;
        Ok(())
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
        Ok(game::Entity::delete_by_id(id).exec(db).await?.rows_affected)
    }

    // ==================== gamecompany ====================

    /// The publisher of a game, if one is linked.
    pub async fn find_company(
        db: &DatabaseConnection,
        game_id: i32,
    ) -> Result<Option<company::Model>, DbErr> {
        company::Entity::find()
            .join(JoinType::InnerJoin, company::Relation::GameCompany.def())
            .filter(game_company::Column::GameId.eq(game_id))
            .one(db)
            .await
    }

    pub async fn link_company(
        db: &DatabaseConnection,
        game_id: i32,
        company_id: i32,
    ) -> Result<(), DbErr> {
        game_company::Entity::insert(game_company::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            company_id: ActiveValue::Set(company_id),
        })
        .exec_without_returning(db)
        .await?;
        Ok(())
    }

    /// Point the game's single publisher row at `company_id`, creating the row if
    /// the game had none.
    pub async fn replace_company(
        db: &DatabaseConnection,
        game_id: i32,
        company_id: i32,
    ) -> Result<(), DbErr> {
        let updated = game_company::Entity::update_many()
            .col_expr(game_company::Column::CompanyId, Expr::value(company_id))
            .filter(game_company::Column::GameId.eq(game_id))
            .exec(db)
            .await?;

        if updated.rows_affected == 0 {
            Self::link_company(db, game_id, company_id).await?;
        }
        Ok(())
    }

    pub async fn unlink_company(db: &DatabaseConnection, game_id: i32) -> Result<u64, DbErr> {
        Ok(game_company::Entity::delete_many()
            .filter(game_company::Column::GameId.eq(game_id))
            .exec(db)
            .await?
            .rows_affected)
    }

    // ==================== gamegenre ====================

    /// Genres a game is tagged with, joined through `gamegenre`.
    pub async fn find_genres(
        db: &DatabaseConnection,
        game_id: i32,
    ) -> Result<Vec<genre::Model>, DbErr> {
        genre::Entity::find()
            .join(JoinType::InnerJoin, genre::Relation::GameGenre.def())
            .filter(game_genre::Column::GameId.eq(game_id))
            .order_by_asc(genre::Column::Id)
            .all(db)
            .await
    }

    /// Link the game to every genre in `genre_ids` with a single multi-row insert.
    pub async fn link_genres(
        db: &DatabaseConnection,
        game_id: i32,
        genre_ids: &[i32],
    ) -> Result<(), DbErr> {
        if genre_ids.is_empty() {
            return Ok(());
        }

        let rows = genre_ids.iter().map(|&genre_id| game_genre::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            genre_id: ActiveValue::Set(genre_id),
        });

        game_genre::Entity::insert_many(rows)
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    pub async fn unlink_genres(db: &DatabaseConnection, game_id: i32) -> Result<u64, DbErr> {
        Ok(game_genre::Entity::delete_many()
            .filter(game_genre::Column::GameId.eq(game_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}
