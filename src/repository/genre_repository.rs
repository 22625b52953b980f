use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::entities::{game, game_genre, genre};

/// Genre data access
pub struct GenreRepository;

impl GenreRepository {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<genre::Model>, DbErr> {
        genre::Entity::find()
            .order_by_asc(genre::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<genre::Model>, DbErr> {
        genre::Entity::find_by_id(id).one(db).await
    }

    /// Genres among `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<Vec<genre::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        genre::Entity::find()
            .filter(genre::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<genre::Model>, DbErr> {
        genre::Entity::find()
            .filter(genre::Column::Name.eq(name))
            .one(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, genre: genre::ActiveModel) -> Result<i32, DbErr> {
        Ok(genre.insert(db).await?.id)
    }

    pub async fn update(db: &DatabaseConnection, genre: genre::ActiveModel) -> Result<(), DbErr> {
        genre.update(db).await?;
        Ok(())
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
        Ok(genre::Entity::delete_by_id(id).exec(db).await?.rows_affected)
    }

    /// Games tagged with the genre, joined through `gamegenre`.
    pub async fn find_games(
        db: &DatabaseConnection,
        genre_id: i32,
    ) -> Result<Vec<game::Model>, DbErr> {
        game::Entity::find()
            .join(JoinType::InnerJoin, game::Relation::GameGenre.def())
            .filter(game_genre::Column::GenreId.eq(genre_id))
            .order_by_asc(game::Column::Id)
            .all(db)
            .await
    }
}
