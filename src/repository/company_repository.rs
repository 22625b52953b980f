use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::entities::{company, game, game_company};

/// Company data access
pub struct CompanyRepository;

impl CompanyRepository {
    /// All companies in insertion order.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<company::Model>, DbErr> {
        company::Entity::find()
            .order_by_asc(company::Column::Id)
            .all(db)
            .await
    }

    /// All companies sorted by name, for pick lists.
    pub async fn find_all_by_name(db: &DatabaseConnection) -> Result<Vec<company::Model>, DbErr> {
        company::Entity::find()
            .order_by_asc(company::Column::Name)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<company::Model>, DbErr> {
        company::Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<company::Model>, DbErr> {
        company::Entity::find()
            .filter(company::Column::Name.eq(name))
            .one(db)
            .await
    }

    /// Insert a company and return its new id.
    pub async fn insert(db: &DatabaseConnection, company: company::ActiveModel) -> Result<i32, DbErr> {
        Ok(company.insert(db).await?.id)
    }

    /// Write every set column of `company`, keyed by its id.
    pub async fn update(db: &DatabaseConnection, company: company::ActiveModel) -> Result<(), DbErr> {
        company.update(db).await?;
        Ok(())
    }

    /// Delete a company row, returning the number of rows removed.
    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
        Ok(company::Entity::delete_by_id(id)
            .exec(db)
            .await?
            .rows_affected)
    }

    /// Games published by the company, joined through `gamecompany`.
    pub async fn find_games(
        db: &DatabaseConnection,
        company_id: i32,
    ) -> Result<Vec<game::Model>, DbErr> {
        game::Entity::find()
            .join(JoinType::InnerJoin, game::Relation::GameCompany.def())
            .filter(game_company::Column::CompanyId.eq(company_id))
            .order_by_asc(game::Column::Id)
            .all(db)
            .await
    }
}
