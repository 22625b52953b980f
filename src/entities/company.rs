use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    pub founded: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_company::Entity")]
    GameCompany,
}

impl Related<super::game_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCompany.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_company::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_company::Relation::Company.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Founding date stored when none was submitted (`0001-01-01`).
#[must_use]
pub fn unknown_founded() -> Date {
    Date::from_ymd_opt(1, 1, 1).unwrap_or_default()
}

impl Model {
    /// Whether the founding date is the "unknown" sentinel.
    #[must_use]
    pub fn founded_unknown(&self) -> bool {
        self.founded == unknown_founded()
    }
}
