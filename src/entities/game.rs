use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Platform;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "Text")]
    pub name: String,
    pub ps3: bool,
    pub ps4: bool,
    pub ps5: bool,
    pub copies: i32,
    pub price: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_company::Entity")]
    GameCompany,
    #[sea_orm(has_many = "super::game_genre::Entity")]
    GameGenre,
}

impl Related<super::game_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCompany.def()
    }
}

impl Related<super::game_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameGenre.def()
    }
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_company::Relation::Company.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_company::Relation::Game.def().rev())
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_genre::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the game is flagged as available on `platform`.
    #[must_use]
    pub const fn available_on(&self, platform: Platform) -> bool {
        match platform {
            Platform::Ps3 => self.ps3,
            Platform::Ps4 => self.ps4,
            Platform::Ps5 => self.ps5,
        }
    }

    /// Platforms this game is available on, in catalog order.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.available_on(*p))
            .collect()
    }
}
