//! Entity services: list, get, create, update and delete composed from
//! repository calls, including join-table bookkeeping and guarded deletes.

mod company_service;
mod game_service;
mod genre_service;

pub use company_service::{CompanyDetail, CompanyService};
pub use game_service::{
    CompanyOption, GameDetail, GameEdit, GameFormOptions, GameService, GenreOption, PlatformOption,
};
pub use genre_service::{GenreDetail, GenreService};

use crate::entities::game;

/// Result of a create or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The row was written.
    Saved(i32),
    /// Another row already uses the submitted name; nothing was written.
    NameTaken(i32),
}

impl SaveOutcome {
    /// Id of the entity the client should be sent to.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Saved(id) | Self::NameTaken(id) => id,
        }
    }
}

/// Result of a guarded delete.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome<T> {
    Deleted,
    /// Games still reference the entity.
    Blocked { entity: T, games: Vec<game::Model> },
    Missing,
}
