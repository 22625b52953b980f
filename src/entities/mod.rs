//! `sea-orm` entity models for the catalog tables.

pub mod company;
pub mod game;
pub mod game_company;
pub mod game_genre;
pub mod genre;
pub mod platform;

pub use platform::Platform;
