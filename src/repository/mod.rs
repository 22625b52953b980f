//! Data access layer: one function per query shape, all parameterized through `sea-orm`.
//!
//! "Fetch one" returns `Option`; absence is never an error at this layer.

mod company_repository;
mod game_repository;
mod genre_repository;

pub use company_repository::CompanyRepository;
pub use game_repository::GameRepository;
pub use genre_repository::GenreRepository;
