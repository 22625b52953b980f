//! Game Inventory - server-rendered catalog of video games, their publishers
//! and genres.
//!
//! This crate provides:
//! - List, detail, create, update and delete pages for games, companies and genres
//! - Join-table bookkeeping for game publishers and genres
//! - Guarded deletes that refuse to remove a company or genre still used by a game
//! - Optional PNG/JPEG image uploads

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;
pub mod upload;
pub mod validation;
pub mod views;
