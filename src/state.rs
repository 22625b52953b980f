use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::views::Views;

/// Shared application state available to all request handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub views: Arc<Views>,
}

impl AppState {
    /// Build the state, compiling the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse.
    pub fn new(db: DatabaseConnection, config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            db,
            config,
            views: Arc::new(Views::new()?),
        })
    }
}
