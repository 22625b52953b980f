use std::path::Path;

use sea_orm::{DatabaseConnection, Set};

use super::{DeleteOutcome, SaveOutcome};
use crate::entities::{company, game};
use crate::error::AppError;
use crate::repository::CompanyRepository;
use crate::upload::{self, ImageUpload};
use crate::validation::CompanyInput;

/// A company with the games it publishes.
#[derive(Debug, Clone)]
pub struct CompanyDetail {
    pub company: company::Model,
    pub games: Vec<game::Model>,
}

pub struct CompanyService;

impl CompanyService {
    /// All companies in insertion order.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<company::Model>, AppError> {
        Ok(CompanyRepository::find_all(db).await?)
    }

    /// Company by id, without its games.
    pub async fn find(db: &DatabaseConnection, id: i32) -> Result<company::Model, AppError> {
        CompanyRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
    }

    /// Company and its games, or `None` if the company does not exist.
    pub async fn find_with_games(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<CompanyDetail>, AppError> {
        let (company, games) = tokio::try_join!(
            CompanyRepository::find_by_id(db, id),
            CompanyRepository::find_games(db, id),
        )?;
        Ok(company.map(|company| CompanyDetail { company, games }))
    }

    /// Company and its games.
    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<CompanyDetail, AppError> {
        Self::find_with_games(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
    }

    /// Insert a validated company unless one with the same name exists.
    ///
    /// The image is only written to `uploads` when a row is actually inserted.
    pub async fn create(
        db: &DatabaseConnection,
        uploads: &Path,
        input: CompanyInput,
        image: Option<ImageUpload>,
    ) -> Result<SaveOutcome, AppError> {
        if let Some(existing) = CompanyRepository::find_by_name(db, &input.name).await? {
            tracing::info!(company_id = existing.id, "Company name already taken");
            return Ok(SaveOutcome::NameTaken(existing.id));
        }

        let image = upload::store_image(uploads, image).await?;
        let id = CompanyRepository::insert(
            db,
            company::ActiveModel {
                name: Set(input.name),
                location: Set(input.location),
                founded: Set(input.founded),
                image: Set(image),
                ..Default::default()
            },
        )
        .await?;

        tracing::info!(company_id = id, "Company created");
        Ok(SaveOutcome::Saved(id))
    }

    /// Overwrite a company's fields. The stored image is only replaced when a
    /// new one was uploaded.
    pub async fn update(
        db: &DatabaseConnection,
        uploads: &Path,
        id: i32,
        input: CompanyInput,
        image: Option<ImageUpload>,
    ) -> Result<SaveOutcome, AppError> {
        let existing = Self::find(db, id).await?;

        let taken = CompanyRepository::find_by_name(db, &input.name)
            .await?
            .filter(|other| other.id != id);
        if let Some(other) = taken {
            tracing::info!(company_id = id, other_id = other.id, "Company name already taken");
            return Ok(SaveOutcome::NameTaken(other.id));
        }

        let mut company: company::ActiveModel = existing.into();
        company.name = Set(input.name);
        company.location = Set(input.location);
        company.founded = Set(input.founded);
        if let Some(file) = upload::store_image(uploads, image).await? {
            company.image = Set(Some(file));
        }
        CompanyRepository::update(db, company).await?;

        tracing::info!(company_id = id, "Company updated");
        Ok(SaveOutcome::Saved(id))
    }

    /// Delete a company that no game references.
    pub async fn delete(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<DeleteOutcome<company::Model>, AppError> {
        let Some(CompanyDetail { company, games }) = Self::find_with_games(db, id).await? else {
            return Ok(DeleteOutcome::Missing);
        };

        if !games.is_empty() {
            tracing::warn!(company_id = id, games = games.len(), "Company delete blocked");
            return Ok(DeleteOutcome::Blocked {
                entity: company,
                games,
            });
        }

        CompanyRepository::delete_by_id(db, id).await?;
        tracing::info!(company_id = id, "Company deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
