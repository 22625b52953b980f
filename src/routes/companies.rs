use axum::Router;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use serde::Serialize;

use super::form::FormSubmission;
use super::{EntityId, redirect};
use crate::entities::{company, game};
use crate::error::AppError;
use crate::services::{CompanyDetail, CompanyService, DeleteOutcome};
use crate::state::AppState;
use crate::validation::{CompanyForm, FieldError, Rejected};

/// Company pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies))
        .route("/company/create", get(create_form).post(create_company))
        .route("/company/{id}", get(company_detail))
        .route("/company/{id}/update", get(update_form).post(update_company))
        .route("/company/{id}/delete", get(delete_confirm).post(delete_company))
}

// ============================================================================
// View models
// ============================================================================

#[derive(Debug, Serialize)]
struct CompanyView {
    id: i32,
    name: String,
    location: Option<String>,
    /// `None` when the founding date is unknown.
    founded: Option<String>,
    image: Option<String>,
}

impl From<company::Model> for CompanyView {
    fn from(company: company::Model) -> Self {
        let founded =
            (!company.founded_unknown()).then(|| company.founded.format("%b %d, %Y").to_string());
        Self {
            id: company.id,
            name: company.name,
            location: company.location,
            founded,
            image: company.image,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompanyListView {
    title: &'static str,
    companies: Vec<CompanyView>,
}

#[derive(Debug, Serialize)]
struct CompanyDetailView {
    title: String,
    company: CompanyView,
    games: Vec<game::Model>,
}

#[derive(Debug, Serialize)]
struct CompanyFormView {
    title: &'static str,
    action: String,
    form: CompanyForm,
    image: Option<String>,
    errors: Vec<FieldError>,
}

impl CompanyFormView {
    fn create(form: CompanyForm, errors: Vec<FieldError>) -> Self {
        Self {
            title: "Create Company",
            action: "/company/create".to_string(),
            form,
            image: None,
            errors,
        }
    }

    fn update(id: i32, form: CompanyForm, image: Option<String>, errors: Vec<FieldError>) -> Self {
        Self {
            title: "Update Company",
            action: format!("/company/{id}/update"),
            form,
            image,
            errors,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_companies(State(state): State<AppState>) -> Result<Response, AppError> {
    let companies = CompanyService::list(&state.db).await?;
    state.views.render(
        "company/list.html",
        &CompanyListView {
            title: "Companies",
            companies: companies.into_iter().map(CompanyView::from).collect(),
        },
    )
}

async fn company_detail(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let CompanyDetail { company, games } = CompanyService::get(&state.db, id).await?;
    state.views.render(
        "company/detail.html",
        &CompanyDetailView {
            title: format!("Company: {}", company.name),
            company: company.into(),
            games,
        },
    )
}

async fn create_form(State(state): State<AppState>) -> Result<Response, AppError> {
    state.views.render(
        "company/form.html",
        &CompanyFormView::create(CompanyForm::default(), Vec::new()),
    )
}

async fn create_company(
    State(state): State<AppState>,
    submission: FormSubmission,
) -> Result<Response, AppError> {
    let input = match submission.company_form().validate() {
        Ok(input) => input,
        Err(Rejected { form, errors }) => {
            return state
                .views
                .render("company/form.html", &CompanyFormView::create(form, errors));
        }
    };

    let outcome =
        CompanyService::create(&state.db, &state.config.upload_dir, input, submission.image)
            .await?;
    Ok(redirect(&format!("/company/{}", outcome.id())))
}

async fn update_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let company = CompanyService::find(&state.db, id).await?;
    let form = CompanyForm {
        founded: if company.founded_unknown() {
            String::new()
        } else {
            company.founded.format("%Y-%m-%d").to_string()
        },
        name: company.name,
        location: company.location.unwrap_or_default(),
    };
    state.views.render(
        "company/form.html",
        &CompanyFormView::update(id, form, company.image, Vec::new()),
    )
}

async fn update_company(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    submission: FormSubmission,
) -> Result<Response, AppError> {
    let input = match submission.company_form().validate() {
        Ok(input) => input,
        Err(Rejected { form, errors }) => {
            let company = CompanyService::find(&state.db, id).await?;
            return state.views.render(
                "company/form.html",
                &CompanyFormView::update(id, form, company.image, errors),
            );
        }
    };

    let outcome = CompanyService::update(
        &state.db,
        &state.config.upload_dir,
        id,
        input,
        submission.image,
    )
    .await?;
    Ok(redirect(&format!("/company/{}", outcome.id())))
}

async fn delete_confirm(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let Some(CompanyDetail { company, games }) =
        CompanyService::find_with_games(&state.db, id).await?
    else {
        return Ok(redirect("/companies"));
    };
    render_delete(&state, company, games)
}

async fn delete_company(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    match CompanyService::delete(&state.db, id).await? {
        DeleteOutcome::Blocked { entity, games } => render_delete(&state, entity, games),
        DeleteOutcome::Deleted | DeleteOutcome::Missing => Ok(redirect("/companies")),
    }
}

fn render_delete(
    state: &AppState,
    company: company::Model,
    games: Vec<game::Model>,
) -> Result<Response, AppError> {
    state.views.render(
        "company/delete.html",
        &CompanyDetailView {
            title: "Delete Company".to_string(),
            company: company.into(),
            games,
        },
    )
}
