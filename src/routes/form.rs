use axum::Form;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;

use crate::error::AppError;
use crate::upload::ImageUpload;
use crate::validation::{CompanyForm, GameForm, GenreForm};

/// Name of the file part carrying an uploaded image.
const IMAGE_FIELD: &str = "image";

/// A submitted form, read from either a `multipart/form-data` or an
/// `application/x-www-form-urlencoded` body.
///
/// Repeated fields (checkbox groups) keep every value in submission order.
#[derive(Debug, Default)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
    pub image: Option<ImageUpload>,
}

impl FormSubmission {
    /// First value submitted for `name`, or an empty string.
    #[must_use]
    pub fn value(&self, name: &str) -> String {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    /// Every value submitted for `name`.
    #[must_use]
    pub fn values(&self, name: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }

    #[must_use]
    pub fn company_form(&self) -> CompanyForm {
        CompanyForm {
            name: self.value("name"),
            location: self.value("location"),
            founded: self.value("founded"),
        }
    }

    #[must_use]
    pub fn game_form(&self) -> GameForm {
        GameForm {
            name: self.value("name"),
            price: self.value("price"),
            copies: self.value("copies"),
            company: self.value("company"),
            genres: self.values("genres"),
            platforms: self.values("platforms"),
        }
    }

    #[must_use]
    pub fn genre_form(&self) -> GenreForm {
        GenreForm {
            name: self.value("name"),
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
            let name = field.name().unwrap_or_default().to_string();

            // Text fields carry no file name.
            let Some(file_name) = field.file_name().map(str::to_string) else {
                let value = field.text().await.map_err(bad_request)?;
                submission.fields.push((name, value));
                continue;
            };

            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(bad_request)?;
            if name == IMAGE_FIELD && !data.is_empty() {
                submission.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    data,
                });
            }
        }

        Ok(submission)
    }
}

fn bad_request(err: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(err.to_string())
}

impl<S> FromRequest<S> for FormSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(bad_request)?;
            return Self::from_multipart(multipart).await;
        }

        let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(bad_request)?;
        Ok(Self {
            fields,
            image: None,
        })
    }
}
