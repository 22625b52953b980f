//! Form validation and sanitization.
//!
//! Each form type runs a single pass that trims, escapes and coerces every field,
//! collecting all failures instead of stopping at the first one. A failed pass
//! returns [`Rejected`] carrying the sanitized values so the form can be re-rendered
//! pre-filled.

use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::entities::{Platform, company};

/// Inclusive bounds for a game's price and stock count.
pub const QUANTITY_RANGE: RangeInclusive<i32> = 1..=1000;

const MIN_NAME_LEN: usize = 3;

/// A single failed rule, shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// A form that failed validation, with its sanitized values and every error found.
#[derive(Debug, Clone)]
pub struct Rejected<F> {
    pub form: F,
    pub errors: Vec<FieldError>,
}

/// Neutralize HTML-significant characters.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse a multi-valued id field, dropping non-numeric entries and duplicates
/// while keeping submission order.
#[must_use]
pub fn id_set(values: &[String]) -> Vec<i32> {
    let mut ids = Vec::with_capacity(values.len());
    for id in values.iter().filter_map(|v| v.trim().parse::<i32>().ok()) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
}

#[derive(Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Checks the trimmed length and returns the escaped value.
    fn name(&mut self, field: &'static str, raw: &str, message: &str) -> String {
        let value = raw.trim();
        if value.chars().count() < MIN_NAME_LEN {
            self.fail(field, message);
        }
        escape(value)
    }

    fn quantity(
        &mut self,
        field: &'static str,
        raw: &str,
        required: &str,
        out_of_range: &str,
    ) -> Option<i32> {
        let value = raw.trim();
        if value.is_empty() {
            self.fail(field, required);
            return None;
        }
        match value.parse::<i32>() {
            Ok(n) if QUANTITY_RANGE.contains(&n) => Some(n),
            _ => {
                self.fail(field, out_of_range);
                None
            }
        }
    }

    fn finish<F, T>(self, form: F, input: Option<T>) -> Result<T, Rejected<F>> {
        match input {
            Some(input) if self.errors.is_empty() => Ok(input),
            _ => Err(Rejected {
                form,
                errors: self.errors,
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Company
// ─────────────────────────────────────────────────────────────────────────────

/// Company form values as submitted (or as loaded for editing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyForm {
    pub name: String,
    pub location: String,
    pub founded: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInput {
    pub name: String,
    pub location: Option<String>,
    pub founded: NaiveDate,
}

impl CompanyForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns the sanitized form and every failed rule when the input is invalid.
    pub fn validate(&self) -> Result<CompanyInput, Rejected<Self>> {
        let mut checks = Checks::default();

        let name = checks.name("name", &self.name, "Minimum company name length is 3");

        // Blank means "not provided"; anything else must be long enough once trimmed.
        let location = if self.location.is_empty() {
            None
        } else {
            let trimmed = self.location.trim();
            if trimmed.chars().count() < MIN_NAME_LEN {
                checks.fail("location", "Minimum location name length is 3");
            }
            Some(escape(trimmed))
        };

        let founded_raw = self.founded.trim();
        let founded = if founded_raw.is_empty() {
            Some(company::unknown_founded())
        } else {
            let parsed = parse_iso_date(founded_raw);
            if parsed.is_none() {
                checks.fail("founded", "Invalid date");
            }
            parsed
        };

        let sanitized = Self {
            name: name.clone(),
            location: location.clone().unwrap_or_default(),
            founded: escape(founded_raw),
        };

        let input = founded.map(|founded| CompanyInput {
            name,
            location,
            founded,
        });
        checks.finish(sanitized, input)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Game
// ─────────────────────────────────────────────────────────────────────────────

/// Game form values as submitted. `genres` and `platforms` hold the raw ids of
/// every ticked checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameForm {
    pub name: String,
    pub price: String,
    pub copies: String,
    pub company: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInput {
    pub name: String,
    pub price: i32,
    pub copies: i32,
    pub company_id: i32,
    pub genre_ids: Vec<i32>,
    pub platforms: Vec<Platform>,
}

impl GameInput {
    #[must_use]
    pub fn available_on(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

impl From<&GameInput> for GameForm {
    fn from(input: &GameInput) -> Self {
        Self {
            name: input.name.clone(),
            price: input.price.to_string(),
            copies: input.copies.to_string(),
            company: input.company_id.to_string(),
            genres: input.genre_ids.iter().map(ToString::to_string).collect(),
            platforms: input.platforms.iter().map(|p| p.id().to_string()).collect(),
        }
    }
}

impl GameForm {
    /// Sanitized genre ids.
    #[must_use]
    pub fn genre_ids(&self) -> Vec<i32> {
        id_set(&self.genres)
    }

    /// Submitted platforms, ignoring unknown ids.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        id_set(&self.platforms)
            .into_iter()
            .filter_map(Platform::from_id)
            .collect()
    }

    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns the sanitized form and every failed rule when the input is invalid.
    pub fn validate(&self) -> Result<GameInput, Rejected<Self>> {
        let mut checks = Checks::default();

        let name = checks.name("name", &self.name, "Minimum game name length is 3");
        let price = checks.quantity("price", &self.price, "Price required", "Min Max price 1-1000");
        let copies = checks.quantity(
            "copies",
            &self.copies,
            "Copies required",
            "Min Max copies 1-1000",
        );

        let company_id = self.company.trim().parse::<i32>().ok();
        if company_id.is_none() {
            checks.fail("company", "Company required");
        }

        let genre_ids = self.genre_ids();
        let platforms = self.platforms();

        let sanitized = Self {
            name: name.clone(),
            price: escape(self.price.trim()),
            copies: escape(self.copies.trim()),
            company: escape(self.company.trim()),
            genres: genre_ids.iter().map(ToString::to_string).collect(),
            platforms: platforms.iter().map(|p| p.id().to_string()).collect(),
        };

        let input = match (price, copies, company_id) {
            (Some(price), Some(copies), Some(company_id)) => Some(GameInput {
                name,
                price,
                copies,
                company_id,
                genre_ids,
                platforms,
            }),
            _ => None,
        };
        checks.finish(sanitized, input)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Genre
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenreForm {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreInput {
    pub name: String,
}

impl GenreForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns the sanitized form and the failed rule when the name is too short.
    pub fn validate(&self) -> Result<GenreInput, Rejected<Self>> {
        let mut checks = Checks::default();
        let name = checks.name("name", &self.name, "Minimum genre name length is 3");
        let sanitized = Self { name: name.clone() };
        checks.finish(sanitized, Some(GenreInput { name }))
    }
}
