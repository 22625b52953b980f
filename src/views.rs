use axum::response::{Html, IntoResponse, Response};
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::error::AppError;

/// Templates compiled into the binary, keyed by the name handlers render them by.
const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("error.html", include_str!("../templates/error.html")),
    ("company/list.html", include_str!("../templates/company/list.html")),
    ("company/detail.html", include_str!("../templates/company/detail.html")),
    ("company/form.html", include_str!("../templates/company/form.html")),
    ("company/delete.html", include_str!("../templates/company/delete.html")),
    ("game/list.html", include_str!("../templates/game/list.html")),
    ("game/detail.html", include_str!("../templates/game/detail.html")),
    ("game/form.html", include_str!("../templates/game/form.html")),
    ("game/delete.html", include_str!("../templates/game/delete.html")),
    ("genre/list.html", include_str!("../templates/genre/list.html")),
    ("genre/detail.html", include_str!("../templates/genre/detail.html")),
    ("genre/form.html", include_str!("../templates/genre/form.html")),
    ("genre/delete.html", include_str!("../templates/genre/delete.html")),
];

/// HTML view renderer.
///
/// User-supplied text is escaped when it enters the system (see
/// [`crate::validation::escape`]), so values are emitted verbatim here.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compile every embedded template.
    ///
    /// # Errors
    ///
    /// Returns an error if a template has a syntax error.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render `name` with `context` into an HTML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or rendering fails.
    pub fn render_string<S: Serialize>(&self, name: &str, context: &S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context)
    }

    /// Render `name` with `context` into a `200 OK` HTML response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if rendering fails.
    pub fn render<S: Serialize>(&self, name: &str, context: &S) -> Result<Response, AppError> {
        let html = self.render_string(name, context)?;
        Ok(Html(html).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct ErrorView<'a> {
        title: &'a str,
        status: u16,
        message: &'a str,
        detail: Option<&'a str>,
    }

    #[test]
    fn test_all_templates_compile() {
        assert!(Views::new().is_ok());
    }

    #[test]
    fn test_error_detail_is_escaped() {
        let views = Views::new().ok();
        let html = views
            .and_then(|v| {
                v.render_string(
                    "error.html",
                    &ErrorView {
                        title: "Error",
                        status: 500,
                        message: "An internal error occurred",
                        detail: Some("near \"<script>\""),
                    },
                )
                .ok()
            })
            .unwrap_or_default();
        assert!(html.contains("An internal error occurred"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = Views::new()
            .ok()
            .and_then(|v| {
                v.render_string(
                    "error.html",
                    &ErrorView {
                        title: "Error",
                        status: 400,
                        message: "Bad field <b>name</b>",
                        detail: None,
                    },
                )
                .ok()
            })
            .unwrap_or_default();
        assert!(html.contains("Bad field &lt;b&gt;name&lt;/b&gt;"));
        assert!(!html.contains("<b>name</b>"));
    }

    #[test]
    fn test_list_links_and_empty_state() {
        let views = Views::new();
        assert!(views.is_ok());
        let Ok(views) = views else { return };

        let html = views
            .render_string(
                "genre/list.html",
                &serde_json::json!({
                    "title": "Genres",
                    "genres": [{ "id": 7, "name": "Hack &amp; Slash" }],
                }),
            )
            .unwrap_or_default();
        assert!(html.contains(r#"<a href="/genre/7">Hack &amp; Slash</a>"#));

        let empty = views
            .render_string("genre/list.html", &serde_json::json!({ "title": "Genres", "genres": [] }))
            .unwrap_or_default();
        assert!(empty.contains("There are no genres."));
    }

    #[test]
    fn test_image_names_are_url_encoded() {
        let html = Views::new()
            .ok()
            .and_then(|v| {
                v.render_string(
                    "company/detail.html",
                    &serde_json::json!({
                        "title": "Company: Sega",
                        "company": { "id": 1, "name": "Sega", "image": "1700 -- logo.png" },
                        "games": [],
                    }),
                )
                .ok()
            })
            .unwrap_or_default();
        assert!(html.contains("/images/1700%20--%20logo.png"));
    }
}
