mod common;

use axum::http::StatusCode;
use game_inventory::repository::GenreRepository;

use common::{create_company, create_game, create_genre, get, post_form, test_app};

// ─────────────────────────────────────────────────────────────────────────────
// Create
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_genre_redirects_to_detail() {
    let (app, _db) = test_app().await;

    let response = post_form(&app, "/genre/create", &[("name", "Action")]).await;
    assert_eq!(response.status, StatusCode::FOUND);
    let id = response.redirect_id();
    assert_eq!(response.location.as_deref(), Some(format!("/genre/{id}").as_str()));

    let detail = get(&app, &format!("/genre/{id}")).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Genre: Action"));
}

#[tokio::test]
async fn test_create_duplicate_genre_redirects_to_existing() {
    let (app, db) = test_app().await;

    let first = post_form(&app, "/genre/create", &[("name", "Action")]).await;
    let second = post_form(&app, "/genre/create", &[("name", "Action")]).await;

    assert_eq!(first.status, StatusCode::FOUND);
    assert_eq!(second.status, StatusCode::FOUND);
    assert_eq!(first.location, second.location);

    let genres = GenreRepository::find_all(&db).await.unwrap_or_default();
    assert_eq!(genres.len(), 1);
}

#[tokio::test]
async fn test_create_genre_rejects_short_name() {
    let (app, db) = test_app().await;

    let response = post_form(&app, "/genre/create", &[("name", " ab ")]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Minimum genre name length is 3"));
    assert!(response.body.contains("value=\"ab\""));

    let genres = GenreRepository::find_all(&db).await.unwrap_or_default();
    assert!(genres.is_empty());
}

#[tokio::test]
async fn test_genre_name_is_escaped() {
    let (app, db) = test_app().await;

    let id = create_genre(&app, "<b>Roguelike</b>").await;

    let genre = GenreRepository::find_by_id(&db, id).await.ok().flatten();
    assert_eq!(
        genre.map(|g| g.name),
        Some("&lt;b&gt;Roguelike&lt;&#x2F;b&gt;".to_string())
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Update
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_genre() {
    let (app, db) = test_app().await;
    let id = create_genre(&app, "Platformer").await;

    let form = get(&app, &format!("/genre/{id}/update")).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("value=\"Platformer\""));

    let response = post_form(&app, &format!("/genre/{id}/update"), &[("name", "Platform")]).await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.redirect_id(), id);

    let genre = GenreRepository::find_by_id(&db, id).await.ok().flatten();
    assert_eq!(genre.map(|g| g.name), Some("Platform".to_string()));
}

#[tokio::test]
async fn test_update_genre_to_taken_name_redirects_to_owner() {
    let (app, db) = test_app().await;
    let action = create_genre(&app, "Action").await;
    let puzzle = create_genre(&app, "Puzzle").await;

    let response = post_form(&app, &format!("/genre/{puzzle}/update"), &[("name", "Action")]).await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.redirect_id(), action);

    let genre = GenreRepository::find_by_id(&db, puzzle).await.ok().flatten();
    assert_eq!(genre.map(|g| g.name), Some("Puzzle".to_string()));
}

#[tokio::test]
async fn test_update_missing_genre_is_not_found() {
    let (app, _db) = test_app().await;

    let response = post_form(&app, "/genre/42/update", &[("name", "Strategy")]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Genre not found"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_genre_blocked_by_games() {
    let (app, db) = test_app().await;
    let company = create_company(&app, "Nintendo").await;
    let genre = create_genre(&app, "Platformer").await;
    create_game(&app, "Super Mario Odyssey", company, &[genre], &[]).await;

    let response = post_form(&app, &format!("/genre/{genre}/delete"), &[("id", "ignored")]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Delete the following games"));
    assert!(response.body.contains("Super Mario Odyssey"));

    let still_there = GenreRepository::find_by_id(&db, genre).await.ok().flatten();
    assert!(still_there.is_some());
}

#[tokio::test]
async fn test_delete_unused_genre() {
    let (app, _db) = test_app().await;
    let id = create_genre(&app, "Rhythm").await;

    let confirm = get(&app, &format!("/genre/{id}/delete")).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("Do you really want to delete this genre?"));

    let response = post_form(&app, &format!("/genre/{id}/delete"), &[("id", "")]).await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location.as_deref(), Some("/genres"));

    let detail = get(&app, &format!("/genre/{id}")).await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_confirm_for_missing_genre_redirects() {
    let (app, _db) = test_app().await;

    let response = get(&app, "/genre/99/delete").await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location.as_deref(), Some("/genres"));
}

#[tokio::test]
async fn test_genre_list() {
    let (app, _db) = test_app().await;

    let empty = get(&app, "/genres").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert!(empty.body.contains("There are no genres."));

    create_genre(&app, "Shooter").await;
    create_genre(&app, "Racing").await;

    let list = get(&app, "/genres").await;
    let shooter = list.body.find("Shooter");
    let racing = list.body.find("Racing");
    assert!(shooter.is_some() && racing.is_some());
    assert!(shooter < racing);
}
