use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use entity::article;
use serde::Deserialize;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::fixture::FixtureService},
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "articles";

#[derive(Deserialize)]
pub struct ArticleIdParams {
    pub id: i64,
}

/// List all articles.
///
/// # Returns
/// - `200 OK` - The `threeArticles` fixture
#[utoipa::path(
    get,
    path = "/api/articles/all",
    tag = ARTICLE_TAG,
    responses(
        (status = 200, description = "The multi-record article fixture", body = Vec<article::Model>)
    ),
)]
pub async fn all_articles() -> Json<Vec<article::Model>> {
    Json(FixtureService::new().all_articles())
}

/// Get a single article by id.
///
/// # Returns
/// - `200 OK` - Article fixture with the requested id
/// - `404 Not Found` - No article fixture has that id
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("id" = i64, Query, description = "Article id")
    ),
    responses(
        (status = 200, description = "Article fixture with the requested id", body = article::Model),
        (status = 400, description = "Missing or malformed query parameter", body = ErrorDto),
        (status = 404, description = "No article fixture has that id", body = ErrorDto)
    ),
)]
pub async fn get_article(
    query: Result<Query<ArticleIdParams>, QueryRejection>,
) -> Result<Json<article::Model>, AppError> {
    let Query(params) = query?;
    let article = FixtureService::new().article_by_id(params.id)?;

    Ok(Json(article))
}
