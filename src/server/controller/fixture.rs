use axum::{extract::Path, Json};
use test_utils::catalog::Fixture;

use crate::{
    model::{api::ErrorDto, fixture::FixtureSummaryDto},
    server::{error::AppError, service::fixture::FixtureService},
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static FIXTURE_TAG: &str = "fixtures";

/// List every catalog entry.
///
/// # Returns
/// - `200 OK` - One summary per entry, grouped by entity type
#[utoipa::path(
    get,
    path = "/api/fixtures",
    tag = FIXTURE_TAG,
    responses(
        (status = 200, description = "Summary of every catalog entry", body = Vec<FixtureSummaryDto>)
    ),
)]
pub async fn list_fixtures() -> Json<Vec<FixtureSummaryDto>> {
    Json(
        Fixture::ALL
            .into_iter()
            .map(FixtureSummaryDto::from_fixture)
            .collect(),
    )
}

/// Get a catalog entry by its export name.
///
/// Singular entries are returned as a JSON object, multi-record entries as an array.
///
/// # Returns
/// - `200 OK` - The entry's records, verbatim
/// - `404 Not Found` - No entry is exported under that name
#[utoipa::path(
    get,
    path = "/api/fixtures/{name}",
    tag = FIXTURE_TAG,
    params(
        ("name" = String, Path, description = "Export name, e.g. threeArticles")
    ),
    responses(
        (status = 200, description = "The entry's records", content_type = "application/json"),
        (status = 404, description = "Unknown fixture name", body = ErrorDto)
    ),
)]
pub async fn get_fixture(Path(name): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let (_, records) = FixtureService::new().entry(&name)?;

    Ok(Json(records.to_json()?))
}
