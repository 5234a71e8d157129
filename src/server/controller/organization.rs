use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use entity::ucsb_organization;
use serde::Deserialize;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::fixture::FixtureService},
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "ucsborganization";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgCodeParams {
    pub org_code: String,
}

/// List all student organizations.
#[utoipa::path(
    get,
    path = "/api/ucsborganization/all",
    tag = ORGANIZATION_TAG,
    responses(
        (status = 200, description = "The multi-record organization fixture", body = Vec<ucsb_organization::Model>)
    ),
)]
pub async fn all_organizations() -> Json<Vec<ucsb_organization::Model>> {
    Json(FixtureService::new().all_organizations())
}

/// Get a single organization by its code.
///
/// # Returns
/// - `200 OK` - Organization fixture with the requested code
/// - `404 Not Found` - No organization fixture has that code
#[utoipa::path(
    get,
    path = "/api/ucsborganization",
    tag = ORGANIZATION_TAG,
    params(
        ("orgCode" = String, Query, description = "Organization code, e.g. ZBT")
    ),
    responses(
        (status = 200, description = "Organization fixture with the requested code", body = ucsb_organization::Model),
        (status = 400, description = "Missing or malformed query parameter", body = ErrorDto),
        (status = 404, description = "No organization fixture has that code", body = ErrorDto)
    ),
)]
pub async fn get_organization(
    query: Result<Query<OrgCodeParams>, QueryRejection>,
) -> Result<Json<ucsb_organization::Model>, AppError> {
    let Query(params) = query?;
    let org = FixtureService::new().organization_by_code(&params.org_code)?;

    Ok(Json(org))
}
