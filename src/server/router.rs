use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{api::ErrorDto, fixture::FixtureSummaryDto},
    server::controller::{
        article::{self, all_articles, get_article},
        fixture::{self, get_fixture, list_fixtures},
        menu_item::{self, all_menu_items, get_menu_item},
        organization::{self, all_organizations, get_organization},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        article::all_articles,
        article::get_article,
        menu_item::all_menu_items,
        menu_item::get_menu_item,
        organization::all_organizations,
        organization::get_organization,
        fixture::list_fixtures,
        fixture::get_fixture,
    ),
    components(schemas(
        entity::article::Model,
        entity::ucsb_dining_commons_menu_item::Model,
        entity::ucsb_organization::Model,
        ErrorDto,
        FixtureSummaryDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router {
    Router::new()
        .route("/api/articles", get(get_article))
        .route("/api/articles/all", get(all_articles))
        .route("/api/ucsbdiningcommonsmenuitem", get(get_menu_item))
        .route("/api/ucsbdiningcommonsmenuitem/all", get(all_menu_items))
        .route("/api/ucsborganization", get(get_organization))
        .route("/api/ucsborganization/all", get(all_organizations))
        .route("/api/fixtures", get(list_fixtures))
        .route("/api/fixtures/{name}", get(get_fixture))
        .route("/api/docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
