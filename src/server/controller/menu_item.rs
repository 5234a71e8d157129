use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use entity::ucsb_dining_commons_menu_item;
use serde::Deserialize;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::fixture::FixtureService},
};

/// Tag for grouping menu item endpoints in OpenAPI documentation
pub static MENU_ITEM_TAG: &str = "ucsbdiningcommonsmenuitem";

#[derive(Deserialize)]
pub struct MenuItemIdParams {
    pub id: i64,
}

/// List all dining commons menu items.
#[utoipa::path(
    get,
    path = "/api/ucsbdiningcommonsmenuitem/all",
    tag = MENU_ITEM_TAG,
    responses(
        (status = 200, description = "The multi-record menu item fixture", body = Vec<ucsb_dining_commons_menu_item::Model>)
    ),
)]
pub async fn all_menu_items() -> Json<Vec<ucsb_dining_commons_menu_item::Model>> {
    Json(FixtureService::new().all_menu_items())
}

/// Get a single menu item by id.
///
/// # Returns
/// - `200 OK` - Menu item fixture with the requested id
/// - `404 Not Found` - No menu item fixture has that id
#[utoipa::path(
    get,
    path = "/api/ucsbdiningcommonsmenuitem",
    tag = MENU_ITEM_TAG,
    params(
        ("id" = i64, Query, description = "Menu item id")
    ),
    responses(
        (status = 200, description = "Menu item fixture with the requested id", body = ucsb_dining_commons_menu_item::Model),
        (status = 400, description = "Missing or malformed query parameter", body = ErrorDto),
        (status = 404, description = "No menu item fixture has that id", body = ErrorDto)
    ),
)]
pub async fn get_menu_item(
    query: Result<Query<MenuItemIdParams>, QueryRejection>,
) -> Result<Json<ucsb_dining_commons_menu_item::Model>, AppError> {
    let Query(params) = query?;
    let item = FixtureService::new().menu_item_by_id(params.id)?;

    Ok(Json(item))
}
