use serde::Serialize;
use test_utils::catalog::{EntityType, Entry, Fixture};
use utoipa::ToSchema;

/// Summary of one catalog entry, as listed by `GET /api/fixtures`.
#[derive(Serialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSummaryDto {
    /// Export name, e.g. `threeArticles`.
    pub name: String,
    #[schema(value_type = String, example = "article")]
    pub entity_type: EntityType,
    #[schema(value_type = String, example = "three")]
    pub entry: Entry,
    pub count: usize,
}

impl FixtureSummaryDto {
    pub fn from_fixture(fixture: Fixture) -> Self {
        Self {
            name: fixture.export_name().to_string(),
            entity_type: fixture.entity_type(),
            entry: fixture.entry(),
            count: fixture.records().len(),
        }
    }
}
