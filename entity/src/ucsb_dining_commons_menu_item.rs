use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A dish served at one station of a UCSB dining commons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[cfg_attr(feature = "openapi", schema(as = UcsbDiningCommonsMenuItem))]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: i64,
    /// Short code of the dining hall, e.g. `"Ortega"`.
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}
