use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// An article submitted to the site.
///
/// `date_added` is a local timestamp with no timezone, rendered in JSON as
/// `YYYY-MM-DDTHH:MM:SS`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[cfg_attr(feature = "openapi", schema(as = Article))]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub explanation: String,
    /// Email of the person who submitted the article.
    pub email: String,
    pub date_added: NaiveDateTime,
}
