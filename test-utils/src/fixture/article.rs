//! Article fixtures.
//!
//! Every article shares the same title, explanation, submitter and timestamp; the entries
//! differ only in `id` and, for one record, `url`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use entity::article;

/// Title shared by every article fixture.
pub const DEFAULT_TITLE: &str = "Test Articles";

/// Default article URL.
pub const DEFAULT_URL: &str = "https://www.google.com";

/// URL of the second record in `three_articles`.
pub const IMAGES_URL: &str = "https://www.images.google.com";

/// Explanation shared by every article fixture.
pub const DEFAULT_EXPLANATION: &str = "1";

/// Submitter email shared by every article fixture.
pub const DEFAULT_EMAIL: &str = "me@ucsb.edu";

/// Timestamp shared by every article fixture: `2022-01-03T00:10:00`.
pub const DEFAULT_DATE_ADDED: NaiveDateTime = match (
    NaiveDate::from_ymd_opt(2022, 1, 3),
    NaiveTime::from_hms_opt(0, 10, 0),
) {
    (Some(date), Some(time)) => NaiveDateTime::new(date, time),
    _ => panic!("invalid article fixture timestamp"),
};

/// Creates the singular article entry.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Articles"`
/// - url: `"https://www.google.com"`
/// - explanation: `"1"`
/// - email: `"me@ucsb.edu"`
/// - date_added: `2022-01-03T00:10:00`
///
/// # Example
///
/// ```rust,ignore
/// let article = fixture::article::one_article();
/// assert_eq!(article.id, 1);
/// ```
pub fn one_article() -> article::Model {
    entity_builder().build()
}

/// Creates the multi-record article entry: ids 2, 3 and 4, in that order.
pub fn three_articles() -> Vec<article::Model> {
    vec![
        entity_builder().id(2).build(),
        entity_builder().id(3).url(IMAGES_URL).build(),
        entity_builder().id(4).build(),
    ]
}

/// Creates an article builder seeded with the singular entry's values.
///
/// # Example
///
/// ```rust,ignore
/// let article = fixture::article::entity_builder()
///     .id(17)
///     .title("Using testing-playground with React Testing Library")
///     .build();
/// ```
pub fn entity_builder() -> ArticleEntityBuilder {
    ArticleEntityBuilder::default()
}

/// Builder for customized article records.
pub struct ArticleEntityBuilder {
    id: i64,
    title: String,
    url: String,
    explanation: String,
    email: String,
    date_added: NaiveDateTime,
}

impl Default for ArticleEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            url: DEFAULT_URL.to_string(),
            explanation: DEFAULT_EXPLANATION.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            date_added: DEFAULT_DATE_ADDED,
        }
    }
}

impl ArticleEntityBuilder {
    /// Sets the article ID.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the article title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the article URL. The value is not validated.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the explanation text.
    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Sets the submitter email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the timestamp the article was added.
    pub fn date_added(mut self, date_added: NaiveDateTime) -> Self {
        self.date_added = date_added;
        self
    }

    /// Builds the article record.
    pub fn build(self) -> article::Model {
        article::Model {
            id: self.id,
            title: self.title,
            url: self.url,
            explanation: self.explanation,
            email: self.email,
            date_added: self.date_added,
        }
    }
}
