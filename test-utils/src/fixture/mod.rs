//! Test fixtures providing reusable sample records.
//!
//! Each entity type has its own module exposing a singular entry and a multi-record entry.
//! Entries are plain functions rather than shared statics: every call builds the records
//! again, so no test can observe another test's edits.
//!
//! # When to Use Fixtures
//!
//! - **Component tests**: Render a single record or a list without a backend
//! - **API mocks**: Reply to mocked requests with canned payloads
//! - **Expected outputs**: Compare what a component submits against a known record
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let org = fixture::ucsb_organization::one_organization();
//! assert_eq!(org.org_code, "ZBT");
//!
//! // Variant of the singular entry
//! let renamed = fixture::ucsb_organization::entity_builder()
//!     .org_code("ZZZ")
//!     .build();
//! ```

pub mod article;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;

pub use article::{entity_builder as article_entity_builder, one_article, three_articles};
pub use ucsb_dining_commons_menu_item::{
    entity_builder as menu_item_entity_builder, one_menu_item, three_menu_items,
};
pub use ucsb_organization::{
    entity_builder as organization_entity_builder, one_organization, three_organizations,
};
