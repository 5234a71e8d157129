//! Record types for the UCSB sample domain.
//!
//! Each module defines a `Model` for one entity type. The three entity types are
//! independent of each other: there are no foreign keys or shared identifiers.
//! Field names serialize in camelCase to match the JSON the front end consumes.

pub mod article;
pub mod prelude;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
