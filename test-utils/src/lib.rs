//! UCSB Fixtures Test Utils
//!
//! Provides the canned sample records used by front-end component tests and API mocks.
//! Every fixture is a hand-written literal returned as a fresh owned value, so a test can
//! mutate what it receives without leaking state into any other test.
//!
//! # Overview
//!
//! - **fixture**: one module per entity type, each with a singular entry (`one_*`), a
//!   multi-record entry (`three_*`) and an `entity_builder()` for customized variants
//! - **catalog**: the same entries addressed through the `Fixture` enum, for code that
//!   needs to enumerate the catalog or resolve a front-end export name
//! - **error**: errors raised when resolving or encoding fixtures by name
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! #[test]
//! fn renders_every_article() {
//!     let articles = fixture::article::three_articles();
//!
//!     assert_eq!(articles.len(), 3);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod fixture;
