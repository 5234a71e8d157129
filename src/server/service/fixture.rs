use entity::{article, ucsb_dining_commons_menu_item, ucsb_organization};
use test_utils::{
    catalog::{Fixture, FixtureRecords},
    fixture,
};

use crate::server::error::AppError;

/// Serves catalog entries the way the real backend's read endpoints would.
///
/// Listings return the multi-record entry of an entity type. Single-record lookups search
/// every entry of that entity type, singular entry first, so each record a front-end test
/// can receive from a listing can also be fetched on its own.
pub struct FixtureService;

impl FixtureService {
    pub fn new() -> Self {
        Self
    }

    /// Resolves a catalog entry by its export name.
    pub fn entry(&self, name: &str) -> Result<(Fixture, FixtureRecords), AppError> {
        let fixture: Fixture = name.parse()?;

        tracing::debug!(fixture = %fixture, "Serving fixture entry");

        Ok((fixture, fixture.records()))
    }

    pub fn all_articles(&self) -> Vec<article::Model> {
        fixture::article::three_articles()
    }

    /// Gets the article with the given id from any article entry.
    pub fn article_by_id(&self, id: i64) -> Result<article::Model, AppError> {
        std::iter::once(fixture::article::one_article())
            .chain(fixture::article::three_articles())
            .find(|article| article.id == id)
            .ok_or_else(|| AppError::NotFound {
                entity: "Articles",
                id: id.to_string(),
            })
    }

    pub fn all_menu_items(&self) -> Vec<ucsb_dining_commons_menu_item::Model> {
        fixture::ucsb_dining_commons_menu_item::three_menu_items()
    }

    /// Gets the menu item with the given id from any menu item entry.
    pub fn menu_item_by_id(
        &self,
        id: i64,
    ) -> Result<ucsb_dining_commons_menu_item::Model, AppError> {
        std::iter::once(fixture::ucsb_dining_commons_menu_item::one_menu_item())
            .chain(fixture::ucsb_dining_commons_menu_item::three_menu_items())
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound {
                entity: "UCSBDiningCommonsMenuItem",
                id: id.to_string(),
            })
    }

    pub fn all_organizations(&self) -> Vec<ucsb_organization::Model> {
        fixture::ucsb_organization::three_organizations()
    }

    /// Gets the organization with the given code from any organization entry.
    ///
    /// Codes are matched exactly; `zbt` does not find `ZBT`.
    pub fn organization_by_code(
        &self,
        org_code: &str,
    ) -> Result<ucsb_organization::Model, AppError> {
        std::iter::once(fixture::ucsb_organization::one_organization())
            .chain(fixture::ucsb_organization::three_organizations())
            .find(|org| org.org_code == org_code)
            .ok_or_else(|| AppError::NotFound {
                entity: "UCSBOrganization",
                id: org_code.to_string(),
            })
    }
}

impl Default for FixtureService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_entry_by_export_name() {
        let (fixture, records) = FixtureService::new()
            .entry("threeUCSBDiningCommonsMenuItem")
            .unwrap();

        assert_eq!(fixture, Fixture::ThreeMenuItems);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn unknown_entry_is_an_error() {
        let result = FixtureService::new().entry("ucsbOrganizaitonFixtures");

        assert!(matches!(result, Err(AppError::FixtureErr(_))));
    }

    #[test]
    fn finds_articles_from_both_entries() {
        let service = FixtureService::new();

        assert_eq!(service.article_by_id(1).unwrap(), fixture::article::one_article());
        assert_eq!(
            service.article_by_id(3).unwrap().url,
            "https://www.images.google.com"
        );
    }

    #[test]
    fn missing_article_reports_backend_message() {
        let err = FixtureService::new().article_by_id(17).unwrap_err();

        assert_eq!(err.to_string(), "Articles with id 17 not found");
    }

    #[test]
    fn finds_menu_item_by_id() {
        let item = FixtureService::new().menu_item_by_id(3).unwrap();

        assert_eq!(item.dining_commons_code, "Portola");
        assert_eq!(item.name, "Sushi");
    }

    #[test]
    fn organization_codes_match_exactly() {
        let service = FixtureService::new();

        assert!(service.organization_by_code("ZBT").unwrap().inactive);
        assert!(!service.organization_by_code("ZTT").unwrap().inactive);
        assert!(service.organization_by_code("zbt").is_err());
    }
}
