//! Enumerated access to every fixture entry.
//!
//! `Fixture` names each catalog entry with a variant, so code that must walk the whole
//! catalog (or serve it) never relies on a free-form string map. The only string entry
//! point is `FromStr`, which accepts the export names the front-end tests import and
//! rejects anything else with `FixtureError::UnknownFixture`.

use std::{fmt, str::FromStr};

use entity::prelude::{Article, UcsbDiningCommonsMenuItem, UcsbOrganization};
use serde::Serialize;

use crate::{error::FixtureError, fixture};

/// Entity type a catalog entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Article,
    UcsbDiningCommonsMenuItem,
    UcsbOrganization,
}

/// Shape of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Entry {
    /// Exactly one representative record.
    One,
    /// An ordered sequence of three representative records.
    Three,
}

/// A single named catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fixture {
    OneArticle,
    ThreeArticles,
    OneMenuItem,
    ThreeMenuItems,
    OneOrganization,
    ThreeOrganizations,
}

impl Fixture {
    /// Every catalog entry, grouped by entity type with the singular entry first.
    pub const ALL: [Fixture; 6] = [
        Fixture::OneArticle,
        Fixture::ThreeArticles,
        Fixture::OneMenuItem,
        Fixture::ThreeMenuItems,
        Fixture::OneOrganization,
        Fixture::ThreeOrganizations,
    ];

    /// Resolves an entity type and entry shape to its catalog entry.
    pub const fn new(entity_type: EntityType, entry: Entry) -> Self {
        match (entity_type, entry) {
            (EntityType::Article, Entry::One) => Fixture::OneArticle,
            (EntityType::Article, Entry::Three) => Fixture::ThreeArticles,
            (EntityType::UcsbDiningCommonsMenuItem, Entry::One) => Fixture::OneMenuItem,
            (EntityType::UcsbDiningCommonsMenuItem, Entry::Three) => Fixture::ThreeMenuItems,
            (EntityType::UcsbOrganization, Entry::One) => Fixture::OneOrganization,
            (EntityType::UcsbOrganization, Entry::Three) => Fixture::ThreeOrganizations,
        }
    }

    pub const fn entity_type(self) -> EntityType {
        match self {
            Fixture::OneArticle | Fixture::ThreeArticles => EntityType::Article,
            Fixture::OneMenuItem | Fixture::ThreeMenuItems => {
                EntityType::UcsbDiningCommonsMenuItem
            }
            Fixture::OneOrganization | Fixture::ThreeOrganizations => {
                EntityType::UcsbOrganization
            }
        }
    }

    pub const fn entry(self) -> Entry {
        match self {
            Fixture::OneArticle | Fixture::OneMenuItem | Fixture::OneOrganization => Entry::One,
            Fixture::ThreeArticles | Fixture::ThreeMenuItems | Fixture::ThreeOrganizations => {
                Entry::Three
            }
        }
    }

    /// Name the entry is exported under for front-end tests.
    pub const fn export_name(self) -> &'static str {
        match self {
            Fixture::OneArticle => "oneArticle",
            Fixture::ThreeArticles => "threeArticles",
            Fixture::OneMenuItem => "oneUCSBDiningCommonsMenuItem",
            Fixture::ThreeMenuItems => "threeUCSBDiningCommonsMenuItem",
            Fixture::OneOrganization => "oneOrganization",
            Fixture::ThreeOrganizations => "threeOrganizations",
        }
    }

    /// Builds a fresh copy of the records behind this entry.
    ///
    /// The singular menu item entry is a one-element sequence, the shape the front-end
    /// tests have always imported for it.
    pub fn records(self) -> FixtureRecords {
        match self {
            Fixture::OneArticle => FixtureRecords::Article(fixture::article::one_article()),
            Fixture::ThreeArticles => {
                FixtureRecords::Articles(fixture::article::three_articles())
            }
            Fixture::OneMenuItem => FixtureRecords::MenuItems(vec![
                fixture::ucsb_dining_commons_menu_item::one_menu_item(),
            ]),
            Fixture::ThreeMenuItems => FixtureRecords::MenuItems(
                fixture::ucsb_dining_commons_menu_item::three_menu_items(),
            ),
            Fixture::OneOrganization => FixtureRecords::Organization(
                fixture::ucsb_organization::one_organization(),
            ),
            Fixture::ThreeOrganizations => FixtureRecords::Organizations(
                fixture::ucsb_organization::three_organizations(),
            ),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export_name())
    }
}

impl FromStr for Fixture {
    type Err = FixtureError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Fixture::ALL
            .into_iter()
            .find(|fixture| fixture.export_name() == name)
            .ok_or_else(|| FixtureError::UnknownFixture(name.to_string()))
    }
}

/// Records behind a catalog entry.
///
/// Serializes untagged: single records become a JSON object, sequences a JSON array,
/// matching the payloads the front-end tests import.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FixtureRecords {
    Article(Article),
    Articles(Vec<Article>),
    MenuItems(Vec<UcsbDiningCommonsMenuItem>),
    Organization(UcsbOrganization),
    Organizations(Vec<UcsbOrganization>),
}

impl FixtureRecords {
    /// Number of records in the entry.
    pub fn len(&self) -> usize {
        match self {
            Self::Article(_) | Self::Organization(_) => 1,
            Self::Articles(records) => records.len(),
            Self::MenuItems(records) => records.len(),
            Self::Organizations(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encodes the records as the JSON payload served to the front end.
    pub fn to_json(&self) -> Result<serde_json::Value, FixtureError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn singular_entries_hold_one_record_and_plural_entries_three() {
        for fixture in Fixture::ALL {
            let expected = match fixture.entry() {
                Entry::One => 1,
                Entry::Three => 3,
            };

            assert_eq!(fixture.records().len(), expected, "{fixture}");
        }
    }

    #[test]
    fn new_is_inverse_of_entity_type_and_entry() {
        for fixture in Fixture::ALL {
            assert_eq!(Fixture::new(fixture.entity_type(), fixture.entry()), fixture);
        }
    }

    #[test]
    fn every_entity_type_has_both_entries() {
        for entity_type in [
            EntityType::Article,
            EntityType::UcsbDiningCommonsMenuItem,
            EntityType::UcsbOrganization,
        ] {
            let entries: Vec<Entry> = Fixture::ALL
                .into_iter()
                .filter(|f| f.entity_type() == entity_type)
                .map(Fixture::entry)
                .collect();

            assert_eq!(entries, vec![Entry::One, Entry::Three]);
        }
    }

    #[test]
    fn parses_every_export_name() {
        for fixture in Fixture::ALL {
            assert_eq!(fixture.export_name().parse::<Fixture>().unwrap(), fixture);
        }
    }

    #[test]
    fn rejects_unknown_and_misspelled_names() {
        let err = "oneOrganizaiton".parse::<Fixture>().unwrap_err();

        assert!(matches!(err, FixtureError::UnknownFixture(ref name) if name == "oneOrganizaiton"));
        assert_eq!(err.to_string(), "Unknown fixture 'oneOrganizaiton'");
        assert!("".parse::<Fixture>().is_err());
    }

    #[test]
    fn repeated_reads_are_equal() {
        for fixture in Fixture::ALL {
            assert_eq!(fixture.records(), fixture.records(), "{fixture}");
        }
    }

    #[test]
    fn records_are_rebuilt_on_every_call() {
        let mut records = Fixture::ThreeArticles.records();
        if let FixtureRecords::Articles(articles) = &mut records {
            articles.clear();
        }

        assert!(records.is_empty());
        assert_eq!(Fixture::ThreeArticles.records().len(), 3);
    }

    #[test]
    fn singular_entry_serializes_as_object() {
        let json = Fixture::OneOrganization.records().to_json().unwrap();

        assert_eq!(
            json,
            json!({
                "orgCode": "ZBT",
                "orgTranslationShort": "ZETA BETA TAU",
                "orgTranslation": "ZETA BETA TAU",
                "inactive": true,
            })
        );
    }

    #[test]
    fn singular_menu_item_serializes_as_one_element_array() {
        let json = Fixture::OneMenuItem.records().to_json().unwrap();

        assert_eq!(
            json,
            json!([{
                "id": 1,
                "diningCommonsCode": "Ortega",
                "name": "burger",
                "station": "Grill",
            }])
        );
    }

    #[test]
    fn menu_item_entries_keep_front_end_export_names() {
        assert_eq!(
            "oneUCSBDiningCommonsMenuItem".parse::<Fixture>().unwrap(),
            Fixture::OneMenuItem
        );
        assert_eq!(
            "threeUCSBDiningCommonsMenuItem".parse::<Fixture>().unwrap(),
            Fixture::ThreeMenuItems
        );
        assert!("oneMenuItem".parse::<Fixture>().is_err());
    }

    #[test]
    fn plural_entry_serializes_as_array() {
        let json = Fixture::ThreeArticles.records().to_json().unwrap();

        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[1]["id"], 3);
        assert_eq!(array[1]["url"], "https://www.images.google.com");
        assert_eq!(array[1]["dateAdded"], "2022-01-03T00:10:00");
    }
}
