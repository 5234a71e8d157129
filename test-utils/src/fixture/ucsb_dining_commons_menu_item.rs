//! Dining-commons menu item fixtures.

use entity::ucsb_dining_commons_menu_item;

/// Default dining commons code.
pub const DEFAULT_DINING_COMMONS_CODE: &str = "Ortega";

/// Default dish name.
pub const DEFAULT_NAME: &str = "burger";

/// Default serving station.
pub const DEFAULT_STATION: &str = "Grill";

/// Creates the singular menu item entry: Ortega's burger at the Grill, id `1`.
pub fn one_menu_item() -> ucsb_dining_commons_menu_item::Model {
    entity_builder().build()
}

/// Creates the multi-record menu item entry.
///
/// Records, in order:
/// - `2` De La Guerra, burrito bowl, Make Your Own
/// - `3` Portola, Sushi, Global
/// - `4` Carrillo, pizza, Woodstone
pub fn three_menu_items() -> Vec<ucsb_dining_commons_menu_item::Model> {
    vec![
        menu_item(2, "De La Guerra", "burrito bowl", "Make Your Own"),
        menu_item(3, "Portola", "Sushi", "Global"),
        menu_item(4, "Carrillo", "pizza", "Woodstone"),
    ]
}

fn menu_item(
    id: i64,
    dining_commons_code: &str,
    name: &str,
    station: &str,
) -> ucsb_dining_commons_menu_item::Model {
    entity_builder()
        .id(id)
        .dining_commons_code(dining_commons_code)
        .name(name)
        .station(station)
        .build()
}

/// Creates a menu item builder seeded with the singular entry's values.
pub fn entity_builder() -> MenuItemEntityBuilder {
    MenuItemEntityBuilder::default()
}

/// Builder for customized menu item records.
pub struct MenuItemEntityBuilder {
    id: i64,
    dining_commons_code: String,
    name: String,
    station: String,
}

impl Default for MenuItemEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            dining_commons_code: DEFAULT_DINING_COMMONS_CODE.to_string(),
            name: DEFAULT_NAME.to_string(),
            station: DEFAULT_STATION.to_string(),
        }
    }
}

impl MenuItemEntityBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn dining_commons_code(mut self, code: impl Into<String>) -> Self {
        self.dining_commons_code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    pub fn build(self) -> ucsb_dining_commons_menu_item::Model {
        ucsb_dining_commons_menu_item::Model {
            id: self.id,
            dining_commons_code: self.dining_commons_code,
            name: self.name,
            station: self.station,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn creates_one_menu_item_with_defaults() {
        let item = one_menu_item();

        assert_eq!(item.id, 1);
        assert_eq!(item.dining_commons_code, "Ortega");
        assert_eq!(item.name, "burger");
        assert_eq!(item.station, "Grill");
    }

    #[test]
    fn portola_serves_sushi_at_global() {
        let items = three_menu_items();

        let portola = items
            .iter()
            .find(|item| item.dining_commons_code == "Portola")
            .unwrap();

        assert_eq!(portola.name, "Sushi");
        assert_eq!(portola.station, "Global");
    }

    #[test]
    fn three_menu_items_ids_are_distinct() {
        let items = three_menu_items();

        let ids: HashSet<i64> = items.iter().map(|item| item.id).collect();
        assert_eq!(items.len(), 3);
        assert_eq!(ids, HashSet::from([2, 3, 4]));
    }

    #[test]
    fn mutating_a_returned_menu_item_does_not_leak() {
        let mut items = three_menu_items();
        items[1].name = "Ramen".to_string();
        items.truncate(1);

        let mut item = one_menu_item();
        item.station.clear();

        let fresh = three_menu_items();
        assert_eq!(fresh.len(), 3);
        assert_eq!(fresh[1].name, "Sushi");
        assert_eq!(one_menu_item().station, DEFAULT_STATION);
    }

    #[test]
    fn repeated_reads_are_equal() {
        assert_eq!(three_menu_items(), three_menu_items());
        assert_eq!(one_menu_item(), one_menu_item());
    }

    #[test]
    fn builder_allows_partial_customization() {
        let item = entity_builder().station("Taqueria").build();

        assert_eq!(item.id, 1);
        assert_eq!(item.dining_commons_code, DEFAULT_DINING_COMMONS_CODE);
        assert_eq!(item.station, "Taqueria");
    }
}
