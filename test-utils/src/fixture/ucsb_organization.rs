//! Student organization fixtures.
//!
//! Organizations have no numeric id; `org_code` is the identifier.

use entity::ucsb_organization;

/// Full translation shared by every organization fixture.
pub const DEFAULT_ORG_TRANSLATION: &str = "ZETA BETA TAU";

/// Creates the singular organization entry.
///
/// # Default Values
/// - org_code: `"ZBT"`
/// - org_translation_short: `"ZETA BETA TAU"`
/// - org_translation: `"ZETA BETA TAU"`
/// - inactive: `true`
pub fn one_organization() -> ucsb_organization::Model {
    entity_builder().build()
}

/// Creates the multi-record organization entry: `ZBZ`, `ZBB` and `ZTT`, all active.
pub fn three_organizations() -> Vec<ucsb_organization::Model> {
    [
        ("ZBZ", "ZETA BETA ZETA"),
        ("ZBB", "ZETA BETA BETA"),
        ("ZTT", "ZETA TAU TAU"),
    ]
    .into_iter()
    .map(|(code, short)| {
        entity_builder()
            .org_code(code)
            .org_translation_short(short)
            .inactive(false)
            .build()
    })
    .collect()
}

/// Creates an organization builder seeded with the singular entry's values.
pub fn entity_builder() -> OrganizationEntityBuilder {
    OrganizationEntityBuilder::default()
}

/// Builder for customized organization records.
pub struct OrganizationEntityBuilder {
    org_code: String,
    org_translation_short: String,
    org_translation: String,
    inactive: bool,
}

impl Default for OrganizationEntityBuilder {
    fn default() -> Self {
        Self {
            org_code: "ZBT".to_string(),
            org_translation_short: DEFAULT_ORG_TRANSLATION.to_string(),
            org_translation: DEFAULT_ORG_TRANSLATION.to_string(),
            inactive: true,
        }
    }
}

impl OrganizationEntityBuilder {
    /// Sets the organization code.
    pub fn org_code(mut self, org_code: impl Into<String>) -> Self {
        self.org_code = org_code.into();
        self
    }

    /// Sets the abbreviated translation.
    pub fn org_translation_short(mut self, short: impl Into<String>) -> Self {
        self.org_translation_short = short.into();
        self
    }

    /// Sets the full translation.
    pub fn org_translation(mut self, translation: impl Into<String>) -> Self {
        self.org_translation = translation.into();
        self
    }

    /// Marks the organization inactive or active.
    pub fn inactive(mut self, inactive: bool) -> Self {
        self.inactive = inactive;
        self
    }

    /// Builds the organization record.
    pub fn build(self) -> ucsb_organization::Model {
        ucsb_organization::Model {
            org_code: self.org_code,
            org_translation_short: self.org_translation_short,
            org_translation: self.org_translation,
            inactive: self.inactive,
        }
    }
}
