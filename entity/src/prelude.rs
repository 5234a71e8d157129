pub use super::article::Model as Article;
pub use super::ucsb_dining_commons_menu_item::Model as UcsbDiningCommonsMenuItem;
pub use super::ucsb_organization::Model as UcsbOrganization;
