pub mod article;
pub mod fixture;
pub mod menu_item;
pub mod organization;

#[cfg(test)]
mod test;
