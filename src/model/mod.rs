pub mod api;
pub mod fixture;
