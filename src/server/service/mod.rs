//! Service layer between the controllers and the fixture catalog.

pub mod fixture;
