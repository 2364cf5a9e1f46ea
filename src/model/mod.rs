//! Domain records shared by the store, the API client and the UI.

mod user;

pub use user::{Address, Company, Geo, UserRecord};
