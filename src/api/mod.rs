//! Data access for the remote users endpoint.

mod client;
mod error;

pub use client::{UsersClient, DEFAULT_USERS_URL};
pub use error::FetchError;
