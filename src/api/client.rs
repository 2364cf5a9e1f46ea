use reqwest::Client;

use crate::api::error::FetchError;
use crate::model::UserRecord;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Client for the read-only users endpoint.
///
/// Issues a single GET per call. No retry, no timeout, no caching.
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: Client,
    url: String,
}

impl UsersClient {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("userdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch and decode the user list, keeping the typed error.
    pub async fn fetch(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let users = serde_json::from_slice(&body)?;
        Ok(users)
    }

    /// Fetch the user list. Any failure is reported as its message string.
    pub async fn get_users(&self) -> Result<Vec<UserRecord>, String> {
        self.fetch().await.map_err(|err| err.to_string())
    }
}
