//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use userdesk::model::{Address, Company, Geo, UserRecord};
use userdesk::store::{AppStore, UsersIntent};

/// Two records in the shape the public endpoint serves.
pub const USERS_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": {
      "street": "Kulas Light",
      "suite": "Apt. 556",
      "city": "Gwenborough",
      "zipcode": "92998-3874",
      "geo": { "lat": "-37.3159", "lng": "81.1496" }
    },
    "phone": "1-770-736-8031 x56442",
    "website": "hildegard.org",
    "company": {
      "name": "Romaguera-Crona",
      "catchPhrase": "Multi-layered client-server neural-net",
      "bs": "harness real-time e-markets"
    }
  },
  {
    "id": 2,
    "name": "Ervin Howell",
    "username": "Antonette",
    "email": "Shanna@melissa.tv",
    "address": {
      "street": "Victor Plains",
      "suite": "Suite 879",
      "city": "Wisokyburgh",
      "zipcode": "90566-7771",
      "geo": { "lat": "-43.9509", "lng": "-34.4618" }
    },
    "phone": "010-692-6593 x09125",
    "website": "anastasia.net",
    "company": {
      "name": "Deckow-Crist",
      "catchPhrase": "Proactive didactic contingency",
      "bs": "synergize scalable supply-chains"
    }
  }
]"#;

/// A local address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/users", port)
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn user(id: u64, name: &str, username: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        address: Address {
            street: "Main St".to_string(),
            suite: "Apt. 1".to_string(),
            city: "Springfield".to_string(),
            zipcode: "12345".to_string(),
            geo: Geo {
                lat: "0".to_string(),
                lng: "0".to_string(),
            },
        },
        phone: String::new(),
        website: String::new(),
        company: Company {
            name: "Acme".to_string(),
            catch_phrase: "Anything".to_string(),
            bs: "stuff".to_string(),
        },
    }
}

/// John Doe, Jane Smith and Alice Johnson: the fixture the search tests share.
pub fn sample_users() -> Vec<UserRecord> {
    vec![
        user(1, "John Doe", "johndoe"),
        user(2, "Jane Smith", "janesmith"),
        user(3, "Alice Johnson", "alicej"),
    ]
}

pub fn store_with(users: Vec<UserRecord>) -> AppStore {
    let mut store = AppStore::new();
    store.dispatch(UsersIntent::SetUsers(users));
    store
}
