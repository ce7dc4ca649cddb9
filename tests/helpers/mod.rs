#![allow(dead_code)]

use mockito::ServerGuard;
use notehub::infrastructure::config::ApiConfig;
use notehub::infrastructure::NotehubRepository;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";

/// Repository pointed at a mock server, authenticated with [`TEST_TOKEN`]
pub fn repository_for(server: &ServerGuard) -> NotehubRepository {
    NotehubRepository::new(&ApiConfig {
        base_url: format!("{}/api", server.url()),
        token: Some(TEST_TOKEN.to_string()),
        timeout_secs: 5,
    })
    .expect("Mock server URL should be valid")
}

/// Repository pointed at a port nothing listens on
pub fn unreachable_repository() -> NotehubRepository {
    NotehubRepository::new(&ApiConfig {
        base_url: "http://127.0.0.1:1/api".to_string(),
        token: Some(TEST_TOKEN.to_string()),
        timeout_secs: 5,
    })
    .expect("URL should be valid")
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

/// A note the way the server serializes it
pub fn note_json(id: &str, title: &str, content: &str, tag: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": content,
        "tag": tag,
        "createdAt": "2025-06-01T10:00:00.000Z",
        "updatedAt": "2025-06-01T10:00:00.000Z"
    })
}

/// Known notes served by the mock API
pub mod test_notes {
    pub const GROCERIES: &str = "65ca67e7ae7f10c88b598384";
    pub const STANDUP: &str = "65ca67e7ae7f10c88b598385";
    pub const RETRO: &str = "65ca67e7ae7f10c88b598386";

    // For testing error cases
    pub const NONEXISTENT: &str = "000000000000000000000000";
}
