#![allow(dead_code)]

use std::sync::Arc;

use bizhub_core::{Interaction, KeyValueStore};
use bizhub_domain::constants::SESSION_TOKEN_STORAGE_KEY;
use bizhub_domain::{ApiConfig, Config};
use bizhub_infra::MemoryKeyValueStore;
use bizhub_lib::AppContext;
use parking_lot::Mutex;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "mock_jwt_token";
pub const ORIGIN: &str = "http://localhost:3000";

/// Interaction double with fixed answers that records what it was shown
#[derive(Default)]
pub struct ScriptedInteraction {
    confirm: bool,
    answer: Option<String>,
    pub alerts: Mutex<Vec<String>>,
    pub questions: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn confirming(confirm: bool) -> Arc<Self> {
        Arc::new(Self { confirm, ..Self::default() })
    }

    pub fn answering(answer: Option<&str>) -> Arc<Self> {
        Arc::new(Self { answer: answer.map(str::to_string), ..Self::default() })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&self, message: &str) -> bool {
        self.questions.lock().push(message.to_string());
        self.confirm
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.questions.lock().push(message.to_string());
        self.answer.clone()
    }
}

pub fn config_for(server: &MockServer) -> Config {
    Config {
        api: ApiConfig { base_url: server.uri(), origin: ORIGIN.to_string(), timeout_secs: 5 },
        ..Config::default()
    }
}

/// Context over an in-memory store, optionally already holding a token.
pub fn context(
    server: &MockServer,
    signed_in: bool,
    interaction: Arc<ScriptedInteraction>,
) -> (AppContext, Arc<MemoryKeyValueStore>) {
    let store = Arc::new(MemoryKeyValueStore::new());
    if signed_in {
        store.set(SESSION_TOKEN_STORAGE_KEY, TOKEN).expect("token should be stored");
    }
    let ctx = AppContext::with_store(config_for(server), store.clone(), interaction)
        .expect("context should build");
    (ctx, store)
}

pub fn user_json() -> serde_json::Value {
    json!({
        "id": "u-1",
        "email": "owner@example.com",
        "name": "Dana Owner",
        "theme": "light"
    })
}

pub fn client_json(id: &str, name: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "created_at": "2024-05-01T09:30:00.123456",
        "updated_at": "2024-05-01T09:30:00.123456"
    })
}

/// `/api/auth/me` answers the stored token with the demo user.
pub async fn mount_signed_in_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(server)
        .await;
}

/// Empty collections and dashboard for everything fetched on mount.
pub async fn mount_empty_backend(server: &MockServer) {
    let collections =
        ["/api/clients", "/api/projects", "/api/team-members", "/api/payments", "/api/integrations"];
    for collection in collections {
        Mock::given(method("GET"))
            .and(path(collection))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clients_count": 0,
            "projects_count": 0,
            "team_members_count": 0,
            "active_projects": 0,
            "total_received": 0.0,
            "total_sent": 0.0,
            "recent_payments": []
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/calendar/upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "upcoming_meetings": [] })))
        .mount(server)
        .await;
}

pub async fn request_count(server: &MockServer, verb: &str, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.to_string() == verb && r.url.path() == route)
        .count()
}
