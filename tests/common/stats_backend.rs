use std::{collections::HashMap, net::TcpListener, sync::Arc, time::Duration};

use axum::{Router, extract::{Query, State}, response::IntoResponse, Json, routing::get};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::{sync::RwLock, task::JoinHandle};

/// Serves `app` on a free local port and returns its base url.
pub fn spawn_router(app: Router) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind");
    let addr = listener.local_addr().expect("should have an address");
    let handle = tokio::spawn(async move {
        let server = axum::Server::from_tcp(listener).expect("should accept listener");
        _ = server.serve(app.into_make_service()).await;
    });
    (format!("http://{addr}"), handle)
}

#[derive(Clone, Default)]
pub struct BackendState {
    pub requests: Arc<RwLock<Vec<HashMap<String, String>>>>,
}

/// Stand-in for the stats backend behind the proxy.
pub struct StatsBackend {
    pub state: BackendState,
    handle: Option<JoinHandle<()>>,
    url: String,
}

impl Drop for StatsBackend {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl StatsBackend {
    pub fn start() -> StatsBackend {
        let state = BackendState::default();
        let app = Router::new()
            .route("/player", get(StatsBackend::get_players))
            .with_state(state.clone());
        let (url, handle) = spawn_router(app);
        StatsBackend { state, handle: Some(handle), url }
    }

    pub fn get_url(&self) -> String {
        self.url.clone()
    }

    pub async fn get_requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.read().await.clone()
    }

    async fn get_players(Query(params): Query<HashMap<String, String>>, State(state): State<BackendState>) -> impl IntoResponse {
        state.requests.write().await.push(params.clone());

        let team = params.get("team").map(|e| e.as_str());
        let nation = params.get("nation").map(|e| e.as_str());
        let position = params.get("position").map(|e| e.as_str());
        match (team, nation, position) {
            (Some("Arsenal"), _, _) => {
                // slow on purpose, lands after a later navigation
                tokio::time::sleep(Duration::from_millis(600)).await;
                (StatusCode::OK, Json(arsenal()))
            },
            (Some("Chelsea"), _, _) => (StatusCode::OK, Json(chelsea())),
            (Some("Manchester Utd"), _, _) => (StatusCode::OK, Json(manchester_utd())),
            (Some("Missing"), _, _) => (StatusCode::OK, Json(json!({ "error": "Team not found" }))),
            (Some("Falsy"), _, _) => (StatusCode::OK, Json(json!({ "error": false }))),
            (Some("Broken"), _, _) => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "db down" }))),
            (_, Some("FRA"), _) => (StatusCode::OK, Json(json!({ "unexpected": true }))),
            (_, _, Some("FW")) => (StatusCode::OK, Json(forwards())),
            _ => (StatusCode::OK, Json(json!([]))),
        }
    }
}

pub fn arsenal() -> Value {
    json!([
        {"name": "Bukayo Saka", "team": "Arsenal", "nation": "eng ENG", "pos": "FW,MF", "min": 2100, "gls": 9, "ast": 8},
        {"name": "Squad Total", "team": "Arsenal", "min": 34200, "gls": 60},
    ])
}

pub fn chelsea() -> Value {
    json!([
        {"name": "Reece James", "team": "Chelsea", "nation": "eng ENG", "pos": "DF", "min": 1200, "gls": 1, "ast": 3},
        {"name": "Cole Palmer", "team": "Chelsea", "nation": "eng ENG", "pos": "MF", "min": 2600, "gls": 15, "ast": 8, "xg": 14.2},
        {"name": "Squad Total", "team": "Chelsea", "min": 34200, "gls": 58},
    ])
}

pub fn manchester_utd() -> Value {
    json!([
        {"name": "Squad Total", "team": "Manchester Utd", "min": 3000},
        {"name": "A", "team": "Manchester Utd", "min": 500, "gls": 2},
        {"name": "B", "team": "Manchester Utd", "min": 1800, "gls": 1},
    ])
}

pub fn forwards() -> Value {
    json!([
        {"name": "Ollie Watkins", "team": "Aston Villa", "pos": "FW", "min": 2900, "gls": 16},
        {"name": "Erling Haaland", "team": "Manchester City", "pos": "FW", "min": 2500, "gls": 22},
        {"name": "Squad Total", "pos": "FW", "gls": 300},
        {"name": "Alexander Isak", "team": "Newcastle Utd", "pos": "FW", "min": 2300, "gls": 16},
    ])
}
