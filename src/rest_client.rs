use std::fmt::Display;
use std::time::Instant;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::log;

use crate::models::Dimension;
use crate::models_external::player::RawPlayerRow;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// The proxy could not be reached or the body could not be read.
    Network,
    /// The proxy answered with an explicit error.
    Upstream,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> FetchError {
        FetchError { kind: FetchErrorKind::Network, message: message.into() }
    }

    pub fn upstream(message: impl Into<String>) -> FetchError {
        FetchError { kind: FetchErrorKind::Upstream, message: message.into() }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

/// Client for the `/player` proxy endpoint.
#[derive(Clone)]
pub struct PlayerClient {
    client: Client,
    base_url: String,
}

impl PlayerClient {
    pub fn new(base_url: &str) -> PlayerClient {
        PlayerClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn get_player_url(&self) -> String {
        format!("{}/player", self.base_url)
    }

    /// One request, one query parameter. No retries and no caching.
    pub async fn fetch_players(&self, dimension: Dimension, value: &str) -> Result<Vec<RawPlayerRow>, FetchError> {
        let before = Instant::now();
        let url = self.get_player_url();
        let rsp = self.client.get(&url)
            .query(&[(dimension.query_param(), value)])
            .send()
            .await
            .map_err(|e| {
                log::error!("[REST] Call failed {url} {e}");
                FetchError::network(format!("Failed to fetch players: {e}"))
            })?;
        let status = rsp.status();
        let bytes = rsp.bytes()
            .await
            .map_err(|e| FetchError::network(format!("Failed to fetch players: {e}")))?;
        log::info!("[REST] Call {url} {dimension}={value} {} {:.2?}", status.as_u16(), before.elapsed());

        let body: Option<Value> = serde_json::from_slice(&bytes).ok();
        let error_msg = body.as_ref()
            .and_then(|e| e.get("error"))
            .and_then(PlayerClient::get_error_message);

        if !status.is_success() {
            return Err(FetchError::upstream(error_msg.unwrap_or_else(|| format!("Backend error: {}", status.as_u16()))));
        }
        if let Some(msg) = error_msg {
            return Err(FetchError::upstream(msg));
        }
        Ok(PlayerClient::to_rows(body))
    }

    /// `null`, `false`, `0` and `""` do not count as an error.
    fn get_error_message(value: &Value) -> Option<String> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::Number(nr) if nr.as_f64() == Some(0.0) => None,
            Value::String(msg) if msg.is_empty() => None,
            Value::String(msg) => Some(msg.clone()),
            other => Some(other.to_string()),
        }
    }

    fn to_rows(body: Option<Value>) -> Vec<RawPlayerRow> {
        match body {
            Some(Value::Array(items)) => items.into_iter()
                .filter_map(|e| match serde_json::from_value::<RawPlayerRow>(e) {
                    Ok(row) => Some(row),
                    Err(e) => {
                        log::debug!("[REST] Skip row {e}");
                        None
                    }
                })
                .collect(),
            _ => {
                log::info!("[REST] Response is not a list, treat as empty");
                vec![]
            }
        }
    }
}
