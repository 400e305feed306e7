use std::{collections::HashMap, time::Instant};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::log;

use crate::models::Dimension;

pub const CONNECT_FAILURE: &str = "Failed to connect to backend. Is the Spring Boot server running on port 8081?";

/// Forwards `/api/player` to the stats backend and relays its JSON.
#[derive(Clone)]
pub struct ProxyService {
    client: Client,
    api_url: String,
}

impl ProxyService {
    pub fn new(api_url: &str) -> ProxyService {
        ProxyService { client: Client::new(), api_url: api_url.trim_end_matches('/').to_string() }
    }

    /// Only the three filter parameters are passed on, in a fixed order.
    pub fn get_forward_params(params: &HashMap<String, String>) -> Vec<(&'static str, String)> {
        Dimension::get_all().into_iter()
            .map(|e| e.query_param())
            .filter_map(|key| params.get(key)
                .filter(|value| !value.is_empty())
                .map(|value| (key, value.clone())))
            .collect()
    }

    pub async fn forward(&self, params: &HashMap<String, String>) -> (StatusCode, Value) {
        let before = Instant::now();
        let url = format!("{}/player", self.api_url);
        let forward_params = ProxyService::get_forward_params(params);
        log::info!("[PROXY] Fetching from {url} {:?}", forward_params);

        let rsp = match self.client.get(&url).query(&forward_params).send().await {
            Ok(rsp) => rsp,
            Err(e) => {
                log::error!("[PROXY] Call failed {e}");
                return ProxyService::connect_failure();
            }
        };

        let status = rsp.status();
        if !status.is_success() {
            log::error!("[PROXY] Backend returned error {status}");
            return (status, json!({ "error": format!("Backend error: {}", status.as_u16()) }));
        }

        match rsp.json::<Value>().await {
            Ok(data) => {
                let nr = data.as_array().map(|e| e.len()).unwrap_or_default();
                log::info!("[PROXY] Received {nr} players {:.2?}", before.elapsed());
                (StatusCode::OK, data)
            },
            Err(e) => {
                log::error!("[PROXY] Parse failed {e}");
                ProxyService::connect_failure()
            }
        }
    }

    fn connect_failure() -> (StatusCode, Value) {
        (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": CONNECT_FAILURE }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use reqwest::StatusCode;
    use serde_json::json;

    use super::{ProxyService, CONNECT_FAILURE};

    #[test]
    fn forwards_only_filters() {
        let params = HashMap::from([
            ("position".to_string(), "FW".to_string()),
            ("team".to_string(), "Manchester Utd".to_string()),
            ("sort".to_string(), "min".to_string()),
            ("nation".to_string(), "".to_string()),
        ]);
        let forwarded = ProxyService::get_forward_params(&params);
        assert_eq!(forwarded, vec![("team", "Manchester Utd".to_string()), ("position", "FW".to_string())]);
    }

    #[tokio::test]
    async fn unreachable_backend() {
        let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let proxy = ProxyService::new(&format!("http://127.0.0.1:{port}/api/v1"));

        let (status, body) = proxy.forward(&HashMap::from([("team".to_string(), "Arsenal".to_string())])).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": CONNECT_FAILURE }));
    }
}
