use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    /// Base url of the stats backend, `/player` is appended.
    #[serde(default="default_api_url")]
    pub api_url: String,

    /// Base url of the proxy the views query. Defaults to this server.
    #[serde(default)]
    pub proxy_url: Option<String>,
}

fn default_port() -> u16 {
    3000
}

fn default_api_url() -> String {
    "http://localhost:8081/api/v1".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config { port: default_port(), api_url: default_api_url(), proxy_url: None }
    }
}

impl Config {
    pub fn get_proxy_url(&self) -> String {
        self.proxy_url.clone()
            .unwrap_or_else(|| format!("http://localhost:{}/api", self.port))
    }

    fn apply_env(mut self) -> anyhow::Result<Config> {
        if let Ok(port) = std::env::var("PORT") {
            self.port = port.parse().with_context(|| format!("Invalid PORT {port}"))?;
        }
        if let Ok(api_url) = std::env::var("API_URL") {
            self.api_url = api_url;
        }
        if let Ok(proxy_url) = std::env::var("PROXY_URL") {
            self.proxy_url = Some(proxy_url);
        }
        Ok(self)
    }
}

pub fn read_config(path: &str) -> anyhow::Result<Config> {
    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data)
            .with_context(|| format!("Could not parse JSON at {path}!")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("[CONFIG] No config at {path}, using defaults");
            Ok(Config::default())
        },
        Err(e) => Err(e).with_context(|| format!("Unable to read {path}")),
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let result = read_config(&path)?.apply_env()?;
    log::info!("[CONFIG] {:?}", result);
    Ok(result)
}
