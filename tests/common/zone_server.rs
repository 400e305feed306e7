use std::process::{Command, Child};

use assert_cmd::prelude::CommandCargoExt;
use predicates::{function::FnPredicate, Predicate};
use premier_zone_server::{config_handler::Config, models_api::view::ApiPlayerView};

pub struct PremierZoneServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for PremierZoneServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl PremierZoneServer {
    pub fn new(port: u16) -> PremierZoneServer {
        PremierZoneServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, backend_url: &str) {
        let config = Config {
            port: self.port,
            api_url: backend_url.to_string(),
            ..Default::default()
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("premier-zone-server")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("PORT")
            .env_remove("API_URL")
            .env_remove("PROXY_URL")
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn get_view(&self, dimension: &str, slug: &str) -> Result<ApiPlayerView, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("{}/view/{dimension}/{slug}", self.get_url()))
            .await?.json().await?)
    }

    pub async fn retry_until<F>(&self, dimension: &str, slug: &str, predicate: FnPredicate<F, ApiPlayerView>) -> ApiPlayerView
    where
        F: Fn(&ApiPlayerView) -> bool,
    {
        let mut nr_loops = 0;
        loop {
            if let Ok(view) = self.get_view(dimension, slug).await {
                if predicate.eval(&view) {
                    return view;
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            nr_loops += 1;
            if nr_loops > 100 {
                panic!("retry failed");
            }
        }
    }
}

/// Runs the api in this process against `backend_url` and returns its base url.
pub fn spawn_in_process(backend_url: &str) -> (String, tokio::task::JoinHandle<()>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind");
    let addr = listener.local_addr().expect("should have an address");
    let url = format!("http://{addr}");
    let config = Config {
        port: addr.port(),
        api_url: backend_url.to_string(),
        proxy_url: Some(format!("{url}/api")),
    };
    let app = premier_zone_server::api::Api::router(premier_zone_server::api::ApiState::new(&config));
    let handle = tokio::spawn(async move {
        let server = axum::Server::from_tcp(listener).expect("should accept listener");
        _ = server.serve(app.into_make_service()).await;
    });
    (url, handle)
}
