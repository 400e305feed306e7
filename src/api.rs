use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{Router, extract::{Path, Query, State, WebSocketUpgrade}, response::IntoResponse, Json};
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::{
    api_ws::ApiWs,
    config_handler::Config,
    entity_service::EntityService,
    models::Dimension,
    player_service::PlayerService,
    proxy_service::ProxyService,
    rest_client::PlayerClient,
};

#[derive(Clone)]
pub struct ApiState {
    pub proxy_service: ProxyService,
    pub player_client: PlayerClient,

    pub nr_ws: Arc<RwLock<i16>>,
}

impl ApiState {
    pub fn new(config: &Config) -> ApiState {
        ApiState {
            proxy_service: ProxyService::new(&config.api_url),
            player_client: PlayerClient::new(&config.get_proxy_url()),
            nr_ws: Arc::new(RwLock::new(0)),
        }
    }
}

#[derive(Deserialize)]
pub struct SearchQuery {
    search: Option<String>,
}

pub struct Api;
impl Api {
    pub async fn serve(config: &Config) -> anyhow::Result<()> {
        let app = Api::router(ApiState::new(config));
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        log::info!("[API] Listening on {}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    pub fn router(state: ApiState) -> Router {
        Router::new()
            .route("/api/player", axum::routing::get(Api::get_player_proxy))

            .route("/view/:dimension", axum::routing::get(Api::get_entities))
            .route("/view/:dimension/:slug", axum::routing::get(Api::get_view))

            .route("/ws", axum::routing::get(Api::ws_handler))

            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            )
    }

    async fn root() -> &'static str {
        "Premier Zone"
    }

    async fn get_player_proxy(Query(params): Query<HashMap<String, String>>, State(state): State<ApiState>) -> impl IntoResponse {
        let (status, body) = state.proxy_service.forward(&params).await;
        (status, Json(body))
    }

    async fn get_entities(Path(dimension): Path<String>, Query(query): Query<SearchQuery>) -> impl IntoResponse {
        match dimension.parse::<Dimension>() {
            Ok(dimension) => {
                let entities = match query.search {
                    Some(search) => EntityService::search(dimension, &search),
                    None => EntityService::all(dimension).to_vec(),
                };
                (StatusCode::OK, Json(entities)).into_response()
            },
            Err(_) => (StatusCode::NOT_FOUND, "404".to_string()).into_response(),
        }
    }

    async fn get_view(Path((dimension, slug)): Path<(String, String)>, State(state): State<ApiState>) -> impl IntoResponse {
        match dimension.parse::<Dimension>() {
            Ok(dimension) => (StatusCode::OK, Json(PlayerService::load(&state.player_client, dimension, &slug).await)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "404".to_string()).into_response(),
        }
    }

    async fn ws_handler(
        ws: WebSocketUpgrade,
        State(state): State<ApiState>) -> impl IntoResponse {
        ws.on_upgrade(|socket| ApiWs::handle(socket, state))
    }
}
