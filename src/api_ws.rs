use std::time::Duration;

use axum::extract::ws::{WebSocket, Message};
use futures::{StreamExt, SinkExt};
use serde::{Serialize, Deserialize};
use tokio::{select, sync::mpsc};
use tracing::log;

use crate::{api::ApiState, models::Dimension, models_api::view::ViewState, view_service::{ViewService, ViewSession, ViewSnapshot}};

/// Navigation request from a connected view.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WsReq {
    pub dimension: Dimension,
    pub slug: String,
}

pub struct ApiWs;

impl ApiWs {
    /// One socket is one view. Each request supersedes the previous one and only
    /// the snapshot of the latest navigation is pushed once its fetch lands.
    pub async fn handle(stream: WebSocket, state: ApiState) {
        let (mut sender, mut receiver) = stream.split();
        let (snapshot_sender, mut snapshot_receiver) = mpsc::channel::<ViewSnapshot>(16);
        let session = ViewSession::new();

        log::info!("[API.WS] Open, in total = {}", ApiWs::update_nr_connections(1, &state).await);

        let receive_handle = {
            let session = session.clone();
            let client = state.player_client.clone();
            tokio::spawn(async move {
                while let Some(Ok(msg)) = receiver.next().await {
                    let Some(ws_req) = msg.into_text().ok().and_then(|e| serde_json::from_str::<WsReq>(&e).ok()) else {
                        continue;
                    };
                    log::info!("[API.WS] Req {:?}", ws_req);

                    let (generation, descriptor) = session.write().await.begin(ws_req.dimension, &ws_req.slug);
                    _ = snapshot_sender.send(ViewSnapshot {
                        generation,
                        descriptor: Some(descriptor.clone()),
                        state: ViewState::Loading,
                    }).await;

                    let (session, client, snapshot_sender) = (session.clone(), client.clone(), snapshot_sender.clone());
                    tokio::spawn(async move {
                        if let Some(snapshot) = ViewService::complete(&session, &client, generation, &descriptor).await {
                            _ = snapshot_sender.send(snapshot).await;
                        }
                    });
                }
            })
        };

        loop {
            let snapshot = select! {
                snapshot = snapshot_receiver.recv() => match snapshot {
                    Some(snapshot) => Some(snapshot),
                    None => break,
                },
                _ = tokio::time::sleep(Duration::from_secs(60)) => None,
            };
            let msg = match snapshot {
                Some(snapshot) => {
                    // a commit can be queued behind the loading state of a newer navigation
                    if !ViewService::is_current(&session, &snapshot).await {
                        log::info!("[API.WS] Skip superseded snapshot {}", snapshot.generation);
                        continue;
                    }
                    Message::Text(serde_json::to_string(&snapshot).unwrap_or_default())
                },
                // keep idle views open
                None => Message::Ping(vec![42]),
            };
            if let Err(e) = sender.send(msg).await {
                log::info!("[API.WS] Error sending {e}");
                break;
            }
        }

        receive_handle.abort();

        log::info!("[API.WS] Close, in total = {}", ApiWs::update_nr_connections(-1, &state).await);
    }

    async fn update_nr_connections(delta: i16, state: &ApiState) -> i16 {
        let mut nr_ws = state.nr_ws.write().await;
        *nr_ws += delta;
        *nr_ws
    }
}
