use std::fmt::Display;

use tracing::log;

pub mod config_handler;
pub mod rest_client;
pub mod models;
pub mod models_external;
pub mod models_api;
pub mod entity_service;
pub mod player_service;
pub mod ordering;
pub mod view_service;
pub mod proxy_service;
pub mod api;
pub mod api_ws;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
