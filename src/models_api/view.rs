use serde::{Serialize, Deserialize};

use crate::{models_api::{entity::EntityDescriptor, player::PlayerStat}, rest_client::{FetchError, FetchErrorKind}};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Error { kind: FetchErrorKind, message: String },
    Empty,
    Loaded { players: Vec<PlayerStat> },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

impl From<Result<Vec<PlayerStat>, FetchError>> for ViewState {
    fn from(result: Result<Vec<PlayerStat>, FetchError>) -> Self {
        match result {
            Ok(players) if players.is_empty() => ViewState::Empty,
            Ok(players) => ViewState::Loaded { players },
            Err(e) => ViewState::Error { kind: e.kind, message: e.message },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiPlayerView {
    pub descriptor: EntityDescriptor,
    #[serde(flatten)]
    pub state: ViewState,
}
