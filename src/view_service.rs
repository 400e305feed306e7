use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::log;

use crate::{
    entity_service::EntityService,
    models::Dimension,
    models_api::{entity::EntityDescriptor, player::PlayerStat, view::ViewState},
    player_service::PlayerService,
    rest_client::{FetchError, PlayerClient},
};

pub type Generation = u64;

/// What one view instance currently shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub generation: Generation,
    pub descriptor: Option<EntityDescriptor>,
    #[serde(flatten)]
    pub state: ViewState,
}

/// One browsing view. Every navigation bumps the generation and only a result
/// carrying the current generation is committed, so a slow response for a
/// previous slug can never overwrite the newer one.
pub struct ViewSession {
    generation: Generation,
    descriptor: Option<EntityDescriptor>,
    state: ViewState,
}
pub type SafeViewSession = Arc<RwLock<ViewSession>>;

impl ViewSession {
    pub fn new() -> SafeViewSession {
        Arc::new(RwLock::new(ViewSession {
            generation: 0,
            descriptor: None,
            state: ViewState::Loading,
        }))
    }

    /// Starts a navigation, the descriptor carries the dimension.
    pub fn begin(&mut self, dimension: Dimension, slug: &str) -> (Generation, EntityDescriptor) {
        let descriptor = EntityService::resolve(slug, dimension);
        self.generation += 1;
        self.descriptor = Some(descriptor.clone());
        self.state = ViewState::Loading;
        (self.generation, descriptor)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    /// Returns false when a newer navigation has started since `generation`.
    pub fn commit(&mut self, generation: Generation, result: Result<Vec<PlayerStat>, FetchError>) -> bool {
        if !self.is_current(generation) {
            log::info!("[VIEW] Discard stale result {generation}, current is {}", self.generation);
            return false;
        }
        self.state = result.into();
        true
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            generation: self.generation,
            descriptor: self.descriptor.clone(),
            state: self.state.clone(),
        }
    }
}

pub struct ViewService;

impl ViewService {
    /// Navigates the session to `slug` and returns the committed snapshot,
    /// or None if the result was superseded while in flight.
    pub async fn navigate(session: &SafeViewSession, client: &PlayerClient, dimension: Dimension, slug: &str) -> Option<ViewSnapshot> {
        let (generation, descriptor) = session.write().await.begin(dimension, slug);
        log::info!("[VIEW] Navigate {dimension}/{slug} generation {generation}");
        ViewService::complete(session, client, generation, &descriptor).await
    }

    /// False once a newer navigation has started on the session.
    pub async fn is_current(session: &SafeViewSession, snapshot: &ViewSnapshot) -> bool {
        session.read().await.is_current(snapshot.generation)
    }

    /// Fetches for a navigation that was already started with `begin`.
    pub async fn complete(session: &SafeViewSession, client: &PlayerClient, generation: Generation, descriptor: &EntityDescriptor) -> Option<ViewSnapshot> {
        let result = PlayerService::fetch(client, descriptor.dimension, &descriptor.query_value).await;

        let mut session = session.write().await;
        if session.commit(generation, result) {
            Some(session.snapshot())
        } else {
            None
        }
    }
}
