use tracing::log;

use crate::{
    entity_service::EntityService,
    models::{Dimension, StatValue},
    models_api::{player::PlayerStat, view::{ApiPlayerView, ViewState}},
    models_external::player::RawPlayerRow,
    ordering::OrderingPolicy,
    rest_client::{FetchError, PlayerClient},
};

/// Backend marker for the per-team summary row.
pub const SQUAD_TOTAL: &str = "Squad Total";

fn count(value: &Option<StatValue>) -> i32 {
    value.as_ref().and_then(|e| e.to_count()).unwrap_or(0)
}

impl PlayerStat {
    fn from_raw(e: &RawPlayerRow) -> Option<Self> {
        let name = e.name.as_deref().filter(|name| !name.is_empty() && *name != SQUAD_TOTAL)?;
        let gls = count(&e.gls);
        let ast = count(&e.ast);
        Some(PlayerStat {
            name: name.to_string(),
            team: e.team.clone(),
            nation: e.nation.clone(),
            pos: e.pos.clone(),
            age: e.age.as_ref().and_then(|e| e.to_count()),
            mp: count(&e.mp),
            starts: count(&e.starts),
            min: count(&e.min),
            gls,
            ast,
            pk: count(&e.pk),
            crdy: count(&e.crdy),
            crdr: count(&e.crdr),
            xg: e.xg.as_ref().and_then(|e| e.to_float()),
            xag: e.xag.as_ref().and_then(|e| e.to_float()),
            ga: gls.saturating_add(ast),
        })
    }
}

pub struct PlayerService;

impl PlayerService {
    /// Drops unnamed and aggregate rows, keeps everything else in backend order.
    pub fn normalize(rows: &[RawPlayerRow]) -> Vec<PlayerStat> {
        rows.iter().filter_map(PlayerStat::from_raw).collect()
    }

    pub fn present(dimension: Dimension, rows: &[RawPlayerRow]) -> Vec<PlayerStat> {
        let mut players = PlayerService::normalize(rows);
        OrderingPolicy::for_dimension(dimension).apply(&mut players);
        players
    }

    pub async fn fetch(client: &PlayerClient, dimension: Dimension, query_value: &str) -> Result<Vec<PlayerStat>, FetchError> {
        let rows = client.fetch_players(dimension, query_value).await?;
        let players = PlayerService::present(dimension, &rows);
        log::info!("[PLAYERS] {dimension}={query_value} {} rows, {} players", rows.len(), players.len());
        Ok(players)
    }

    /// Resolve, fetch and order in one go, for callers without a view session.
    pub async fn load(client: &PlayerClient, dimension: Dimension, slug: &str) -> ApiPlayerView {
        let descriptor = EntityService::resolve(slug, dimension);
        let state: ViewState = PlayerService::fetch(client, dimension, &descriptor.query_value).await.into();
        ApiPlayerView { descriptor, state }
    }
}
