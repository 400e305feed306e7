use std::cmp::Ordering;

use crate::{models::Dimension, models_api::player::PlayerStat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Most minutes first.
    MinutesDesc,
    /// Most goals first, then most minutes.
    GoalsThenMinutesDesc,
}

impl OrderingPolicy {
    pub fn for_dimension(dimension: Dimension) -> OrderingPolicy {
        match dimension {
            Dimension::Team | Dimension::Nation => OrderingPolicy::MinutesDesc,
            Dimension::Position => OrderingPolicy::GoalsThenMinutesDesc,
        }
    }

    pub fn compare(&self, a: &PlayerStat, b: &PlayerStat) -> Ordering {
        match self {
            OrderingPolicy::MinutesDesc => b.min.cmp(&a.min),
            OrderingPolicy::GoalsThenMinutesDesc => b.gls.cmp(&a.gls).then_with(|| b.min.cmp(&a.min)),
        }
    }

    /// Stable, so rows that compare equal keep the backend order.
    pub fn apply(&self, players: &mut [PlayerStat]) {
        players.sort_by(|a, b| self.compare(a, b));
    }
}
