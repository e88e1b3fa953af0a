use crate::model::stats::TipperStats;

/// One leaderboard row. Positions are 1-indexed.
#[derive(Debug, Clone)]
pub struct Standing {
    pub position: usize,
    pub tipper: &'static str,
    pub stats: TipperStats,
}
