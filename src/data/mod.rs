use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

pub mod season;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub id: u32,
    pub round: u32,
    pub home: &'static str,
    pub away: &'static str,
    pub winner: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub match_id: u32,
    pub tipper: &'static str,
    pub team: &'static str,
}

/// One scored tip: a tipper's selected team joined against the match result.
#[derive(Debug, Clone)]
pub struct TipRecord {
    pub tipper: &'static str,
    pub round: u32,
    pub match_id: u32,
    pub team_tipped: &'static str,
    pub winner: &'static str,
}

impl TipRecord {
    pub fn is_correct(&self) -> bool {
        self.team_tipped == self.winner
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("tip by {tipper} references unknown match id {match_id}")]
    UnknownMatch { tipper: &'static str, match_id: u32 },
    #[error("tip by {tipper} names {team}, but match {match_id} is {home} v {away}")]
    TeamNotPlaying {
        tipper: &'static str,
        team: &'static str,
        match_id: u32,
        home: &'static str,
        away: &'static str,
    },
}

/// Join tips against match results. Tips on matches without a recorded
/// winner are not scored.
pub fn build_records(matches: &[MatchResult], tips: &[Tip]) -> Result<Vec<TipRecord>, DataError> {
    let mut by_id: HashMap<u32, &MatchResult> = HashMap::with_capacity(matches.len());
    for m in matches {
        by_id.insert(m.id, m);
    }

    let mut out = Vec::with_capacity(tips.len());
    for tip in tips {
        let m = by_id.get(&tip.match_id).ok_or(DataError::UnknownMatch {
            tipper: tip.tipper,
            match_id: tip.match_id,
        })?;
        if tip.team != m.home && tip.team != m.away {
            return Err(DataError::TeamNotPlaying {
                tipper: tip.tipper,
                team: tip.team,
                match_id: m.id,
                home: m.home,
                away: m.away,
            });
        }
        let Some(winner) = m.winner else {
            debug!(
                "match {} has no recorded winner; skipping tip by {}",
                m.id, tip.tipper
            );
            continue;
        };
        out.push(TipRecord {
            tipper: tip.tipper,
            round: m.round,
            match_id: m.id,
            team_tipped: tip.team,
            winner,
        });
    }

    Ok(out)
}
