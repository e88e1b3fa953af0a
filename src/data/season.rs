use crate::data::{DataError, MatchResult, Tip, TipRecord, build_records};

pub const TIPPERS: &[&str] = &["Granny", "James", "Leo", "Mat", "Mumma and Halle", "Poppy"];

const ALL: &[&str] = TIPPERS;

const MATCHES: &[MatchResult] = &[
    // Round 0 (pre-season)
    MatchResult { id: 208, round: 0, home: "SYD", away: "HAW", winner: Some("HAW") },
    MatchResult { id: 209, round: 0, home: "GWS", away: "COL", winner: Some("GWS") },
    // Round 1
    MatchResult { id: 210, round: 1, home: "RIC", away: "CAR", winner: Some("RIC") },
    MatchResult { id: 211, round: 1, home: "HAW", away: "ESS", winner: Some("HAW") },
    MatchResult { id: 212, round: 1, home: "GEE", away: "FRE", winner: Some("GEE") },
    MatchResult { id: 213, round: 1, home: "SYD", away: "BRL", winner: Some("BRL") },
    MatchResult { id: 214, round: 1, home: "WB", away: "NM", winner: Some("WB") },
    MatchResult { id: 215, round: 1, home: "COL", away: "PA", winner: Some("COL") },
    MatchResult { id: 216, round: 1, home: "ADL", away: "STK", winner: Some("ADL") },
    MatchResult { id: 217, round: 1, home: "MEL", away: "GWS", winner: Some("GWS") },
    MatchResult { id: 218, round: 1, home: "WC", away: "GC", winner: Some("GC") },
    // Round 2
    MatchResult { id: 219, round: 2, home: "CAR", away: "HAW", winner: Some("HAW") },
    MatchResult { id: 220, round: 2, home: "WB", away: "COL", winner: Some("COL") },
    MatchResult { id: 221, round: 2, home: "ESS", away: "ADL", winner: Some("ADL") },
    MatchResult { id: 222, round: 2, home: "PA", away: "RIC", winner: Some("PA") },
    MatchResult { id: 223, round: 2, home: "STK", away: "GEE", winner: Some("STK") },
    MatchResult { id: 224, round: 2, home: "BRL", away: "WC", winner: Some("BRL") },
    MatchResult { id: 225, round: 2, home: "NM", away: "MEL", winner: Some("NM") },
    MatchResult { id: 226, round: 2, home: "FRE", away: "SYD", winner: Some("SYD") },
    // Round 3
    MatchResult { id: 227, round: 3, home: "ESS", away: "PA", winner: Some("ESS") },
];

#[derive(Debug, Clone, Copy)]
struct TipGroup {
    match_id: u32,
    team: &'static str,
    tippers: &'static [&'static str],
}

const TIP_GROUPS: &[TipGroup] = &[
    // Round 0
    TipGroup { match_id: 208, team: "HAW", tippers: &["James", "Poppy"] },
    TipGroup { match_id: 208, team: "SYD", tippers: &["Granny", "Leo", "Mat", "Mumma and Halle"] },
    TipGroup { match_id: 209, team: "GWS", tippers: &["Leo", "Poppy"] },
    TipGroup { match_id: 209, team: "COL", tippers: &["Granny", "James", "Mat", "Mumma and Halle"] },
    // Round 1
    TipGroup { match_id: 210, team: "CAR", tippers: ALL },
    TipGroup { match_id: 211, team: "HAW", tippers: &["Granny", "James", "Mat", "Mumma and Halle", "Poppy"] },
    TipGroup { match_id: 211, team: "ESS", tippers: &["Leo"] },
    TipGroup { match_id: 212, team: "GEE", tippers: ALL },
    TipGroup { match_id: 213, team: "BRL", tippers: ALL },
    TipGroup { match_id: 214, team: "WB", tippers: ALL },
    TipGroup { match_id: 215, team: "PA", tippers: &["Granny", "James", "Leo"] },
    TipGroup { match_id: 215, team: "COL", tippers: &["Mat", "Mumma and Halle", "Poppy"] },
    TipGroup { match_id: 216, team: "ADL", tippers: ALL },
    TipGroup { match_id: 217, team: "GWS", tippers: ALL },
    TipGroup { match_id: 218, team: "GC", tippers: &["Granny", "Leo", "Mat", "Mumma and Halle", "Poppy"] },
    TipGroup { match_id: 218, team: "WC", tippers: &["James"] },
    // Round 2
    TipGroup { match_id: 219, team: "HAW", tippers: &["Granny", "James", "Mat", "Mumma and Halle", "Poppy"] },
    TipGroup { match_id: 219, team: "CAR", tippers: &["Leo"] },
    TipGroup { match_id: 220, team: "COL", tippers: &["Granny", "James", "Mat", "Mumma and Halle", "Poppy"] },
    TipGroup { match_id: 220, team: "WB", tippers: &["Leo"] },
    TipGroup { match_id: 221, team: "ADL", tippers: ALL },
    TipGroup { match_id: 222, team: "PA", tippers: ALL },
    TipGroup { match_id: 223, team: "GEE", tippers: ALL },
    TipGroup { match_id: 224, team: "BRL", tippers: ALL },
    TipGroup { match_id: 225, team: "MEL", tippers: ALL },
    TipGroup { match_id: 226, team: "FRE", tippers: &["Granny", "Mat", "Mumma and Halle"] },
    TipGroup { match_id: 226, team: "SYD", tippers: &["James", "Leo", "Poppy"] },
    // Round 3
    TipGroup { match_id: 227, team: "PA", tippers: ALL },
];

/// The embedded season, joined and scored.
pub fn season_records() -> Result<Vec<TipRecord>, DataError> {
    let mut tips = Vec::new();
    for group in TIP_GROUPS {
        for tipper in group.tippers {
            tips.push(Tip {
                match_id: group.match_id,
                tipper,
                team: group.team,
            });
        }
    }
    build_records(MATCHES, &tips)
}
