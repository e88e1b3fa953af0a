use std::collections::BTreeMap;

use crate::data::TipRecord;
use crate::model::stats::TipperStats;

pub type TallyMap = BTreeMap<&'static str, TipperStats>;

/// One pass over the records: counters and the per-tipper round set.
/// Stats are created lazily on a tipper's first record.
pub fn accumulate(records: &[TipRecord]) -> TallyMap {
    let mut tally = TallyMap::new();
    for record in records {
        let stats = tally.entry(record.tipper).or_default();
        stats.total_tips += 1;
        if record.is_correct() {
            stats.correct_tips += 1;
        } else {
            stats.incorrect_tips += 1;
        }
        stats.rounds.insert(record.round);
    }
    tally
}

/// Derive success rates. Tippers with no tips keep a rate of zero.
pub fn finalize(tally: &mut TallyMap) {
    for stats in tally.values_mut() {
        if stats.total_tips > 0 {
            stats.success_rate = 100.0 * stats.correct_tips as f64 / stats.total_tips as f64;
        }
    }
}

pub fn aggregate(records: &[TipRecord]) -> TallyMap {
    let mut tally = accumulate(records);
    finalize(&mut tally);
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::stats::TipperStats;

    fn record(tipper: &'static str, round: u32, tipped: &'static str, winner: &'static str) -> TipRecord {
        TipRecord {
            tipper,
            round,
            match_id: round,
            team_tipped: tipped,
            winner,
        }
    }

    fn example_records() -> Vec<TipRecord> {
        vec![
            record("A", 1, "HAW", "HAW"),
            record("A", 2, "SYD", "GEE"),
            record("B", 1, "HAW", "HAW"),
            record("B", 2, "GEE", "GEE"),
        ]
    }

    #[test]
    fn test_accumulate_counts_and_rounds() {
        let tally = aggregate(&example_records());
        let a = &tally["A"];
        assert_eq!(a.correct_tips, 1);
        assert_eq!(a.total_tips, 2);
        assert_eq!(a.incorrect_tips, 1);
        assert_eq!(a.success_rate, 50.0);
        assert_eq!(a.rounds_participated(), 2);

        let b = &tally["B"];
        assert_eq!(b.correct_tips, 2);
        assert_eq!(b.total_tips, 2);
        assert_eq!(b.success_rate, 100.0);
        assert_eq!(b.rounds_participated(), 2);
    }

    #[test]
    fn test_counter_invariants_hold() {
        let tally = aggregate(&example_records());
        for stats in tally.values() {
            assert!(stats.correct_tips <= stats.total_tips);
            assert_eq!(stats.correct_tips + stats.incorrect_tips, stats.total_tips);
            assert!(stats.success_rate >= 0.0 && stats.success_rate <= 100.0);
        }
    }

    #[test]
    fn test_finalize_guards_division_by_zero() {
        let mut tally = TallyMap::new();
        tally.insert("idle", TipperStats::default());
        finalize(&mut tally);
        assert_eq!(tally["idle"].success_rate, 0.0);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = example_records();
        assert_eq!(aggregate(&records), aggregate(&records));
    }
}
