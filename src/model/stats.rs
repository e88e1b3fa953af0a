use std::collections::BTreeSet;

/// Per-tipper counters. Mutated during accumulation, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipperStats {
    pub total_tips: u32,
    pub correct_tips: u32,
    pub incorrect_tips: u32,
    pub success_rate: f64,
    pub rounds: BTreeSet<u32>,
}

impl TipperStats {
    pub fn rounds_participated(&self) -> usize {
        self.rounds.len()
    }
}
