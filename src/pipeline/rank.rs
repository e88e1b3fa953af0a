use crate::model::standings::Standing;
use crate::pipeline::aggregate::TallyMap;

/// Total order: correct tips descending, ties broken by tipper name ascending.
pub fn rank(tally: TallyMap) -> Vec<Standing> {
    let mut entries: Vec<_> = tally.into_iter().collect();
    entries.sort_by(|a, b| {
        b.1.correct_tips
            .cmp(&a.1.correct_tips)
            .then_with(|| a.0.cmp(b.0))
    });
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, (tipper, stats))| Standing {
            position: idx + 1,
            tipper,
            stats,
        })
        .collect()
}
