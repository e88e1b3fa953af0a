use crate::report::SummaryData;

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("=== AFL TIPPING LEADERBOARD ===\n");
    out.push_str(&format!(
        "{:<4} {:<20} {:<8} {:<8} {:<10} {:<8}\n",
        "Pos", "Tipper", "Correct", "Total", "Success %", "Rounds"
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for standing in &data.standings {
        out.push_str(&format!(
            "{:<4} {:<20} {:<8} {:<8} {:<10.1} {:<8}\n",
            standing.position,
            standing.tipper,
            standing.stats.correct_tips,
            standing.stats.total_tips,
            standing.stats.success_rate,
            standing.stats.rounds_participated()
        ));
    }

    out.push_str("\n=== DETAILED BREAKDOWN ===\n");
    for standing in &data.standings {
        out.push_str(&format!(
            "{}: {}/{} ({:.1}%) across {} rounds\n",
            standing.tipper,
            standing.stats.correct_tips,
            standing.stats.total_tips,
            standing.stats.success_rate,
            standing.stats.rounds_participated()
        ));
    }

    out
}
