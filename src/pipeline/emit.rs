use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{SummaryData, format_rate};

/// Write leaderboard.tsv, summary.json and report.txt into the out dir.
pub fn write_reports(data: &SummaryData, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_standings_tsv(data, &out_dir.join("leaderboard.tsv"))?;

    let json = render_summary_json(data).map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    write_text(&out_dir.join("report.txt"), &render_report_text(data))?;

    Ok(())
}

fn write_standings_tsv(data: &SummaryData, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "position",
        "tipper",
        "correct_tips",
        "total_tips",
        "success_rate",
        "rounds_participated",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for standing in &data.standings {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            standing.position,
            standing.tipper,
            standing.stats.correct_tips,
            standing.stats.total_tips,
            format_rate(standing.stats.success_rate),
            standing.stats.rounds_participated()
        )?;
    }

    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::standings::Standing;
    use crate::model::stats::TipperStats;

    fn summary() -> SummaryData {
        SummaryData {
            tool_name: "tipboard".to_string(),
            tool_version: "0.0.0".to_string(),
            round_filter: None,
            n_records: 2,
            n_tippers: 1,
            n_rounds: 2,
            standings: vec![Standing {
                position: 1,
                tipper: "Poppy",
                stats: TipperStats {
                    total_tips: 2,
                    correct_tips: 1,
                    incorrect_tips: 1,
                    success_rate: 50.0,
                    rounds: [1, 2].into_iter().collect(),
                },
            }],
        }
    }

    #[test]
    fn test_write_reports_emits_all_files() {
        let dir = std::env::temp_dir().join(format!("tipboard-emit-{}", std::process::id()));
        write_reports(&summary(), &dir).unwrap();

        let tsv = fs::read_to_string(dir.join("leaderboard.tsv")).unwrap();
        assert!(tsv.starts_with("position\ttipper\tcorrect_tips"));
        assert!(tsv.contains("1\tPoppy\t1\t2\t50.0\t2"));

        let json = fs::read_to_string(dir.join("summary.json")).unwrap();
        assert!(json.contains("\"tipper\": \"Poppy\""));

        let report = fs::read_to_string(dir.join("report.txt")).unwrap();
        assert!(report.starts_with("=== AFL TIPPING LEADERBOARD ==="));

        fs::remove_dir_all(&dir).unwrap();
    }
}
