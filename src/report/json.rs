use serde::Serialize;

use crate::report::SummaryData;

#[derive(Debug, Serialize)]
struct SummaryJson {
    tool: ToolMeta,
    season: SeasonMeta,
    standings: Vec<StandingRow>,
}

#[derive(Debug, Serialize)]
struct ToolMeta {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SeasonMeta {
    round_filter: Option<u32>,
    n_records: usize,
    n_tippers: usize,
    n_rounds: usize,
}

#[derive(Debug, Serialize)]
struct StandingRow {
    position: usize,
    tipper: &'static str,
    correct_tips: u32,
    total_tips: u32,
    success_rate: f64,
    rounds_participated: usize,
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let standings = data
        .standings
        .iter()
        .map(|s| StandingRow {
            position: s.position,
            tipper: s.tipper,
            correct_tips: s.stats.correct_tips,
            total_tips: s.stats.total_tips,
            success_rate: s.stats.success_rate,
            rounds_participated: s.stats.rounds_participated(),
        })
        .collect();

    let summary = SummaryJson {
        tool: ToolMeta {
            name: data.tool_name.clone(),
            version: data.tool_version.clone(),
        },
        season: SeasonMeta {
            round_filter: data.round_filter,
            n_records: data.n_records,
            n_tippers: data.n_tippers,
            n_rounds: data.n_rounds,
        },
        standings,
    };

    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::standings::Standing;
    use crate::model::stats::TipperStats;

    #[test]
    fn test_summary_json_round_trips() {
        let data = SummaryData {
            tool_name: "tipboard".to_string(),
            tool_version: "0.0.0".to_string(),
            round_filter: Some(1),
            n_records: 2,
            n_tippers: 1,
            n_rounds: 1,
            standings: vec![Standing {
                position: 1,
                tipper: "Poppy",
                stats: TipperStats {
                    total_tips: 2,
                    correct_tips: 2,
                    incorrect_tips: 0,
                    success_rate: 100.0,
                    rounds: [1].into_iter().collect(),
                },
            }],
        };

        let json = render_summary_json(&data).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tool"]["name"], "tipboard");
        assert_eq!(value["season"]["round_filter"], 1);
        assert_eq!(value["standings"][0]["tipper"], "Poppy");
        assert_eq!(value["standings"][0]["success_rate"], 100.0);
        assert_eq!(value["standings"][0]["rounds_participated"], 1);
    }
}
