mod data;
mod logging;
mod model;
mod pipeline;
mod report;

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};

use crate::data::TipRecord;
use crate::data::season::season_records;
use crate::model::standings::Standing;
use crate::pipeline::aggregate::aggregate;
use crate::pipeline::emit::write_reports;
use crate::pipeline::rank::rank;
use crate::report::SummaryData;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Parser)]
#[command(name = "tipboard", version, about = "AFL tipping leaderboard for the family season")]
struct Opt {
    /// Restrict the tally to a single round.
    #[arg(long)]
    round: Option<u32>,

    /// Print the season summary as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Also write leaderboard.tsv, summary.json and report.txt into this directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("data error: {0}")]
    Data(#[from] data::DataError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    logging::init();
    if let Err(err) = run(Opt::parse()) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Error> {
    let mut records = season_records()?;
    if let Some(round) = opt.round {
        records.retain(|r| r.round == round);
        if records.is_empty() {
            warn!("no tips recorded for round {round}");
        }
    }

    let standings = rank(aggregate(&records));
    let summary = build_summary(&records, standings, opt.round);

    if opt.json {
        println!("{}", render_summary_json(&summary).map_err(std::io::Error::other)?);
    } else {
        print!("{}", render_report_text(&summary));
    }

    if let Some(dir) = &opt.out {
        write_reports(&summary, dir)?;
        info!("reports written to {}", dir.display());
    }

    Ok(())
}

fn build_summary(
    records: &[TipRecord],
    standings: Vec<Standing>,
    round_filter: Option<u32>,
) -> SummaryData {
    let rounds: BTreeSet<u32> = records.iter().map(|r| r.round).collect();
    SummaryData {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        round_filter,
        n_records: records.len(),
        n_tippers: standings.len(),
        n_rounds: rounds.len(),
        standings,
    }
}
