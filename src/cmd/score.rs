// ===== meisterscore/src/cmd/score.rs =====
use crate::reports; // This stays 'crate'
use clap::Args;
use meisterscore::error::MsResult;
use meisterscore::record::ApplicantRecord;
use meisterscore::scorer::Scorer;
use std::fs::File;
use std::io::BufReader;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// JSON applicant record
    #[arg(short, long)]
    pub input: String,

    /// Emit the breakdown as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> MsResult<()> {
    let file = File::open(&args.input)?;
    let record: ApplicantRecord = serde_json::from_reader(BufReader::new(file))?;
    info!(
        category = %record.category,
        track = %record.track,
        "scoring applicant from {}",
        args.input
    );

    let breakdown = scorer.score(&record);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        reports::print_breakdown(scorer.config(), &breakdown);
    }
    Ok(())
}
