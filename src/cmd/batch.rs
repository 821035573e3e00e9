// ===== meisterscore/src/cmd/batch.rs =====
use crate::reports;
use clap::Args;
use meisterscore::error::MsResult;
use meisterscore::loader;
use meisterscore::scorer::{ScoreBreakdown, Scorer};
use std::cmp::Ordering;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV roster file
    #[arg(short, long)]
    pub input: String,

    /// Write the ranked results to a CSV file
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: BatchArgs, scorer: &Scorer) -> MsResult<()> {
    let roster = loader::load_roster_from_file(&args.input)?;

    let mut results: Vec<(String, ScoreBreakdown)> = roster
        .into_iter()
        .map(|entry| {
            let breakdown = scorer.score(&entry.record);
            (entry.name, breakdown)
        })
        .collect();

    results.sort_by(|a, b| {
        b.1.total
            .partial_cmp(&a.1.total)
            .unwrap_or(Ordering::Equal)
    });

    reports::print_batch(scorer.config(), &results);

    if let Some(path) = &args.out {
        write_results_csv(path, &results)?;
        println!("💾 Results written to {}", path);
    }
    Ok(())
}

fn write_results_csv(path: &str, results: &[(String, ScoreBreakdown)]) -> MsResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "rank",
        "student",
        "course",
        "attendance",
        "volunteer",
        "leadership",
        "career",
        "awards",
        "total",
        "free_semester_violation",
    ])?;

    let fmt = |v: Option<f64>| v.map(|x| format!("{:.3}", x)).unwrap_or_default();

    for (rank, (name, b)) in results.iter().enumerate() {
        wtr.write_record([
            (rank + 1).to_string(),
            name.clone(),
            format!("{:.3}", b.course),
            fmt(b.attendance),
            fmt(b.volunteer),
            fmt(b.leadership),
            fmt(b.career),
            fmt(b.awards),
            format!("{:.3}", b.total),
            b.free_semester_violation.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
