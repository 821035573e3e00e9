// ===== meisterscore/src/main.rs =====
use clap::{Parser, Subcommand};
use meisterscore::config::{School, SchoolConfig};
use meisterscore::scorer::grades::TokenMatching;
use meisterscore::scorer::Scorer;
use std::process;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, value_enum, default_value_t = School::Agriculture)]
    school: School,

    /// Grade-token matching override; each school preset pins a default
    #[arg(global = true, short, long, value_enum)]
    matching: Option<TokenMatching>,

    /// JSON school-config override file
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    println!("\n🎓 Initializing MeisterScore...");

    let mut config = if let Some(path) = &cli.config {
        println!("📂 Loading Config Override: {}", path);
        SchoolConfig::load_from_file(path).unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        })
    } else {
        cli.school.config()
    };

    // Rosters arrive from school spreadsheets with free-form grade
    // tokens; the batch path defaults to lenient matching.
    if let Some(matching) = cli.matching {
        config.matching = matching;
    } else if matches!(cli.command, Commands::Batch(_)) {
        config.matching = TokenMatching::Lenient;
    }

    let scorer = Scorer::new(config);

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Batch(args) => cmd::batch::run(args, &scorer),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
