//! Command-line harness: seat a table, play five rounds, print the results.
//!
//! Interactive seats read their answers from stdin. With `--log`, step
//! records are appended to a JSON list on disk, keeping whatever the file
//! already held.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use temple_expedition::{
    EventLog, Expedition, ExpeditionConfig, InputSource, RoundSummary, StrategyKind,
};

/// Terminal input shared by every interactive seat.
///
/// All seats read through the process-wide stdin buffer, so piped answers
/// are handed out line by line in asking order.
struct Console;

impl InputSource for Console {
    fn request(&mut self, prompt: &str) -> temple_expedition::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[derive(Parser)]
#[command(name = "expedition")]
#[command(about = "Simulate a five-round temple expedition")]
struct Args {
    /// JSON configuration file; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of players
    #[arg(short, long)]
    players: Option<usize>,

    /// Master seed
    #[arg(long)]
    seed: Option<u64>,

    /// Strategy per seat, cycled over the table
    #[arg(long, value_enum, value_delimiter = ',')]
    strategies: Option<Vec<StrategyKind>>,

    /// Append step records to this JSON file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ExpeditionConfig::default(),
    };
    if let Some(players) = args.players {
        config.player_count = players;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(strategies) = args.strategies {
        config.strategies = strategies;
    }
    info!(?config, "starting expedition");

    let mut game = Expedition::from_config(config, EventLog::new(), |_| {
        Some(Box::new(Console) as Box<dyn InputSource>)
    })?;

    while let Some(round) = game.next_round() {
        println!("This is round number: {round}");
        let summary = game.play_round()?.clone();
        print_round(&game, &summary);
        if round < temple_expedition::ROUNDS {
            println!("Best of luck for the next round!");
        }
    }

    let outcome = game
        .outcome()
        .ok_or("expedition ended before the final round")?;
    println!();
    for (id, name) in outcome.names.iter() {
        println!("{name} - {}", outcome.total(id));
    }
    let leaders: Vec<_> = outcome.leaders.iter().map(|&id| outcome.names[id].as_str()).collect();
    println!("Leading: {}", leaders.join(", "));

    if let Some(path) = args.log {
        let mut stored = if path.exists() {
            EventLog::from_json(&fs::read_to_string(&path)?)?
        } else {
            EventLog::new()
        };
        stored.extend(game.into_log());
        fs::write(&path, stored.to_json()?)?;
        info!(path = %path.display(), records = stored.len(), "event log written");
    }

    Ok(())
}

fn print_round(game: &Expedition, summary: &RoundSummary) {
    println!("The cards drawn in this round were:");
    for card in &summary.revealed {
        println!("Card: {card}");
    }
    if let Some(level) = summary.bust {
        println!(
            "The {} struck twice! {} player(s) lost {} treasure.",
            level.name(),
            summary.busted.len(),
            summary.lost_to_bust
        );
    }
    if summary.forfeited > 0 {
        println!("Treasure left behind in the temple: {}", summary.forfeited);
    }

    println!("Player stats are: ");
    for (_, player) in game.players().iter() {
        println!(
            "Player Name: {} , Total Treasure: {}",
            player.name(),
            player.total_treasure()
        );
    }
}
