use std::collections::BTreeMap;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use futures::stream::{FuturesUnordered, StreamExt};
use log::LevelFilter;
use matchday::WebScraper;
use matchday::types::GameRecord;
use matchday::utils::{GameFilter, ScoreboardStats};

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "An espn.com football scoreboard scraper", long_about = None)]
struct Cli {
    #[arg(
        required = true,
        value_name = "DATE",
        value_parser = parse_date,
        help = "Date(s) to fetch, in YYYYMMDD or YYYY-MM-DD format"
    )]
    dates: Vec<NaiveDate>,

    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    format: OutputFormat,

    #[arg(long, help = "Only keep games involving this team (substring match)")]
    team: Option<String>,

    #[arg(long, help = "Only keep games that already have a score")]
    scored_only: bool,

    #[arg(
        long,
        help = "Maximum number of games to show per date",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    limit: Option<usize>,

    #[arg(
        long,
        help = "Number of games to skip from the beginning of each date",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    offset: Option<usize>,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|e| e.to_string())
}

fn serialize_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Error serializing to JSON: {}", e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let filter = GameFilter {
        team: cli.team.clone(),
        scored_only: cli.scored_only,
        limit: cli.limit,
        offset: cli.offset,
    }
    .validate()
    .unwrap_or_else(|e| {
        log::error!("Invalid args: {e}");
        process::exit(1);
    });

    let scraper = WebScraper::new().unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });

    let dates: Vec<String> = cli
        .dates
        .iter()
        .map(|d| d.format("%Y%m%d").to_string())
        .collect();

    let mut futures: FuturesUnordered<_> = dates
        .iter()
        .map(|date| {
            let scraper = &scraper;
            async move { (date, scraper.fetch_scoreboard(date).await) }
        })
        .collect();

    let mut results: BTreeMap<String, Vec<GameRecord>> = BTreeMap::new();
    while let Some((date, result)) = futures.next().await {
        match result {
            Ok(games) => {
                results.insert(date.clone(), filter.clone().apply(games));
            }
            Err(e) => log::warn!("Failed to fetch scoreboard for {}: {}", date, e),
        }
    }

    if results.is_empty() {
        log::error!("No scoreboard could be fetched");
        process::exit(1);
    }

    match cli.format {
        OutputFormat::Json => {
            if let [date] = dates.as_slice() {
                serialize_json(&results[date]);
            } else {
                serialize_json(&results);
            }
        }
        OutputFormat::Text => {
            for (date, games) in &results {
                println!("Scoreboard for {}:", date);
                if games.is_empty() {
                    println!("No games to display.");
                } else {
                    for (i, game) in games.iter().enumerate() {
                        println!("{:>3}. {}", i + 1, game);
                    }
                    print!("{}", ScoreboardStats::from_games(games));
                }
                println!();
            }
        }
    }
}
