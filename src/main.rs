//! Command-line front end for the table tennis ranking ladder
//!
//! Each invocation performs one session operation against the JSON session
//! file, prints the result, and exits non-zero with a notice when the
//! operation is rejected.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use table_tennis_rank::config::AppConfig;
use table_tennis_rank::report::{render_notice, render_outcome, render_ranking};
use table_tennis_rank::utils::{parse_score, session_date};
use table_tennis_rank::{RankingError, Session};
use tracing::{debug, info};

/// Table Tennis Rank - local ranking ladder
#[derive(Parser)]
#[command(
    name = "ttrank",
    version,
    about = "Keep an informal table tennis ranking for one session",
    long_about = "ttrank keeps a ranking of players for a single table tennis session. \
                 Players register with a starting score; every finished game moves points \
                 from the loser to the winner, with a bonus for bigger margins."
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Session file override
    #[arg(long, value_name = "FILE", help = "Override the session file path")]
    store: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without touching the session")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new player
    Register {
        /// Player ID
        id: String,
        /// Starting score
        #[arg(allow_hyphen_values = true)]
        score: String,
    },
    /// Remove a player from the session
    Remove {
        /// Player ID
        id: String,
    },
    /// Show the current ranking
    #[command(alias = "ranking")]
    List,
    /// Record a finished game
    Record {
        /// Home player ID
        home: String,
        /// Away player ID
        away: String,
        /// Home player's points
        #[arg(allow_hyphen_values = true)]
        home_score: String,
        /// Away player's points
        #[arg(allow_hyphen_values = true)]
        away_score: String,
    },
    /// Clear every player and start a fresh session
    Reset,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }
    if let Some(store) = &args.store {
        config.storage.path = store.clone();
    }

    table_tennis_rank::config::validate_config(&config)?;
    Ok(config)
}

fn run(command: Command, session: &mut Session) -> Result<(), RankingError> {
    match command {
        Command::Register { id, score } => {
            let score = parse_score(&score)?;
            session.register_player(&id, score)?;
            println!("Registered {} with score {}", id, score);
        }
        Command::Remove { id } => {
            session.remove_player(&id)?;
            println!("Removed {}", id);
        }
        Command::List => {
            print!("{}", render_ranking(&session.list_ranked(), &session_date()));
        }
        Command::Record {
            home,
            away,
            home_score,
            away_score,
        } => {
            let home_score = parse_score(&home_score)?;
            let away_score = parse_score(&away_score)?;
            let outcome = session.record_game(&home, &away, home_score, away_score)?;
            print!("{}", render_outcome(&outcome));
        }
        Command::Reset => {
            session.reset_session()?;
            println!("Session cleared");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} {} using session file {}",
        config.service.name,
        table_tennis_rank::VERSION,
        config.storage.path.display()
    );

    if args.dry_run {
        println!("Configuration OK");
        println!("  Session file: {}", config.storage.path.display());
        println!("  Reset on start: {}", config.storage.reset_on_start);
        println!(
            "  Points: win {}, loss {}",
            config.rating.win_points, config.rating.loss_points
        );
        return Ok(());
    }

    let mut session = match Session::open(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", render_notice(&e));
            std::process::exit(1);
        }
    };
    debug!(
        "Rating rule: {}",
        session.engine().calculator().config()
    );

    if let Err(e) = run(args.command, &mut session) {
        eprintln!("{}", render_notice(&e));
        std::process::exit(1);
    }

    Ok(())
}
