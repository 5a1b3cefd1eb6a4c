//! Gesture Puzzle - replay driver
//!
//! Feeds recorded hand keypoint frames through the piece controller at a
//! fixed frame rate and reports gesture and placement events.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gesture_puzzle::config::AppConfig;
use gesture_puzzle::gesture::Gesture;
use gesture_puzzle::puzzle::{InteractionEvent, Session, SessionSummary};
use gesture_puzzle::source::{JsonLinesSource, KeypointSource};

/// Gesture Puzzle - drag puzzle pieces with hand gestures
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "puzzle.yaml")]
    config: String,

    /// Recorded keypoint frames (JSON lines)
    #[arg(short, long, required_unless_present_any = ["print_schema", "print_config"])]
    frames: Option<PathBuf>,

    /// Override the replay frame rate
    #[arg(long)]
    fps: Option<u32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Print the configuration JSON schema and exit
    #[arg(long)]
    print_schema: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    if args.print_schema {
        println!("{}", AppConfig::json_schema()?);
        return Ok(());
    }

    let mut config = load_config(&args.config).await?;
    if let Some(fps) = args.fps {
        config.replay.fps = fps;
        config.validate()?;
    }

    if args.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    let frames_path = args
        .frames
        .ok_or_else(|| anyhow::anyhow!("--frames is required"))?;

    let summary = run_replay(&config, &frames_path, shutdown_signal()).await?;
    print_summary(&summary);

    Ok(())
}

async fn load_config(path: &str) -> Result<AppConfig> {
    if Path::new(path).exists() {
        let config = AppConfig::load(path).await?;
        info!("Configuration loaded from {}", path);
        Ok(config)
    } else {
        warn!("Config file {} not found, using built-in defaults", path);
        Ok(AppConfig::default())
    }
}

async fn run_replay(
    config: &AppConfig,
    frames_path: &Path,
    shutdown: impl std::future::Future<Output = ()>,
) -> Result<SessionSummary> {
    let contents = tokio::fs::read_to_string(frames_path)
        .await
        .with_context(|| format!("Failed to read frames file: {}", frames_path.display()))?;
    let mut source = JsonLinesSource::new(Cursor::new(contents), config.tracking.min_confidence);

    let mut session = Session::from_config(config);
    info!(
        pieces = config.puzzle.pieces.len(),
        fps = config.replay.fps,
        "Starting replay of {}",
        frames_path.display()
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(1) / config.replay.fps);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(frame) = source.next_frame()? else {
                    info!("End of frame stream");
                    break;
                };

                for event in session.tick(frame.hand()) {
                    report_event(&event);
                }

                if session.controller().is_complete() {
                    info!("All pieces placed, stopping replay");
                    break;
                }
            }

            _ = &mut shutdown => {
                info!("Shutdown signal received, stopping replay");
                break;
            }
        }
    }

    Ok(session.summary())
}

fn report_event(event: &InteractionEvent) {
    match event {
        InteractionEvent::GestureChanged { to, .. } => match (to, event.status_label()) {
            (Gesture::Fist, Some(label)) => println!("{}", label.yellow().bold()),
            (_, Some(label)) => println!("{}", label.cyan().bold()),
            _ => {}
        },
        InteractionEvent::Grabbed { piece } => {
            println!("  piece {} picked up", piece);
        }
        InteractionEvent::Placed { piece, slot } => {
            println!("  {} piece {} snapped to {}", "✔".green(), piece, slot);
        }
        InteractionEvent::Dropped { piece, position } => {
            println!("  {} piece {} dropped at {}", "·".dimmed(), piece, position);
        }
        InteractionEvent::HoldTimedOut { piece } => {
            println!("  {} piece {} hold timed out", "!".red(), piece);
        }
    }
}

fn print_summary(summary: &SessionSummary) {
    println!("\n{}", "=== Replay Summary ===".bold().cyan());
    println!(
        "  Frames: {} ({} with a hand)",
        summary.frames, summary.frames_with_hand
    );
    println!(
        "  Placed: {}/{}",
        summary.placed.to_string().green(),
        summary.total
    );
    if summary.solved {
        println!("{}", "✅ Puzzle solved!".green().bold());
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
