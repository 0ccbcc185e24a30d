//! Campuswatch CLI - realtime security alert listener.
//!
//! This is the binary entry point. See the `campuswatch` library for the
//! channel implementation.

use anyhow::Result;
use campuswatch::{AlertChannel, AlertNotification, ChannelOptions, Config, RealtimeAlertEvent};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

/// Global allocator configured per M-MIMALLOC-APPS guideline.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

// CLI
#[derive(Parser)]
#[command(name = "campuswatch")]
#[command(version)]
#[command(about = "Realtime alert listener for the campus security dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to the alert channel and render notifications until ctrl-c
    Listen,
    /// Show or update configuration (`config`, `config server_url`, `config server_url URL`)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Listen => run_listen()?,
        Commands::Config { key, value } => run_config(key, value)?,
    }

    Ok(())
}

/// Set up env_logger with an optional file target.
///
/// `CAMPUSWATCH_LOG_FILE` redirects logs to a file; the default target
/// (stderr) keeps notification output on stdout uncluttered enough for
/// piping.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_timestamp_secs();

    if let Ok(path) = std::env::var("CAMPUSWATCH_LOG_FILE") {
        match std::fs::File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Warning: could not open log file {path}: {e}"),
        }
    }

    builder.init();
}

/// Run the listener until interrupted.
fn run_listen() -> Result<()> {
    let config = Config::load()?;

    if !config.has_token() {
        log::warn!("No CAMPUSWATCH_TOKEN set; connecting unauthenticated");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        println!(
            "Listening for alerts from {} (ctrl-c to stop)",
            config.server_url
        );

        let channel = AlertChannel::spawn(ChannelOptions::from_config(&config), render_alert);

        tokio::signal::ctrl_c().await?;

        println!("Shutting down...");
        channel.shutdown();
        // Give the close frame a moment to flush before the runtime drops
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}

/// Render one accepted alert event to stdout and the log sink.
fn render_alert(event: RealtimeAlertEvent) {
    let notification = AlertNotification::from_event(&event);

    log::info!(
        "[Alerts] severity={} {}: {}",
        event.severity,
        notification.message,
        notification.detail
    );
    println!(
        "{} [{}] {}: {}",
        chrono::Local::now().format("%H:%M:%S"),
        notification.style,
        notification.message,
        notification.detail
    );
}

/// Inspect or update the configuration file.
fn run_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    match (key, value) {
        (None, None) => println!("{}", serde_json::to_string_pretty(&config)?),
        (Some(k), None) => match k.as_str() {
            "server_url" => println!("{}", config.server_url),
            other => anyhow::bail!("Unknown config key '{other}'"),
        },
        (Some(k), Some(v)) => match k.as_str() {
            "server_url" => {
                config.server_url = v;
                config.save()?;
                println!("server_url = {}", config.server_url);
            }
            other => anyhow::bail!("Unknown config key '{other}'"),
        },
        _ => {}
    }

    Ok(())
}
