use anyhow::Result;
use clap::{Parser, ValueEnum};
use mansion_scan::cloudinary::{CloudinaryClient, DEFAULT_API_BASE};
use mansion_scan::config::{self, Credentials};
use mansion_scan::resource::{self, KeywordFilter};
use mansion_scan::{output, report};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Find keyword-matching images in a Cloudinary account and export them
#[derive(Parser, Debug)]
#[command(name = "mansion-scan", version, about, long_about = None)]
struct Args {
    /// Directory the export files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Keyword to match in public ids (repeatable, replaces the defaults)
    #[arg(short, long = "keyword", value_name = "WORD")]
    keywords: Vec<String>,

    /// Admin API base URL
    #[arg(long, env = "CLOUDINARY_API_BASE", default_value = DEFAULT_API_BASE, hide = true)]
    api_base: String,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // MANSION_SCAN_LOG narrows or widens per target; --log-level is the default
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(tracing_level).into())
        .with_env_var("MANSION_SCAN_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("mansion-scan started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("mansion-scan").join("mansion-scan.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".mansion-scan").join("mansion-scan.log");
    }
    PathBuf::from("mansion-scan.log")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Before parsing, so env-backed flags see values from .env
    let dotenv = config::load_dotenv(None);
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    match dotenv {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {:?}", path),
        Ok(None) => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("{:#}", e),
    }

    let credentials = Credentials::from_env()?;
    tracing::info!("Using {:?}", credentials);

    let filter = if args.keywords.is_empty() {
        KeywordFilter::default()
    } else {
        KeywordFilter::new(&args.keywords)
    };
    tracing::info!("Keywords: {:?}", filter.keywords());

    let client = CloudinaryClient::new(credentials, &args.api_base)?;

    report::print_banner();
    let outcome = resource::scan(&client, &filter, report::print_progress).await;
    report::print_summary(&outcome);

    if outcome.matches.is_empty() {
        return Ok(());
    }

    report::print_saving(outcome.matches.len());
    let written = output::write_outputs(&args.output_dir, client.cloud_name(), &outcome.matches)?;
    report::print_written(&written);

    Ok(())
}
