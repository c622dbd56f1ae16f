mod app;
mod app_log;
mod command;
mod event;
mod focus;
mod panes;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use parqview_config::AppConfig;
use parqview_core::ParquetLoader;

use crate::app::App;
use crate::app_log::AppLogMakeWriter;

const CRASH_LOG_LINES: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "parqview", version, about = "Browse a directory and preview parquet files in the terminal")]
struct Cli {
    /// Directory to start browsing in
    dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the debug log
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Number of rows to preview
    #[arg(short, long)]
    rows: Option<usize>,

    /// Write the default config file and exit
    #[arg(long, default_value_t = false)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => AppConfig::init_at(path)?,
            None => AppConfig::init_default()?,
        };
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if let Some(rows) = cli.rows {
        config.general.preview_rows = rows;
    }

    let log_path = cli.log_file.clone().unwrap_or_else(|| PathBuf::from(&config.general.log_file));
    init_tracing(&log_path)?;

    let start_dir = config.start_dir(cli.dir.as_deref());
    let loader = ParquetLoader::new(config.general.preview_rows, config.general.preview_columns);
    let mut app = App::new(&config, start_dir, Box::new(loader));

    install_panic_hook();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Exiting with error: {e:#}");
        for line in app_log::recent_lines(CRASH_LOG_LINES) {
            eprintln!("{line}");
        }
    }

    result
}

fn init_tracing(log_path: &std::path::Path) -> anyhow::Result<()> {
    let writer = AppLogMakeWriter::create(log_path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {e}", log_path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
    Ok(())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
