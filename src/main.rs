use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sentui::app::App;
use sentui::config::{normalize_count, Config};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sentui",
    version,
    about = "Terminal client for a tweet sentiment-analysis backend"
)]
struct Args {
    /// Path to a config file (default: <config dir>/sentui/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend origin, e.g. http://127.0.0.1:5000
    #[arg(long)]
    api_base: Option<String>,

    /// Tweets to request per fetch (1-100)
    #[arg(long)]
    count: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(base) = args.api_base {
        config.api.base_url = base;
    }
    if let Some(count) = args.count {
        config.tweets.count = normalize_count(count);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
