mod app;
mod event;
mod tui;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use app::App;
use chainwatch_store::{DashboardStore, FeedConfig, LiveFeed};
use event::handle_events;
use tui::Tui;
use ui::ui;

/// Terminal dashboard over the chainwatch simulation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Fixed generator seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generated transactions
    #[arg(long)]
    tx_interval_ms: Option<u64>,

    /// Milliseconds between generated risk scores
    #[arg(long)]
    risk_interval_ms: Option<u64>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Keep the panic output readable: the Tui Drop impl restores the
    // terminal, the original hook prints the panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);
    }));

    let args = Args::parse();
    let mut config = FeedConfig::from_env();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = args.tx_interval_ms {
        config = config.with_transaction_interval(Duration::from_millis(ms));
    }
    if let Some(ms) = args.risk_interval_ms {
        config = config.with_risk_score_interval(Duration::from_millis(ms));
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let store = Arc::new(DashboardStore::new());
    let feed = LiveFeed::new(store.clone(), config);

    {
        // The feed spawns its periodic tasks onto this runtime.
        let _guard = runtime.enter();
        feed.start()?;
    }
    info!("dashboard feed running");

    let mut app = App::new(store);
    let mut tui = Tui::new()?;

    while !app.should_quit {
        app.refresh();
        tui.terminal().draw(|f| ui(f, &mut app))?;
        handle_events(&mut app)?;
    }

    // Both periodic tasks must be gone before the store handle is dropped.
    runtime.block_on(feed.stop())?;

    Ok(())
}
