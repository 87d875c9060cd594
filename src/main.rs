//! FlowSense - Diabetes Self-Care Engagement Engine
//!
//! Command-line entry point: loads the saved engagement state, applies the
//! day's check-in and prints a status summary.

use anyhow::Context;
use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flowsense::engine::{Action, EngagementTracker, Outcome};
use flowsense::storage::config::load_config;
use flowsense::storage::SqliteStore;
use flowsense::streaks::StreakCategory;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FlowSense v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("loading configuration")?;
    let db_path = config.database_path();
    let mut store = SqliteStore::open_default_profile(&db_path, "default")
        .with_context(|| format!("opening database at {}", db_path.display()))?;

    let mut tracker = EngagementTracker::load_or_new(&store, &config)?;

    // Optional category argument, e.g. `flowsense hydration`
    if let Some(arg) = std::env::args().nth(1) {
        let category = StreakCategory::from_str(&arg)
            .with_context(|| format!("unknown streak category '{}'", arg))?;
        let outcome = tracker.dispatch(Action::LogActivity {
            category,
            date: Local::now().date_naive(),
        })?;
        if let Outcome::ActivityLogged { streak_days, .. } = outcome {
            println!("{} streak: {} day(s)", category.display_name(), streak_days);
        }
    }

    println!("{}", tracker.summary());
    println!("{}", tracker.companion().daily_message(Local::now().date_naive()));

    tracker.save_to(&mut store)?;
    tracing::info!("Saved engagement state to {}", db_path.display());

    Ok(())
}
