//! Character sheet engine - line-driven damage track runner.
//!
//! Reads one intent per stdin line (`+`, `-`, `reset`, `tier`) and applies
//! it to a single character's track. Exits on EOF.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cpsheet_domain::CharacterId;
use cpsheet_engine::infrastructure::{
    broadcast_observer::BroadcastDamageObserver, config::AppConfig,
    damage_tracker::SharedDamageTracker, ports::DamageNotification,
};
use cpsheet_engine::use_cases::{DamageIntent, DamageIntentOutcome, DamageUseCase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so the binary works from `crates/engine` too.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cpsheet_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting character sheet engine");

    let config = AppConfig::from_env()?;
    tracing::info!(
        max_damage = config.damage_track.max_damage,
        bands = config.damage_track.bands.len(),
        notification_capacity = config.notification_capacity,
        "Configuration loaded"
    );

    let observer = Arc::new(BroadcastDamageObserver::new(config.notification_capacity));
    let renderer = tokio::spawn(render_notifications(observer.subscribe()));

    let tracker = SharedDamageTracker::new(CharacterId::new(), &config.damage_track)?
        .with_observer(observer.clone());
    let use_case = DamageUseCase::new(Arc::new(tracker));
    // The tracker now holds the only sender; dropping it closes the channel
    drop(observer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("tier") {
            let snapshot = use_case.tracker().snapshot();
            println!(
                "{}/{} {}",
                snapshot.current_damage, snapshot.max_damage, snapshot.tier
            );
            continue;
        }

        let intent = match line.parse::<DamageIntent>() {
            Ok(intent) => intent,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring input line");
                continue;
            }
        };

        match use_case.dispatch(intent).await? {
            DamageIntentOutcome::Applied(_) => {}
            DamageIntentOutcome::AtBoundary(err) => println!("{err}"),
            DamageIntentOutcome::Unchanged => println!("No damage to clear"),
        }
    }

    drop(use_case);
    renderer.await?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}

async fn render_notifications(mut rx: broadcast::Receiver<DamageNotification>) {
    loop {
        match rx.recv().await {
            Ok(notification) => {
                let change = notification.change;
                println!(
                    "{}/{} {}",
                    change.current_damage, change.max_damage, change.current_tier
                );
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Renderer fell behind damage notifications");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
