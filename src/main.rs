//! Pokedex - an interactive PokeAPI client
//!
//! Paginates the location-area catalog and explores areas, with every
//! remote fetch served through a time-bounded response cache.
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the API client with its two response caches
//! 4. Start one background reaper task per cache
//! 5. Run the REPL until `exit`, end of input, or a shutdown signal
//! 6. Abort the reapers and log cache statistics

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::commands::{CommandRegistry, Repl};
use pokedex::{Config, PokeApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Pokedex");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, location_ttl={}s, area_ttl={}s",
        config.base_url, config.location_ttl, config.area_ttl
    );

    // Create the API client; fails fast on a zero cache interval
    let client = PokeApiClient::new(&config).context("failed to create PokeAPI client")?;

    // Start one reaper per cache; the handles are the cancellation
    // capability used at shutdown
    let reapers = vec![
        pokedex::spawn_reaper(client.location_cache().clone()),
        pokedex::spawn_reaper(client.area_cache().clone()),
    ];
    info!("Cache reapers started");

    let mut repl = Repl::new(client.clone(), CommandRegistry::standard());

    tokio::select! {
        result = repl.run() => {
            result.context("REPL input error")?;
        }
        _ = shutdown_signal() => {
            warn!("Shutdown signal received");
        }
    }

    for reaper in reapers {
        reaper.abort();
    }

    let location_stats = client.location_cache().stats();
    let area_stats = client.area_cache().stats();
    info!(
        "Location cache: {} hits, {} misses, {} reaped (hit rate {:.0}%)",
        location_stats.hits,
        location_stats.misses,
        location_stats.reaped,
        location_stats.hit_rate() * 100.0
    );
    info!(
        "Area cache: {} hits, {} misses, {} reaped (hit rate {:.0}%)",
        area_stats.hits,
        area_stats.misses,
        area_stats.reaped,
        area_stats.hit_rate() * 100.0
    );

    info!("Pokedex shutdown complete");
    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
