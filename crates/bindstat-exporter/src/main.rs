//! bindstat exporter
//!
//! Serves BIND name server statistics as Prometheus metrics. Each request to
//! the metrics path runs one scrape cycle against the configured statistics
//! channel.

use tracing_subscriber::{fmt, EnvFilter};

use bindstat_exporter::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = config::resolve_path(
        std::env::args().nth(1),
        std::env::var(config::CONFIG_ENV).ok(),
    );
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.exporter.listen_addr()?;

    tracing::info!(
        %listen,
        target_uri = %cfg.bind.stats_uri,
        metrics_path = %cfg.exporter.metrics_path,
        "bindstat-exporter starting"
    );

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
