//! geo-greeter - Localized greetings by client address
//!
//! This is the composition root that wires together all the components.

use geo_greeter::adapters::inbound::HttpServer;
use geo_greeter::adapters::outbound::{PrefixGeoService, StaticLocalizationService};
use geo_greeter::application::MessageSender;
use geo_greeter::config::load_config;
use geo_greeter::domain::ports::{GeoService, LocalizationService};
use geo_greeter::infrastructure::{shutdown_signal, ShutdownController};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting geo-greeter listen={} default_country={} strict={}",
        cfg.listen_addr,
        cfg.default_country,
        cfg.strict_localization
    );

    // ===== COMPOSITION ROOT =====

    // 1. Outbound adapters
    let geo_service: Arc<dyn GeoService> = Arc::new(PrefixGeoService::default());

    let localization = if cfg.strict_localization {
        StaticLocalizationService::strict()
    } else {
        StaticLocalizationService::new()
    };
    let localization_service: Arc<dyn LocalizationService> = Arc::new(localization);

    // 2. Application service
    let sender = Arc::new(
        MessageSender::new(geo_service, localization_service)
            .with_default_country(cfg.default_country),
    );

    // 3. Inbound adapter
    let shutdown = ShutdownController::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let server = HttpServer::new(sender, cfg.listen_addr);
    server.run(async move { shutdown.wait().await }).await
}
