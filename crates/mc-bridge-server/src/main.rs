use std::net::SocketAddr;
use std::sync::Arc;

use mc_bridge_core::Registries;
use mc_bridge_server::ping::{self, EventPing, LocalPing, PingPassthrough};
use mc_bridge_server::{Bridge, BridgeConfig, SessionManager};
use tokio::sync::mpsc;
use tracing::info;

/// Connections a transport may queue before the bridge picks them up.
const ACCEPT_BACKLOG: usize = 64;

#[tokio::main]
async fn main() {
    let config = Arc::new(match BridgeConfig::load("bridge.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load bridge.toml: {e}");
            std::process::exit(1);
        }
    });

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        "MC-Bridge v{} listening for Bedrock on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.bedrock.address,
        config.bedrock.port
    );
    info!(
        "Java server: {}:{} (auth: {:?})",
        config.java.address, config.java.port, config.java.auth_type
    );
    info!("MOTD: {}", config.bedrock.motd);
    info!("Max players: {}", config.bedrock.max_players);

    let bind: SocketAddr = match format!("{}:{}", config.bedrock.address, config.bedrock.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Invalid Bedrock bind address: {e}");
            std::process::exit(1);
        }
    };

    let registries = Arc::new(Registries::init());
    info!(
        "Loaded {} item mappings, {} window translators, {} Java and {} Bedrock packet translators",
        registries.items.len(),
        registries.inventory.len(),
        registries.java_translators.len(),
        registries.bedrock_translators.len()
    );

    let sessions = Arc::new(SessionManager::new());
    let bridge = Arc::new(Bridge::new(
        registries,
        sessions.clone(),
        config.logging.log_player_ip_addresses,
    ));

    // Transports attached to this process push decoded connections here.
    let (connections, accepted) = mpsc::channel(ACCEPT_BACKLOG);
    let server = tokio::spawn(bridge.clone().serve(accepted));

    let local = LocalPing::new(config.bedrock.motd.clone(), config.bedrock.max_players, sessions.clone());
    let ping: Box<dyn PingPassthrough> = if config.ping.passthrough {
        let (events_tx, events_rx) = tokio::sync::mpsc::channel(64);
        let (defaults_tx, defaults_rx) = tokio::sync::watch::channel(local.snapshot());
        tokio::spawn(ping::answer_events(events_rx));

        // Keep the prefilled response in step with the online count.
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                if defaults_tx.send(local.snapshot()).is_err() {
                    break;
                }
            }
        });
        Box::new(EventPing::new(
            events_tx,
            defaults_rx,
            config.ping.timeout(),
            config.logging.log_player_ip_addresses,
        ))
    } else {
        Box::new(local)
    };

    if let Some(info) = ping.ping_information(bind).await {
        info!(
            "Status: {}/{} players, description {}",
            info.online_players, info.max_players, info.description
        );
    }

    // Handle Ctrl+C
    tokio::signal::ctrl_c().await.ok();
    info!("Shutdown signal received");

    drop(connections);
    server.await.ok();
    bridge.shutdown().await;
    info!("Bridge shut down.");
}
