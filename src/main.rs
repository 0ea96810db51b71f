use clap::Parser;
use solardocs::{router, AppConfig, AppState};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(AppConfig::parse()).await {
        log::error!("{}", e);
        process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::open(&config).await?;
    let app = router(state, &config.allowed_origins);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    log::info!("solardocs listening on {}", address);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    log::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
