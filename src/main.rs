use docserver::config::{self, Config};
use docserver::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let Some(port) = config::parse_port(std::env::args().skip(1)) else {
        eprintln!("{}", config::USAGE);
        return Ok(());
    };

    let cfg = Config::load(port)?;
    tracing::info!(
        root = %cfg.root,
        default_document = %cfg.default_document,
        "Docserver starting up on port {}",
        cfg.port
    );

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
