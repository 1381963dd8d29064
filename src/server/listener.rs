use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::files::FileStore;
use crate::http::connection::Connection;

/// Binds the configured address and serves connections one at a time.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr())
        .await
        .with_context(|| format!("binding {}", cfg.listen_addr()))?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg).await
}

/// Accepts connections from `listener`, each fully handled before the next.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let store = FileStore::from_config(cfg);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, store.clone(), cfg.read_timeout());
        if let Err(e) = conn.run().await {
            error!("Connection error from {}: {}", peer, e);
        }
    }
}
