use crate::api::build_router;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use std::net::SocketAddr;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Endereço de escuta (host:porta); sobrepõe LEME_ADDR
    #[arg(short, long)]
    addr: Option<SocketAddr>,
}

/// Binds the HTTP API and serves it until the process is stopped.
pub async fn cmd(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(addr) = args.addr {
        config.addr = addr;
    }
    let addr = config.addr;

    let router = build_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    msg_info!(Message::ServerStarted(addr.to_string()));
    axum::serve(listener, router).await?;

    Ok(())
}
