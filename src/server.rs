use anyhow::{Context, Result};
use caesar_decoder::constants::DEFAULT_ADDR;
use caesar_decoder::socket::serve;
use clap::Parser;
use log::LevelFilter;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[clap(name = "server", version, about = "Caesar cipher decode service over WebSocket")]
struct Args {
    #[clap(long, env = "CAESAR_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    #[clap(long, short, env = "CAESAR_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(LevelFilter::Info))
        .init();

    let addr: SocketAddr = args
        .addr
        .parse()
        .with_context(|| format!("Invalid address: {}", args.addr))?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve(listener).await?;

    Ok(())
}
