use std::net::SocketAddr;

use clap::Parser;
use tokio::net::UdpSocket;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, default_value = "0.0.0.0:8888")]
    local: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let Args { local } = Args::parse();
    let channel = UdpSocket::bind(local).await?;
    log::info!("listening on {}", channel.local_addr()?);

    let mut buff = [0u8; 64];
    loop {
        let (n, peer) = channel.recv_from(&mut buff).await?;
        match wire::decode(&buff[..n]) {
            Some(t) => println!(
                "{peer}: {t} ({:02}:{:02}:{:02})",
                t / 3600,
                t % 3600 / 60,
                t % 60
            ),
            None => log::warn!("ignoring {n}-byte datagram from {peer}"),
        }
    }
}
