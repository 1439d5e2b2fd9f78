use std::net::SocketAddr;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use tokio::net::UdpSocket;

#[derive(Parser, Debug)]
struct Args {
    /// Destination hostname or IPv4 address
    host: String,
    /// Seconds value to send instead of the current time of day
    time: Option<u32>,
    #[arg(short, long, default_value = "0.0.0.0:0")]
    local: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let Args { host, time, local } = Args::parse();

    let t = match time {
        Some(t) => t,
        None => {
            let t = wire::seconds_since_midnight(&Local::now());
            println!("{t}");
            t
        }
    };

    let remote = tokio::net::lookup_host((host.as_str(), wire::PORT))
        .await
        .with_context(|| format!("failed to resolve {host}"))?
        .find(SocketAddr::is_ipv4);
    let Some(remote) = remote else {
        bail!("no IPv4 address for {host}");
    };

    let channel = UdpSocket::bind(local).await?;
    channel.connect(remote).await?;
    log::debug!("sending {t} to {remote} x{}", wire::REPEATS);
    wire::send_repeated(&channel, &wire::encode(t)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_required() {
        assert!(Args::try_parse_from(["time-client"]).is_err());
    }

    #[test]
    fn time_override_must_be_an_integer() {
        assert!(Args::try_parse_from(["time-client", "127.0.0.1", "abc"]).is_err());
        assert!(Args::try_parse_from(["time-client", "127.0.0.1", "-1"]).is_err());
        let args = Args::try_parse_from(["time-client", "127.0.0.1", "3661"]).unwrap();
        assert_eq!(args.time, Some(3661));
    }

    #[test]
    fn time_defaults_to_clock() {
        let args = Args::try_parse_from(["time-client", "example.com"]).unwrap();
        assert_eq!(args.host, "example.com");
        assert_eq!(args.time, None);
    }
}
