//! Wire format and send loop shared by the time-client and time-server
//! binaries. The payload is a single unsigned 32-bit value, little-endian,
//! semantically seconds since local midnight.

use std::io;
use std::time::Duration;

use chrono::Timelike;
use tokio::net::UdpSocket;
use tokio::time::sleep;

/// Fixed destination port the server listens on.
pub const PORT: u16 = 8888;
/// Datagrams sent per invocation. UDP drops packets; duplicates raise the
/// odds that at least one arrives.
pub const REPEATS: usize = 5;
/// Pause between consecutive sends.
pub const SEND_GAP: Duration = Duration::from_millis(100);

pub fn encode(t: u32) -> [u8; 4] {
    t.to_le_bytes()
}

/// Returns `None` unless `buf` is exactly 4 bytes.
pub fn decode(buf: &[u8]) -> Option<u32> {
    let bytes: [u8; 4] = buf.try_into().ok()?;
    Some(u32::from_le_bytes(bytes))
}

/// Whole seconds elapsed since midnight, no sub-second precision.
pub fn seconds_since_midnight(time: &impl Timelike) -> u32 {
    time.hour() * 3600 + time.minute() * 60 + time.second()
}

/// Sends `payload` [`REPEATS`] times on a connected socket, sleeping
/// [`SEND_GAP`] after each send (including the last).
pub async fn send_repeated(socket: &UdpSocket, payload: &[u8]) -> io::Result<()> {
    for _ in 0..REPEATS {
        socket.send(payload).await?;
        sleep(SEND_GAP).await;
    }
    Ok(())
}
