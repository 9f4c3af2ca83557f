use std::path::Path;

use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::{Error, Result};
use crate::event::Event;

/// Parses a single line of a replay file. Returns `None` for blank lines and
/// `#` comments.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    serde_json::from_str(line)
        .map(Some)
        .map_err(|source| Error::Replay {
            line: line_number,
            source,
        })
}

/// Reads a JSON-lines file of events and sends each one to `events`, in order.
/// Returns the number of events sent.
pub async fn replay_file(path: impl AsRef<Path>, events: async_channel::Sender<Event>) -> Result<usize> {
    let file = fs::File::open(path.as_ref()).await?;
    let mut lines = BufReader::new(file).lines();
    let mut line_number = 0;
    let mut sent = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let Some(event) = parse_line(&line, line_number)? else {
            continue;
        };

        if events.send(event).await.is_err() {
            log::warn!("Event receiver closed after {sent} events");
            break;
        }
        sent += 1;
    }

    log::debug!("Read {sent} events from {}", path.as_ref().display());
    Ok(sent)
}
