#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::env;

use client::{Client, GameState};
use config::TomlConfigManager;
use error::{Error, Result};
use host::Host;
use notifier::LogNotifier;
use plugins::random_events::RandomEventPlugin;

mod client;
mod config;
mod error;
mod event;
mod eventbus;
mod host;
mod menu;
mod notifier;
mod npc;
mod plugins;
mod replay;

/// Number of events buffered between the replay reader and the host.
const EVENT_QUEUE_SIZE: usize = 256;

fn var(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| Error::Environment(name))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = match env::var("RANDOM_EVENTS_CONFIG") {
        Ok(path) => TomlConfigManager::load_from_file(path).await?,
        Err(_) => TomlConfigManager::default(),
    };
    let replay_path = var("RANDOM_EVENTS_REPLAY")?;
    let player = env::var("RANDOM_EVENTS_PLAYER").unwrap_or_else(|_| "Player".into());

    let mut host = Host::new(GameState::new(&player), config);
    host.load_plugin(Box::new(RandomEventPlugin::new(Box::new(LogNotifier))))?;

    let (tx, rx) = async_channel::bounded(EVENT_QUEUE_SIZE);
    let reader = tokio::spawn(replay::replay_file(replay_path, tx));

    let dispatched = host.run(rx).await;
    let read = reader.await?;
    log::debug!("Running plugins: {:?}", host.event_bus());
    host.shut_down()?;

    let dispatched = dispatched?;
    let read = read?;
    log::info!(
        "Replayed {read} events over {} ticks, dispatched {dispatched}",
        host.state().tick_count(),
    );

    Ok(())
}
