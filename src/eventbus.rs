use std::collections::HashSet;

use crate::client::Client;
use crate::config::ConfigManager;
use crate::error::{Error, Result};
use crate::event::{Event, EventKind};
use crate::plugins::{Context, Descriptor, Plugin};

struct Subscriber {
    plugin: Box<dyn Plugin>,
    subscriptions: HashSet<EventKind>,
}

/// Delivers events to running plugins.
///
/// Events are posted one at a time from a single thread; every subscribed
/// plugin finishes handling an event before the next one is posted.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a plugin and subscribes it to the events it requests.
    pub fn register(
        &mut self,
        mut plugin: Box<dyn Plugin>,
        config: &dyn ConfigManager,
    ) -> Result<()> {
        let descriptor = plugin.descriptor();
        let name = descriptor.name;
        if self.is_registered(name) {
            return Err(Error::AlreadyRegistered(name.into()));
        }

        let subscriptions: HashSet<EventKind> =
            plugin.start_up(config)?.iter().copied().collect();
        log::info!(r#"Started plugin "{name}""#);
        log::debug!(
            r#"Plugin "{name}" ({}) subscribed to {subscriptions:?}"#,
            descriptor.description,
        );

        self.subscribers.push(Subscriber {
            plugin,
            subscriptions,
        });
        Ok(())
    }

    /// Stops a plugin and removes its subscriptions, returning it so that it
    /// can be started again later.
    pub fn unregister(&mut self, name: &str) -> Result<Box<dyn Plugin>> {
        let position = self
            .subscribers
            .iter()
            .position(|s| s.plugin.descriptor().name == name)
            .ok_or_else(|| Error::NotRegistered(name.into()))?;

        let mut plugin = self.subscribers.remove(position).plugin;
        plugin.shut_down();
        log::info!(r#"Stopped plugin "{name}""#);
        Ok(plugin)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.subscribers
            .iter()
            .any(|s| s.plugin.descriptor().name == name)
    }

    /// Returns the name of the earliest registered plugin still running.
    pub fn first_registered(&self) -> Option<&'static str> {
        self.subscribers.first().map(|s| s.plugin.descriptor().name)
    }

    /// Finds a running plugin by the key of its enable toggle.
    pub fn registered_by_config_key(&self, key: &str) -> Option<&'static Descriptor> {
        self.subscribers
            .iter()
            .map(|s| s.plugin.descriptor())
            .find(|d| d.config_key() == key)
    }

    /// Delivers an event to every plugin subscribed to its kind, in the order
    /// the plugins were registered.
    pub fn post(&mut self, client: &mut dyn Client, config: &dyn ConfigManager, event: &Event) {
        let kind = event.kind();
        let mut context = Context::new(client, config);

        for subscriber in &mut self.subscribers {
            if subscriber.subscriptions.contains(&kind) {
                subscriber.plugin.on_event(&mut context, event);
            }
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list()
            .entries(self.subscribers.iter().map(|s| s.plugin.descriptor().name))
            .finish()
    }
}
