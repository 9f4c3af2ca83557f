use crate::client::Client;
use crate::config::ConfigManager;
use crate::error::Result;
use crate::event::{Event, EventKind};

pub mod random_events;

/// Static information about a plugin.
#[derive(Debug)]
pub struct Descriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub enabled_by_default: bool,
}

impl Descriptor {
    /// Returns the key under the `runelite` config group controlling whether
    /// the plugin is enabled.
    pub fn config_key(&self) -> String {
        let mut key: String = self
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        key.push_str("plugin");
        key
    }
}

/// Everything a plugin may touch while handling an event.
pub struct Context<'a> {
    client: &'a mut dyn Client,
    config: &'a dyn ConfigManager,
}

impl<'a> Context<'a> {
    pub fn new(client: &'a mut dyn Client, config: &'a dyn ConfigManager) -> Self {
        Self { client, config }
    }

    /// Returns the game client.
    pub fn client(&self) -> &dyn Client {
        &*self.client
    }

    /// Returns the game client, allowing modification of the menu.
    pub fn client_mut(&mut self) -> &mut dyn Client {
        &mut *self.client
    }

    /// Returns the configuration store.
    pub fn config(&self) -> &dyn ConfigManager {
        self.config
    }
}

pub trait Plugin {
    fn descriptor(&self) -> &'static Descriptor;

    /// Prepares the plugin to receive events, returning the kinds of events it
    /// wants delivered.
    fn start_up(&mut self, config: &dyn ConfigManager) -> Result<&'static [EventKind]>;

    /// Stops the plugin, returning it to its initial state.
    fn shut_down(&mut self);

    fn on_event(&mut self, context: &mut Context<'_>, event: &Event);
}

#[cfg(test)]
mod tests {
    use super::Descriptor;

    #[test]
    fn config_key_from_name() {
        let descriptor = Descriptor {
            name: "Random Events",
            description: "",
            enabled_by_default: false,
        };
        assert_eq!(descriptor.config_key(), "randomeventsplugin");
    }
}
