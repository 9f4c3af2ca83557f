use crate::client::GameState;
use crate::config::{ConfigManager, TomlConfigManager};
use crate::error::Result;
use crate::event::{ConfigChanged, Event};
use crate::eventbus::EventBus;
use crate::plugins::{Descriptor, Plugin};

/// Owns the game world and the plugins observing it, and feeds events to both.
pub struct Host {
    state: GameState,
    config: TomlConfigManager,
    event_bus: EventBus,
    disabled_plugins: Vec<Box<dyn Plugin>>,
}

impl Host {
    /// Config group holding the enabled state of every plugin.
    pub const PLUGIN_GROUP: &'static str = "runelite";

    pub fn new(state: GameState, config: TomlConfigManager) -> Self {
        Self {
            state,
            config,
            event_bus: EventBus::new(),
            disabled_plugins: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Adds a plugin to the host, starting it if it is enabled.
    pub fn load_plugin(&mut self, plugin: Box<dyn Plugin>) -> Result<()> {
        if self.is_enabled(plugin.descriptor()) {
            self.event_bus.register(plugin, &self.config)
        } else {
            log::info!(r#"Plugin "{}" is disabled"#, plugin.descriptor().name);
            self.disabled_plugins.push(plugin);
            Ok(())
        }
    }

    /// Stops every running plugin.
    pub fn shut_down(&mut self) -> Result<()> {
        while let Some(name) = self.event_bus.first_registered() {
            let plugin = self.event_bus.unregister(name)?;
            self.disabled_plugins.push(plugin);
        }
        Ok(())
    }

    fn is_enabled(&self, descriptor: &Descriptor) -> bool {
        self.config
            .get_bool(Self::PLUGIN_GROUP, &descriptor.config_key())
            .unwrap_or(descriptor.enabled_by_default)
    }

    /// Applies an event to the game world, then delivers it to plugins.
    pub fn dispatch(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::GameTick => self.state.advance_tick(),
            Event::NpcSpawned(spawned) => {
                self.state.spawn_npc(spawned.npc.clone());
            }
            Event::InteractingChanged(changed) => {
                self.state
                    .set_interacting(&changed.source, changed.target.as_ref());
            }
            Event::MenuEntryAdded(entry) => self.state.add_menu_entry(entry.clone()),
            Event::MenuCleared => self.state.clear_menu(),
            Event::ConfigChanged(changed) => {
                self.config
                    .set_configuration(&changed.group, &changed.key, changed.new_value.clone());
            }
            Event::NpcDespawned(_) => {}
        }

        self.event_bus.post(&mut self.state, &self.config, event);

        match event {
            // Plugins may still look the NPC up while handling the despawn.
            Event::NpcDespawned(despawned) => {
                self.state.despawn_npc(despawned.npc.index);
            }
            Event::ConfigChanged(changed) if changed.group == Self::PLUGIN_GROUP => {
                self.sync_plugin_state(changed)?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Starts or stops the plugin whose enable toggle changed.
    fn sync_plugin_state(&mut self, changed: &ConfigChanged) -> Result<()> {
        if let Some(position) = self
            .disabled_plugins
            .iter()
            .position(|p| p.descriptor().config_key() == changed.key)
        {
            if self.is_enabled(self.disabled_plugins[position].descriptor()) {
                let plugin = self.disabled_plugins.remove(position);
                self.event_bus.register(plugin, &self.config)?;
            }
            return Ok(());
        }

        let Some(descriptor) = self.event_bus.registered_by_config_key(&changed.key) else {
            return Ok(());
        };
        // Still enabled: keep running without resetting its state.
        if self.is_enabled(descriptor) {
            return Ok(());
        }

        let plugin = self.event_bus.unregister(descriptor.name)?;
        self.disabled_plugins.push(plugin);
        Ok(())
    }

    /// Dispatches events from `events` until the channel is closed. Returns the
    /// number of events dispatched.
    pub async fn run(&mut self, events: async_channel::Receiver<Event>) -> Result<usize> {
        let mut dispatched = 0;

        while let Ok(event) = events.recv().await {
            log::trace!("Dispatching {event:?}");
            self.dispatch(&event)?;
            dispatched += 1;
        }

        Ok(dispatched)
    }
}
