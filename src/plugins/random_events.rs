use crate::client::{ActorRef, Client, Npc};
use crate::config::{ConfigManager, NotifyFlags, RandomEventConfig};
use crate::error::Result;
use crate::event::{ConfigChanged, Event, EventKind, InteractingChanged};
use crate::menu::{self, MenuEntry};
use crate::notifier::Notifier;
use crate::npc::{self, Category};

use super::{Context, Descriptor, Plugin};

/// Notifies the player when one of their random events appears, and removes
/// the talk and dismiss options from random events belonging to other players.
pub struct RandomEventPlugin {
    notifier: Box<dyn Notifier>,

    /// The random event currently interacting with the local player.
    current_random_event: Option<Npc>,

    /// Tick of the most recent notification, `None` if none has been sent
    /// since startup.
    last_notification_tick: Option<i32>,

    notify: NotifyFlags,
    remove_menu_options: bool,
}

impl RandomEventPlugin {
    pub const DESCRIPTOR: Descriptor = Descriptor {
        name: "Random Events",
        description: "Notify when random events appear and remove talk/dismiss options on events that aren't yours.",
        enabled_by_default: false,
    };

    /// Minimum number of ticks between two notifications.
    const RANDOM_EVENT_TIMEOUT: i32 = 150;

    const EVENT_OPTIONS: &'static [&'static str] = &["Talk-to", "Dismiss"];

    const SUBSCRIPTIONS: &'static [EventKind] = &[
        EventKind::InteractingChanged,
        EventKind::NpcDespawned,
        EventKind::MenuEntryAdded,
        EventKind::ConfigChanged,
    ];

    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        let config = RandomEventConfig::default();
        Self {
            notifier,
            current_random_event: None,
            last_notification_tick: None,
            notify: config.notify,
            remove_menu_options: config.remove_menu_options,
        }
    }

    /// Returns the random event the local player is currently engaged with.
    pub fn current_random_event(&self) -> Option<&Npc> {
        self.current_random_event.as_ref()
    }

    pub fn last_notification_tick(&self) -> Option<i32> {
        self.last_notification_tick
    }

    /// Returns whether a spawn of the random event with the given NPC ID should
    /// notify the player.
    pub fn should_notify(&self, id: i32) -> bool {
        if self.notify.all_events() {
            return true;
        }

        Category::of(id).is_some_and(|category| self.notify.category(category))
    }

    pub fn on_interacting_changed(&mut self, client: &dyn Client, event: &InteractingChanged) {
        let Some(player) = client.local_player() else {
            return;
        };

        // Only react to NPCs interacting with the player which the player is not
        // interacting with, so that talking to another player's random does not
        // trigger a notification.
        if event.target.as_ref() != Some(&player.actor_ref())
            || player.interacting.as_ref() == Some(&event.source)
        {
            return;
        }

        let ActorRef::Npc(index) = event.source else {
            return;
        };
        let Some(npc) = client.npc(index).filter(|npc| npc::is_random_event(npc.id)) else {
            return;
        };

        log::debug!("Random event spawn: {}", npc.name);

        self.current_random_event = Some(npc.clone());

        let tick = client.tick_count();
        let cooldown_elapsed = self
            .last_notification_tick
            .map_or(true, |last| tick - last > Self::RANDOM_EVENT_TIMEOUT);

        if cooldown_elapsed {
            self.last_notification_tick = Some(tick);

            if self.should_notify(npc.id) {
                self.notifier.notify(&format!("Random event spawned: {}", npc.name));
            }
        }
    }

    pub fn on_npc_despawned(&mut self, npc: &Npc) {
        if self.current_random_event.as_ref() == Some(npc) {
            log::debug!("Random event despawned: {}", npc.name);
            self.current_random_event = None;
        }
    }

    pub fn on_menu_entry_added(&mut self, client: &mut dyn Client, entry: &MenuEntry) {
        if !menu::is_npc_option(entry.opcode)
            || !Self::EVENT_OPTIONS.contains(&entry.option.as_str())
        {
            return;
        }

        let npc = match u32::try_from(entry.identifier) {
            Ok(index) => client.npc(index),
            Err(_) => None,
        };
        let Some(npc) = npc else {
            return;
        };

        let remove = npc::is_random_event(npc.id)
            && self.current_random_event.as_ref() != Some(npc)
            && self.remove_menu_options;
        if !remove {
            return;
        }

        log::trace!(r#"Removing "{}" option on {}"#, entry.option, npc.name);

        let mut entries = client.menu_entries().to_vec();
        entries.pop();
        client.set_menu_entries(entries);
    }

    pub fn on_config_changed(&mut self, config: &dyn ConfigManager, event: &ConfigChanged) {
        if event.group != RandomEventConfig::GROUP {
            return;
        }

        self.update_config(config);
    }

    fn update_config(&mut self, config: &dyn ConfigManager) {
        let config = RandomEventConfig::load(config);
        self.notify = config.notify;
        self.remove_menu_options = config.remove_menu_options;
    }
}

impl Plugin for RandomEventPlugin {
    fn descriptor(&self) -> &'static Descriptor {
        &Self::DESCRIPTOR
    }

    fn start_up(&mut self, config: &dyn ConfigManager) -> Result<&'static [EventKind]> {
        self.update_config(config);
        Ok(Self::SUBSCRIPTIONS)
    }

    fn shut_down(&mut self) {
        self.current_random_event = None;
        self.last_notification_tick = None;
    }

    fn on_event(&mut self, context: &mut Context<'_>, event: &Event) {
        match event {
            Event::InteractingChanged(changed) => {
                self.on_interacting_changed(context.client(), changed);
            }
            Event::NpcDespawned(despawned) => self.on_npc_despawned(&despawned.npc),
            Event::MenuEntryAdded(entry) => self.on_menu_entry_added(context.client_mut(), entry),
            Event::ConfigChanged(changed) => self.on_config_changed(context.config(), changed),
            _ => {}
        }
    }
}
