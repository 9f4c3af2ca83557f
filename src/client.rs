use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::menu::MenuEntry;

/// Reference to an actor in the scene, used by events which point at actors
/// without owning them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ref", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRef {
    Player(String),
    Npc(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    /// Scene slot occupied by the NPC while it is spawned.
    pub index: u32,
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub interacting: Option<ActorRef>,
}

impl Player {
    pub fn actor_ref(&self) -> ActorRef {
        ActorRef::Player(self.name.clone())
    }
}

/// Read access to the game world, plus the in-progress menu.
pub trait Client {
    fn local_player(&self) -> Option<&Player>;

    fn tick_count(&self) -> i32;

    /// Looks up a cached NPC by its scene index.
    fn npc(&self, index: u32) -> Option<&Npc>;

    fn menu_entries(&self) -> &[MenuEntry];

    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>);
}

/// An in-memory view of the game world, updated by the host as events arrive.
#[derive(Debug, Default)]
pub struct GameState {
    local_player: Option<Player>,
    tick_count: i32,
    npcs: HashMap<u32, Npc>,
    menu_entries: Vec<MenuEntry>,
}

impl GameState {
    /// Size of the client's NPC cache. Indices at or above this are never valid.
    pub const MAX_NPCS: u32 = 32768;

    pub fn new(local_player: &str) -> Self {
        Self {
            local_player: Some(Player {
                name: local_player.to_owned(),
                interacting: None,
            }),
            ..Self::default()
        }
    }

    /// Advances the tick counter, wrapping like the client's own counter.
    pub fn advance_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    #[cfg(test)]
    pub fn set_tick_count(&mut self, tick: i32) {
        self.tick_count = tick;
    }

    /// Caches an NPC at its scene index, replacing any NPC already there.
    /// Returns `false` if the index is outside the cache.
    pub fn spawn_npc(&mut self, npc: Npc) -> bool {
        if npc.index >= Self::MAX_NPCS {
            log::warn!("Ignoring NPC {} spawned at invalid index {}", npc.id, npc.index);
            return false;
        }
        self.npcs.insert(npc.index, npc);
        true
    }

    pub fn despawn_npc(&mut self, index: u32) -> Option<Npc> {
        self.npcs.remove(&index)
    }

    /// Records a change in the interaction target of an actor. Only the local
    /// player's target is tracked.
    pub fn set_interacting(&mut self, source: &ActorRef, target: Option<&ActorRef>) {
        if let Some(player) = self.local_player.as_mut() {
            if *source == player.actor_ref() {
                player.interacting = target.cloned();
            }
        }
    }

    pub fn add_menu_entry(&mut self, entry: MenuEntry) {
        self.menu_entries.push(entry);
    }

    pub fn clear_menu(&mut self) {
        self.menu_entries.clear();
    }
}

impl Client for GameState {
    fn local_player(&self) -> Option<&Player> {
        self.local_player.as_ref()
    }

    fn tick_count(&self) -> i32 {
        self.tick_count
    }

    fn npc(&self, index: u32) -> Option<&Npc> {
        self.npcs.get(&index)
    }

    fn menu_entries(&self) -> &[MenuEntry] {
        self.menu_entries.as_slice()
    }

    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>) {
        self.menu_entries = entries;
    }
}
