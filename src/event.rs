use serde::{Deserialize, Serialize};

use crate::client::{ActorRef, Npc};
use crate::menu::MenuEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractingChanged {
    pub source: ActorRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ActorRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcEvent {
    pub npc: Npc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigChanged {
    pub group: String,
    pub key: String,
    /// The new value, or `None` if the key was unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<toml::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "type")]
pub enum Event {
    GameTick,
    NpcSpawned(NpcEvent),
    NpcDespawned(NpcEvent),
    InteractingChanged(InteractingChanged),
    /// Posted after the entry has been appended to the menu.
    MenuEntryAdded(MenuEntry),
    MenuCleared,
    ConfigChanged(ConfigChanged),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::GameTick => EventKind::GameTick,
            Event::NpcSpawned(_) => EventKind::NpcSpawned,
            Event::NpcDespawned(_) => EventKind::NpcDespawned,
            Event::InteractingChanged(_) => EventKind::InteractingChanged,
            Event::MenuEntryAdded(_) => EventKind::MenuEntryAdded,
            Event::MenuCleared => EventKind::MenuCleared,
            Event::ConfigChanged(_) => EventKind::ConfigChanged,
        }
    }
}

/// Discriminant of an [`Event`], used to subscribe to events of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    GameTick,
    NpcSpawned,
    NpcDespawned,
    InteractingChanged,
    MenuEntryAdded,
    MenuCleared,
    ConfigChanged,
}

#[cfg(test)]
mod tests {
    use super::{Event, EventKind};
    use crate::client::ActorRef;

    #[test]
    fn parse_interacting_changed() {
        let event: Event = serde_json::from_str(
            r#"{
                "type": "INTERACTING_CHANGED",
                "source": {"kind": "NPC", "ref": 3},
                "target": {"kind": "PLAYER", "ref": "Zezima"}
            }"#,
        )
        .unwrap();

        let Event::InteractingChanged(changed) = &event else {
            panic!("wrong event type: {event:?}");
        };
        assert_eq!(changed.source, ActorRef::Npc(3));
        assert_eq!(changed.target, Some(ActorRef::Player("Zezima".into())));
        assert_eq!(event.kind(), EventKind::InteractingChanged);
    }

    #[test]
    fn parse_interaction_cleared() {
        let event: Event = serde_json::from_str(
            r#"{"type": "INTERACTING_CHANGED", "source": {"kind": "NPC", "ref": 3}}"#,
        )
        .unwrap();
        let Event::InteractingChanged(changed) = event else {
            panic!("wrong event type");
        };
        assert_eq!(changed.target, None);
    }

    #[test]
    fn parse_menu_entry_added() {
        let event: Event = serde_json::from_str(
            r#"{"type": "MENU_ENTRY_ADDED", "option": "Talk-to", "identifier": 3, "opcode": 9}"#,
        )
        .unwrap();
        let Event::MenuEntryAdded(entry) = event else {
            panic!("wrong event type");
        };
        assert_eq!(entry.option, "Talk-to");
        assert_eq!(entry.target, "");
        assert_eq!(entry.identifier, 3);
        assert_eq!(entry.opcode, 9);
    }

    #[test]
    fn parse_config_changed() {
        let event: Event = serde_json::from_str(
            r#"{"type": "CONFIG_CHANGED", "group": "randomevents", "key": "notifyGenie", "newValue": true}"#,
        )
        .unwrap();
        let Event::ConfigChanged(changed) = event else {
            panic!("wrong event type");
        };
        assert_eq!(changed.group, "randomevents");
        assert_eq!(changed.new_value, Some(toml::Value::Boolean(true)));
    }

    #[test]
    fn parse_unit_events() {
        let tick: Event = serde_json::from_str(r#"{"type": "GAME_TICK"}"#).unwrap();
        assert_eq!(tick, Event::GameTick);
        let cleared: Event = serde_json::from_str(r#"{"type": "MENU_CLEARED"}"#).unwrap();
        assert_eq!(cleared.kind(), EventKind::MenuCleared);
    }

    #[test]
    fn unknown_event_type() {
        assert!(serde_json::from_str::<Event>(r#"{"type": "PLAYER_DEATH"}"#).is_err());
    }
}
