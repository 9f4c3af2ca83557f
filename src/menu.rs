use serde::{Deserialize, Serialize};

pub struct Opcode;

impl Opcode {
    pub const NPC_FIRST_OPTION: i32 = 9;
    pub const NPC_FIFTH_OPTION: i32 = 13;
}

// Opcodes only built by tests, never matched on.
#[cfg(test)]
impl Opcode {
    pub const NPC_SECOND_OPTION: i32 = 10;
    pub const NPC_THIRD_OPTION: i32 = 11;
    pub const EXAMINE_NPC: i32 = 1003;
    pub const WALK: i32 = 23;
}

/// Returns whether `opcode` is one of the five NPC right-click options.
pub fn is_npc_option(opcode: i32) -> bool {
    (Opcode::NPC_FIRST_OPTION..=Opcode::NPC_FIFTH_OPTION).contains(&opcode)
}

/// A single entry in the right-click menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub option: String,
    #[serde(default)]
    pub target: String,
    /// For NPC options, the scene index of the targeted NPC.
    pub identifier: i32,
    pub opcode: i32,
}

#[cfg(test)]
mod tests {
    use super::{is_npc_option, Opcode};

    #[test]
    fn npc_option_range() {
        assert!(is_npc_option(Opcode::NPC_FIRST_OPTION));
        assert!(is_npc_option(Opcode::NPC_THIRD_OPTION));
        assert!(is_npc_option(Opcode::NPC_FIFTH_OPTION));
        assert!(!is_npc_option(Opcode::NPC_FIRST_OPTION - 1));
        assert!(!is_npc_option(Opcode::NPC_FIFTH_OPTION + 1));
        assert!(!is_npc_option(Opcode::EXAMINE_NPC));
        assert!(!is_npc_option(Opcode::WALK));
    }
}
