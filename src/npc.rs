use std::collections::HashSet;
use std::sync::OnceLock;

pub struct Id;

// Some events have more than one ID, one per client build the NPC was
// introduced in.
impl Id {
    pub const DR_JEKYLL: i32 = 313;
    pub const DR_JEKYLL_314: i32 = 314;
    pub const DRUNKEN_DWARF: i32 = 322;
    pub const GENIE: i32 = 326;
    pub const GENIE_327: i32 = 327;
    pub const RICK_TURPENTINE: i32 = 375;
    pub const RICK_TURPENTINE_376: i32 = 376;
    pub const PILLORY_GUARD: i32 = 380;
    pub const EVIL_BOB: i32 = 390;
    pub const SANDWICH_LADY: i32 = 3106;
    pub const FROG_5429: i32 = 5429;
    pub const NILES: i32 = 5436;
    pub const MILES: i32 = 5437;
    pub const GILES: i32 = 5438;
    pub const NILES_5439: i32 = 5439;
    pub const MILES_5440: i32 = 5440;
    pub const GILES_5441: i32 = 5441;
    pub const CAPT_ARNAV: i32 = 5985;
    pub const POSTIE_PETE_6738: i32 = 6738;
    pub const SERGEANT_DAMIEN_6743: i32 = 6743;
    pub const FLIPPA_6744: i32 = 6744;
    pub const LEO_6746: i32 = 6746;
    pub const BEE_KEEPER_6747: i32 = 6747;
    pub const FREAKY_FORESTER_6748: i32 = 6748;
    pub const DUNCE_6749: i32 = 6749;
    pub const MYSTERIOUS_OLD_MAN_6750: i32 = 6750;
    pub const MYSTERIOUS_OLD_MAN_6751: i32 = 6751;
    pub const MYSTERIOUS_OLD_MAN_6752: i32 = 6752;
    pub const MYSTERIOUS_OLD_MAN_6753: i32 = 6753;
    pub const EVIL_BOB_6754: i32 = 6754;
    pub const QUIZ_MASTER_6755: i32 = 6755;
}

/// Returns `true` if the NPC with the given ID is a random event.
pub fn is_random_event(id: i32) -> bool {
    static EVENT_NPCS: OnceLock<HashSet<i32>> = OnceLock::new();
    let npcs = EVENT_NPCS.get_or_init(|| {
        [
            Id::DR_JEKYLL,
            Id::DR_JEKYLL_314,
            Id::BEE_KEEPER_6747,
            Id::CAPT_ARNAV,
            Id::SERGEANT_DAMIEN_6743,
            Id::DRUNKEN_DWARF,
            Id::FREAKY_FORESTER_6748,
            Id::GENIE,
            Id::GENIE_327,
            Id::EVIL_BOB,
            Id::EVIL_BOB_6754,
            Id::POSTIE_PETE_6738,
            Id::LEO_6746,
            Id::MYSTERIOUS_OLD_MAN_6750,
            Id::MYSTERIOUS_OLD_MAN_6751,
            Id::MYSTERIOUS_OLD_MAN_6752,
            Id::MYSTERIOUS_OLD_MAN_6753,
            Id::PILLORY_GUARD,
            Id::FLIPPA_6744,
            Id::QUIZ_MASTER_6755,
            Id::RICK_TURPENTINE,
            Id::RICK_TURPENTINE_376,
            Id::SANDWICH_LADY,
            Id::DUNCE_6749,
            Id::NILES,
            Id::NILES_5439,
            Id::MILES,
            Id::MILES_5440,
            Id::GILES,
            Id::GILES_5441,
            Id::FROG_5429,
        ]
        .into_iter()
        .collect()
    });

    npcs.contains(&id)
}

/// Random events which can be individually configured to send a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Category {
    Demon,
    Forester,
    Frog,
    Genie,
    Bob,
    Gravedigger,
    MysteriousOldMan,
    Quiz,
    Dunce,
}

impl Category {
    pub const COUNT: usize = 9;

    const VALUES: [Category; Self::COUNT] = [
        Category::Demon,
        Category::Forester,
        Category::Frog,
        Category::Genie,
        Category::Bob,
        Category::Gravedigger,
        Category::MysteriousOldMan,
        Category::Quiz,
        Category::Dunce,
    ];

    pub fn iter() -> impl Iterator<Item = Category> {
        Self::VALUES.iter().copied()
    }

    /// Returns the category of the NPC with the given ID, if it has one.
    pub fn of(id: i32) -> Option<Category> {
        match id {
            Id::SERGEANT_DAMIEN_6743 => Some(Category::Demon),
            Id::FREAKY_FORESTER_6748 => Some(Category::Forester),
            Id::FROG_5429 => Some(Category::Frog),
            Id::GENIE | Id::GENIE_327 => Some(Category::Genie),
            Id::EVIL_BOB | Id::EVIL_BOB_6754 => Some(Category::Bob),
            Id::LEO_6746 => Some(Category::Gravedigger),
            Id::MYSTERIOUS_OLD_MAN_6750
            | Id::MYSTERIOUS_OLD_MAN_6751
            | Id::MYSTERIOUS_OLD_MAN_6752
            | Id::MYSTERIOUS_OLD_MAN_6753 => Some(Category::MysteriousOldMan),
            Id::QUIZ_MASTER_6755 => Some(Category::Quiz),
            Id::DUNCE_6749 => Some(Category::Dunce),
            _ => None,
        }
    }

    /// Returns the key of the configuration toggle controlling notifications
    /// for the category.
    pub fn config_key(self) -> &'static str {
        match self {
            Category::Demon => "notifyDemon",
            Category::Forester => "notifyForester",
            Category::Frog => "notifyFrog",
            Category::Genie => "notifyGenie",
            Category::Bob => "notifyBob",
            Category::Gravedigger => "notifyGravedigger",
            Category::MysteriousOldMan => "notifyMoM",
            Category::Quiz => "notifyQuiz",
            Category::Dunce => "notifyDunce",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_random_event, Category, Id};

    #[test]
    fn variants_share_category() {
        assert_eq!(Category::of(Id::GENIE), Category::of(Id::GENIE_327));
        assert_eq!(Category::of(Id::EVIL_BOB), Category::of(Id::EVIL_BOB_6754));
        assert_eq!(
            Category::of(Id::MYSTERIOUS_OLD_MAN_6750),
            Some(Category::MysteriousOldMan)
        );
        assert_eq!(
            Category::of(Id::MYSTERIOUS_OLD_MAN_6753),
            Some(Category::MysteriousOldMan)
        );
    }

    #[test]
    fn uncategorized_ids() {
        assert_eq!(Category::of(Id::SANDWICH_LADY), None);
        assert_eq!(Category::of(Id::DR_JEKYLL), None);
        assert_eq!(Category::of(0), None);
        assert_eq!(Category::of(-1), None);
    }

    #[test]
    fn categorized_ids_are_random_events() {
        for id in 0..20_000 {
            if Category::of(id).is_some() {
                assert!(is_random_event(id), "{id} has a category but is not an event");
            }
        }
    }

    #[test]
    fn random_event_membership() {
        assert!(is_random_event(Id::GENIE));
        assert!(is_random_event(Id::FROG_5429));
        assert!(is_random_event(Id::GILES_5441));
        assert!(!is_random_event(1));
        assert!(!is_random_event(8366));
    }

    #[test]
    fn config_keys_are_unique() {
        let keys: std::collections::HashSet<_> = Category::iter().map(Category::config_key).collect();
        assert_eq!(keys.len(), Category::COUNT);
    }
}
