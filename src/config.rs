use std::path::Path;

use crate::error::Result;
use crate::npc::Category;

/// Read access to stored configuration values, organized into named groups.
pub trait ConfigManager {
    /// Returns the value of a boolean setting, or `None` if it is unset or not
    /// a boolean.
    fn get_bool(&self, group: &str, key: &str) -> Option<bool>;
}

/// Configuration store backed by a TOML document with one table per group.
///
/// ```toml
/// [randomevents]
/// notifyGenie = true
/// removeMenuOptions = false
/// ```
#[derive(Debug, Default)]
pub struct TomlConfigManager {
    groups: toml::Table,
}

impl TomlConfigManager {
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        contents.parse()
    }

    /// Sets a single value, or unsets it if `value` is `None`.
    pub fn set_configuration(&mut self, group: &str, key: &str, value: Option<toml::Value>) {
        match value {
            Some(value) => {
                let group = self
                    .groups
                    .entry(group)
                    .or_insert(toml::Value::Table(toml::Table::new()));
                if !group.is_table() {
                    *group = toml::Value::Table(toml::Table::new());
                }
                if let Some(table) = group.as_table_mut() {
                    table.insert(key.to_owned(), value);
                }
            }
            None => {
                if let Some(table) = self.groups.get_mut(group).and_then(toml::Value::as_table_mut) {
                    table.remove(key);
                }
            }
        }
    }
}

impl std::str::FromStr for TomlConfigManager {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            groups: toml::from_str(s)?,
        })
    }
}

impl ConfigManager for TomlConfigManager {
    fn get_bool(&self, group: &str, key: &str) -> Option<bool> {
        self.groups.get(group)?.get(key)?.as_bool()
    }
}

/// Enable flags deciding which random events send a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyFlags {
    all_events: bool,
    categories: [bool; Category::COUNT],
}

impl NotifyFlags {
    pub fn new(all_events: bool) -> Self {
        Self {
            all_events,
            categories: [false; Category::COUNT],
        }
    }

    #[must_use]
    pub fn with(mut self, category: Category, enabled: bool) -> Self {
        self.categories[category as usize] = enabled;
        self
    }

    pub fn all_events(&self) -> bool {
        self.all_events
    }

    /// Returns whether notifications are enabled for the category, ignoring the
    /// global override.
    pub fn category(&self, category: Category) -> bool {
        self.categories[category as usize]
    }
}

/// Settings of the random events plugin, read from the `randomevents` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomEventConfig {
    pub notify: NotifyFlags,
    pub remove_menu_options: bool,
}

impl RandomEventConfig {
    pub const GROUP: &'static str = "randomevents";

    const NOTIFY_ALL_EVENTS: &'static str = "notifyAllEvents";
    const REMOVE_MENU_OPTIONS: &'static str = "removeMenuOptions";

    /// Reads every setting at once, substituting defaults for unset values.
    pub fn load(config: &dyn ConfigManager) -> Self {
        let get = |key: &str, default: bool| config.get_bool(Self::GROUP, key).unwrap_or(default);

        let notify = Category::iter().fold(
            NotifyFlags::new(get(Self::NOTIFY_ALL_EVENTS, false)),
            |flags, category| flags.with(category, get(category.config_key(), false)),
        );

        Self {
            notify,
            remove_menu_options: get(Self::REMOVE_MENU_OPTIONS, true),
        }
    }
}

impl Default for RandomEventConfig {
    fn default() -> Self {
        Self {
            notify: NotifyFlags::default(),
            remove_menu_options: true,
        }
    }
}
