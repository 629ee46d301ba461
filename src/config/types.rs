use portfolio_core::{LabelOverrides, Labels, Locale};
use serde::{Deserialize, Serialize};

use crate::gallery::{demonstration_entries, EntrySpec};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    /// Gallery entries; when absent the built-in demonstration list is used.
    #[serde(default)]
    pub gallery: Option<Vec<EntrySpec>>,
}

impl Config {
    /// Labels for the configured locale with any overrides applied.
    pub fn labels(&self) -> Labels {
        self.display.labels()
    }

    /// Entries the gallery is built from.
    pub fn entries(&self) -> Vec<EntrySpec> {
        match &self.gallery {
            Some(entries) => entries.clone(),
            None => demonstration_entries(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Preset the label templates start from (`ar` or `en`)
    #[serde(default)]
    pub locale: Locale,

    /// Individual template replacements
    #[serde(default)]
    pub labels: LabelOverrides,
}

impl DisplayConfig {
    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.locale).with_overrides(&self.labels)
    }
}
