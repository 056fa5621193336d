use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Language code used as the fallback when a dictionary has no entry for the
/// active language.
pub const FALLBACK_LANG: &str = "en";

/// A dictionary mapping language codes (e.g. "en", "zh-Hans") to a localized
/// string. Dictionaries are not required to cover every language; lookups
/// fall back to English, then to any entry at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(pub HashMap<String, String>);

impl LocalizedText {
    /// Looks up the text for `lang`, falling back to [`FALLBACK_LANG`] and
    /// finally to an arbitrary entry so a sparse dictionary never renders
    /// blank.
    pub fn get(&self, lang: &str) -> &str {
        self.0
            .get(lang)
            .or_else(|| self.0.get(FALLBACK_LANG))
            .or_else(|| self.0.values().next())
            .map_or("", String::as_str)
    }
}

/// One configured map panel: a stable key, localized captions, and the fixed
/// coordinate the panel stays centered on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Stable identifier (e.g. "beijing"), also the egui widget id salt
    pub key: String,
    /// Localized display name for the panel caption
    pub name: LocalizedText,
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

/// Root type for the embedded cities configuration file. Panel order follows
/// file order.
pub type CityConfig = Vec<Location>;
