//! App name normalisation from window titles.

use std::collections::BTreeMap;

/// Title prefixes whose launchable name differs from the lowercased prefix.
const BUILTIN_APP_NAMES: &[(&str, &str)] = &[
    ("WhatsApp", "whatsapp"),
    ("Amis", "discord"),
    ("Discord", "discord"),
    ("Google Chrome", "chrome"),
    ("Mozilla Firefox", "firefox"),
    ("Microsoft Edge", "edge"),
    ("Visual Studio Code", "code"),
    ("SPOTIFY PREMIUM", "spotify"),
    ("Spotify", "spotify"),
    ("Steam", "steam"),
    ("Explorateur de fichiers", "explorer"),
    ("File Explorer", "explorer"),
    ("Messenger", "messenger"),
    ("SteelSeries GG", "steelseries-gg"),
    ("Mobile connecté", "Mobile connect"),
    ("Your Phone", "phone"),
    ("Phone Link", "phone"),
];

/// Maps window titles to launchable app names.
#[derive(Debug, Clone)]
pub struct AppNameResolver {
    mappings: BTreeMap<String, String>,
}

impl Default for AppNameResolver {
    fn default() -> Self {
        Self {
            mappings: BUILTIN_APP_NAMES
                .iter()
                .map(|(prefix, app)| (prefix.to_string(), app.to_string()))
                .collect(),
        }
    }
}

impl AppNameResolver {
    /// Built-in mappings overlaid with `extra` (extra wins on conflict).
    pub fn with_overrides(extra: &BTreeMap<String, String>) -> Self {
        let mut resolver = Self::default();
        resolver
            .mappings
            .extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        resolver
    }

    /// Text before the first `" - "`, trimmed, mapped or lowercased.
    pub fn resolve(&self, title: &str) -> String {
        let prefix = title.split(" - ").next().unwrap_or(title).trim();
        match self.mappings.get(prefix) {
            Some(app) => app.clone(),
            None => prefix.to_lowercase(),
        }
    }
}
