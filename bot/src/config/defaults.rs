//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (
        "BIGGIFY_DEFAULT_ROWS",
        "4",
        "Strips produced by /biggify when no row count is given",
    ),
    (
        "BIGGIFY_MAX_ROWS",
        "10",
        "Largest row count /biggify accepts",
    ),
    (
        "BIGGIFY_DEFAULT_STRETCH",
        "1.5",
        "Horizontal stretch used when no stretch factor is given",
    ),
    (
        "BIGGIFY_OUTPUT_SCALE",
        "2.0",
        "Scale applied to every strip after slicing",
    ),
    (
        "BIGGIFY_MAX_MERGE_IMAGES",
        "10",
        "Most strips /mergebiggify accepts in one call",
    ),
    ("BIGGIFY_LOG", "info", "Log filter used when RUST_LOG is unset"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// One line per setting, in definition order: key, default and description.
pub fn describe_settings() -> Vec<String> {
    DEFS.iter()
        .map(|&(key, _, _)| &DEFAULT_SETTINGS[key])
        .map(|def| format!("{} (default: {}): {}", def.key, def.default, def.description))
        .collect()
}

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
