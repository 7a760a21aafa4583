//! Runtime bot configuration loaded from environment variables.

use super::defaults::get_default;
use super::validation::validate_setting;

/// Runtime configuration for the command handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    pub default_rows: u32,
    pub max_rows: u32,
    pub default_stretch_factor: f64,
    pub output_scale_factor: f64,
    pub max_merge_images: usize,
    pub log_filter: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            default_rows: 4,
            max_rows: 10,
            default_stretch_factor: biggify_engine::DEFAULT_STRETCH_FACTOR,
            output_scale_factor: biggify_engine::DEFAULT_OUTPUT_SCALE_FACTOR,
            max_merge_images: 10,
            log_filter: "info".into(),
        }
    }
}

/// A setting value that was ignored in favour of its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl RejectedSetting {
    /// Report the rejection. Call once a subscriber is installed.
    pub fn log(&self) {
        tracing::warn!(
            key = self.key,
            value = %self.value,
            "Ignoring invalid setting: {}",
            self.reason
        );
    }
}

impl BotConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> (Self, Vec<RejectedSetting>) {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration through a key lookup.
    ///
    /// Missing or empty values use the default. Invalid values are replaced
    /// by the default and returned alongside the config, since this usually
    /// runs before logging is set up.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<RejectedSetting>) {
        let mut rejected = Vec::new();
        let mut g = |key: &'static str| -> String {
            let default = get_default(key).unwrap_or_default();
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(v) => match validate_setting(key, v.trim()) {
                    Ok(()) => v.trim().to_string(),
                    Err(reason) => {
                        rejected.push(RejectedSetting {
                            key,
                            value: v,
                            reason,
                        });
                        default.to_string()
                    }
                },
                None => default.to_string(),
            }
        };

        let fallback = Self::default();
        let max_rows = parse_or(&g("BIGGIFY_MAX_ROWS"), fallback.max_rows);
        let default_rows_raw = g("BIGGIFY_DEFAULT_ROWS");
        let default_stretch_factor = parse_or(
            &g("BIGGIFY_DEFAULT_STRETCH"),
            fallback.default_stretch_factor,
        );
        let output_scale_factor = parse_or(&g("BIGGIFY_OUTPUT_SCALE"), fallback.output_scale_factor);
        let max_merge_images = parse_or(&g("BIGGIFY_MAX_MERGE_IMAGES"), fallback.max_merge_images);
        let log_filter = g("BIGGIFY_LOG");

        let mut default_rows = parse_or(&default_rows_raw, fallback.default_rows);
        if default_rows > max_rows {
            rejected.push(RejectedSetting {
                key: "BIGGIFY_DEFAULT_ROWS",
                value: default_rows_raw,
                reason: format!("exceeds BIGGIFY_MAX_ROWS ({max_rows}), clamped"),
            });
            default_rows = max_rows;
        }

        let config = Self {
            default_rows,
            max_rows,
            default_stretch_factor,
            output_scale_factor,
            max_merge_images,
            log_filter,
        };
        (config, rejected)
    }
}

fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
