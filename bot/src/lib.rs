//! Chat-bot side of biggify: configuration, command handlers and the
//! local-file plumbing used by the headless binary.

pub mod commands;
pub mod config;
pub mod local;

use tracing_subscriber::EnvFilter;

pub use commands::{Attachment, CommandError, CommandReply, OutgoingFile};
pub use config::BotConfig;

/// Load .env from the first candidate path that exists.
///
/// Returns the path that was loaded so the caller can log it once tracing
/// is up.
pub fn load_dotenv() -> Option<&'static str> {
    let candidates = [".env", "../.env"];
    candidates
        .into_iter()
        .find(|path| dotenvy::from_filename(path).is_ok())
}

/// Install the fmt subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
