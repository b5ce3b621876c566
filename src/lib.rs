// Mapscout - map item scoring for in-game map analysis overlays
//
// This is the library crate containing the scoring logic, profiles and state.
// The binary crate (main.rs) is a headless front end over snapshot files.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod profiles;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{EvaluationResult, FilterConfiguration, MapItemRecord, PluginSettings};
pub use profiles::{ProfileKind, ProfileStore};
pub use services::evaluate;
pub use state::{StateChange, StateManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
