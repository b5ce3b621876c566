//! Services module - map detection, scoring, analysis and overlay planning.
//!
//! Nothing here reads game memory or draws; the host plugs in through
//! [`ItemSource`] and consumes [`OverlayPlan`] values.
//!
//! # Components
//!
//! - [`evaluator`]: The pure `evaluate(record, config)` scoring function
//! - [`extraction`]: Map detection and stat extraction from raw host items
//! - [`analysis`]: [`MapAnalyzer`], which scans an [`ItemSource`] and caches each pass
//! - [`snapshot`]: [`SnapshotSource`], an [`ItemSource`] read from a YAML file
//! - [`highlight`]: Border color, label and tooltip decisions
//!
//! # Usage Example
//!
//! ```ignore
//! use mapscout::services::{MapAnalyzer, plan_overlay};
//!
//! let config = state.read(|s| s.active_config.clone());
//! for map in analyzer.analyze(&source, &config) {
//!     let plan = plan_overlay(map, &config, &settings, true, true);
//!     host.draw(plan);
//! }
//! ```

pub mod analysis;
pub mod evaluator;
pub mod extraction;
pub mod highlight;
pub mod snapshot;

pub use analysis::{DEFAULT_REFRESH_INTERVAL, ItemSource, MapAnalyzer};
pub use evaluator::{BAD_MOD_PENALTY, GOOD_MOD_BONUS, evaluate, mod_matches};
pub use extraction::{extract_map, is_map};
pub use highlight::{LineTone, OverlayLabel, OverlayPlan, TooltipLine, plan_overlay};
pub use snapshot::SnapshotSource;
