use crate::models::FilterConfiguration;
use crate::profiles::{ProfileKind, ProfileStore};

/// Single source of truth for the overlay's runtime state.
///
/// # Thread Safety
///
/// `OverlayState` is wrapped in `Arc<RwLock<OverlayState>>` by
/// [`crate::state::StateManager`]. Never mutate it directly; go through
/// [`update()`](crate::state::StateManager::update) so change events fire.
///
/// # Related Types
///
/// - [`crate::state::StateChange`]: Event types for state mutations
/// - [`crate::models::PluginSettings`]: Persisted settings loaded into this state
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayState {
    // Toggles
    pub enabled: bool,
    pub highlighting_enabled: bool,
    pub overlay_enabled: bool,

    // Profiles
    pub active_profile: ProfileKind,
    pub profiles: ProfileStore,
    pub active_config: FilterConfiguration,

    // Last analysis pass
    pub last_total_maps: usize,
    pub last_passing_maps: usize,
}

impl Default for OverlayState {
    fn default() -> Self {
        let profiles = ProfileStore::new();
        let active_config = profiles.custom().clone();

        Self {
            enabled: true,
            highlighting_enabled: true,
            overlay_enabled: true,

            active_profile: ProfileKind::Custom,
            profiles,
            active_config,

            last_total_maps: 0,
            last_passing_maps: 0,
        }
    }
}

impl OverlayState {
    /// Re-resolve the active configuration from the profile store.
    pub fn refresh_active_config(&mut self) {
        self.active_config = self.profiles.profile(self.active_profile).clone();
    }

    /// Whether anything should be drawn at all
    pub fn is_drawing(&self) -> bool {
        self.enabled && (self.highlighting_enabled || self.overlay_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = OverlayState::default();
        assert!(state.enabled);
        assert_eq!(state.active_profile, ProfileKind::Custom);
        assert_eq!(state.active_config, FilterConfiguration::default());
        assert!(state.is_drawing());
    }

    #[test]
    fn test_refresh_active_config() {
        let mut state = OverlayState {
            active_profile: ProfileKind::Delirium,
            ..Default::default()
        };
        state.refresh_active_config();
        assert_eq!(state.active_config.name(), "Delirium");
        assert_eq!(state.active_config.min_pack_size(), 25);
    }

    #[test]
    fn test_not_drawing_when_disabled() {
        let state = OverlayState {
            enabled: false,
            ..Default::default()
        };
        assert!(!state.is_drawing());
    }
}
