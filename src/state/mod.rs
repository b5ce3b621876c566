// State management module
//
// This module provides the StateManager which wraps OverlayState with thread-safe access
// using Arc<RwLock<T>> and emits change events for whoever draws the overlay.

use crate::models::{FilterError, FilterSettings, HotkeyAction, OverlayState, PluginSettings};
use crate::profiles::ProfileKind;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when state is modified
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The whole plugin was switched on or off
    PluginToggled { enabled: bool },

    /// Border highlighting was switched on or off
    HighlightingToggled { enabled: bool },

    /// Text overlay was switched on or off
    OverlayToggled { enabled: bool },

    /// A different profile was selected
    ProfileChanged { profile: String },

    /// The configuration used for evaluation changed
    ActiveFilterChanged { profile: String },

    /// The Custom slot was overwritten
    CustomProfileSaved,

    /// The active filter was re-read on request
    FilterReloaded,

    /// An analysis pass produced different counts
    MapsAnalyzed { total: usize, passing: usize },
}

/// Thread-safe state manager with event emission
///
/// - Provides thread-safe access to [`OverlayState`] via `Arc<RwLock<T>>`
/// - Detects state changes and emits [`StateChange`] events
/// - Supports subscribing to state changes via tokio broadcast channels
///
/// # Usage
///
/// - [`read()`](Self::read) for reading state
/// - [`update()`](Self::update) for mutations with automatic event emission
/// - [`subscribe()`](Self::subscribe) for listening to state changes
pub struct StateManager {
    state: Arc<RwLock<OverlayState>>,
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    /// Create a new StateManager with default state and a 100-event channel
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(OverlayState::default())),
            state_tx,
        }
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> OverlayState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let config = state_manager.read(|state| state.active_config.clone());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OverlayState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Update the state and emit change events
    ///
    /// Captures the old state, applies `update_fn`, then broadcasts one event
    /// per detected difference.
    ///
    /// # Returns
    /// The StateChange events that were emitted
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut OverlayState),
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = Self::detect_changes(&old_state, &state);

        for change in &changes {
            self.emit(change.clone());
        }

        changes
    }

    /// Subscribe to state change events
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    fn emit(&self, change: StateChange) {
        // No subscribers is fine
        let _ = self.state_tx.send(change);
    }

    fn detect_changes(old: &OverlayState, new: &OverlayState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.enabled != new.enabled {
            changes.push(StateChange::PluginToggled {
                enabled: new.enabled,
            });
        }

        if old.highlighting_enabled != new.highlighting_enabled {
            changes.push(StateChange::HighlightingToggled {
                enabled: new.highlighting_enabled,
            });
        }

        if old.overlay_enabled != new.overlay_enabled {
            changes.push(StateChange::OverlayToggled {
                enabled: new.overlay_enabled,
            });
        }

        if old.active_profile != new.active_profile {
            changes.push(StateChange::ProfileChanged {
                profile: new.active_profile.to_string(),
            });
        }

        if old.profiles.custom() != new.profiles.custom() {
            changes.push(StateChange::CustomProfileSaved);
        }

        if old.active_config != new.active_config {
            changes.push(StateChange::ActiveFilterChanged {
                profile: new.active_profile.to_string(),
            });
        }

        if old.last_total_maps != new.last_total_maps
            || old.last_passing_maps != new.last_passing_maps
        {
            changes.push(StateChange::MapsAnalyzed {
                total: new.last_total_maps,
                passing: new.last_passing_maps,
            });
        }

        changes
    }

    // Convenience methods for common state updates

    pub fn set_enabled(&self, enabled: bool) -> Vec<StateChange> {
        self.update(|state| state.enabled = enabled)
    }

    pub fn set_highlighting(&self, enabled: bool) -> Vec<StateChange> {
        self.update(|state| state.highlighting_enabled = enabled)
    }

    pub fn toggle_overlay(&self) -> Vec<StateChange> {
        self.update(|state| state.overlay_enabled = !state.overlay_enabled)
    }

    /// Select a profile by name. Unknown names select Custom.
    pub fn select_profile(&self, name: &str) -> Vec<StateChange> {
        let kind = ProfileKind::from_name(name);
        self.update(|state| {
            state.active_profile = kind;
            state.refresh_active_config();
        })
    }

    /// Advance to the next profile in menu order
    pub fn cycle_profile(&self) -> Vec<StateChange> {
        let changes = self.update(|state| {
            state.active_profile = state.active_profile.next();
            state.refresh_active_config();
        });
        tracing::info!("Switched to profile '{}'", self.read(|s| s.active_profile));
        changes
    }

    /// Store hand-edited criteria in the Custom slot.
    ///
    /// If Custom is active the new criteria take effect immediately.
    ///
    /// # Errors
    /// Returns [`FilterError`] for an inverted or out-of-range tier range, or a
    /// negative minimum. State is left unchanged in that case.
    pub fn apply_custom_filter(
        &self,
        filter: &FilterSettings,
    ) -> Result<Vec<StateChange>, FilterError> {
        let custom = filter.to_configuration()?;
        Ok(self.update(|state| {
            state.profiles.set_custom(&custom);
            state.refresh_active_config();
        }))
    }

    /// Copy the active configuration into the Custom slot
    pub fn save_current_as_custom(&self) -> Vec<StateChange> {
        self.update(|state| {
            let current = state.active_config.clone();
            state.profiles.set_custom(&current);
            state.refresh_active_config();
        })
    }

    /// Re-read the hand-edited criteria into the Custom slot and announce a reload
    ///
    /// Keyword text edited in settings only takes effect through this call.
    /// `FilterReloaded` is emitted even when nothing changed.
    ///
    /// # Errors
    /// Returns [`FilterError`] if the edited criteria are invalid. State is
    /// left unchanged and no event is emitted in that case.
    pub fn reload_filter(
        &self,
        filter: &FilterSettings,
    ) -> Result<Vec<StateChange>, FilterError> {
        let custom = filter.to_configuration()?;
        let mut changes = self.update(|state| {
            state.profiles.set_custom(&custom);
            state.refresh_active_config();
        });

        tracing::info!("Filter settings reloaded");
        self.emit(StateChange::FilterReloaded);
        changes.push(StateChange::FilterReloaded);

        Ok(changes)
    }

    /// Record the counts from an analysis pass
    pub fn record_analysis(&self, total: usize, passing: usize) -> Vec<StateChange> {
        self.update(|state| {
            state.last_total_maps = total;
            state.last_passing_maps = passing;
        })
    }

    /// Apply a key press reported by the host.
    ///
    /// Bindings come from `settings.hotkeys`; a reload re-reads `settings.filter`.
    ///
    /// # Returns
    /// The bound action and the events it produced, or `None` for unbound keys.
    /// On [`HotkeyAction::ReloadFilter`] callers should also invalidate their
    /// analysis cache.
    ///
    /// # Errors
    /// Returns [`FilterError`] when a reload finds invalid filter criteria.
    pub fn handle_hotkey(
        &self,
        settings: &PluginSettings,
        key: &str,
    ) -> Result<Option<(HotkeyAction, Vec<StateChange>)>, FilterError> {
        let Some(action) = settings.hotkeys.action_for(key) else {
            return Ok(None);
        };
        tracing::debug!("Hotkey {} -> {:?}", key, action);

        let changes = match action {
            HotkeyAction::ToggleOverlay => self.toggle_overlay(),
            HotkeyAction::ReloadFilter => self.reload_filter(&settings.filter)?,
            HotkeyAction::CycleProfiles => self.cycle_profile(),
        };

        Ok(Some((action, changes)))
    }

    /// Load toggles, the Custom slot and the active profile from settings
    ///
    /// # Errors
    /// Returns [`FilterError`] if the stored filter criteria are invalid.
    pub fn load_from_settings(
        &self,
        settings: &PluginSettings,
    ) -> Result<Vec<StateChange>, FilterError> {
        let custom = settings.filter.to_configuration()?;
        let active_profile = ProfileKind::from_name(&settings.profiles.active_profile);

        if settings.general.use_regex {
            tracing::warn!("Regex mod matching is not supported; using keyword substring matching");
        }

        Ok(self.update(|state| {
            state.enabled = settings.general.enable;
            state.highlighting_enabled = settings.general.enable_highlighting;
            state.overlay_enabled = settings.general.enable_overlay;

            state.profiles.set_custom(&custom);
            state.active_profile = active_profile;
            state.refresh_active_config();

            tracing::info!(
                "Loaded settings: enabled={}, highlighting={}, overlay={}, profile={}",
                state.enabled,
                state.highlighting_enabled,
                state.overlay_enabled,
                state.active_profile
            );
        }))
    }

    /// Shared handle to the state for use in other threads
    pub fn state_arc(&self) -> Arc<RwLock<OverlayState>> {
        Arc::clone(&self.state)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
        }
    }
}
