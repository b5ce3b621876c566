use crate::models::filter::{FilterConfiguration, FilterError, FilterThresholds};
use serde::{Deserialize, Serialize};

/// Plugin settings persisted in `Mapscout Settings.yaml`
///
/// Mirrors the host settings menu: general toggles, the hand-edited filter
/// criteria (the Custom profile slot), visuals, profile selection and hotkeys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginSettings {
    #[serde(rename = "General", default)]
    pub general: GeneralSettings,

    #[serde(rename = "Filter", default)]
    pub filter: FilterSettings,

    #[serde(rename = "Visual", default)]
    pub visual: VisualSettings,

    #[serde(rename = "Profiles", default)]
    pub profiles: ProfileSettings,

    #[serde(rename = "Hotkeys", default)]
    pub hotkeys: HotkeySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(rename = "Enable", default = "default_true")]
    pub enable: bool,

    #[serde(rename = "Enable Map Highlighting", default = "default_true")]
    pub enable_highlighting: bool,

    #[serde(rename = "Enable Overlay Display", default = "default_true")]
    pub enable_overlay: bool,

    /// Not consulted; the host owns notifications.
    #[serde(rename = "Show Notifications", default = "default_true")]
    pub show_notifications: bool,

    /// Not consulted; only inventory and stash are scanned.
    #[serde(rename = "Highlight in Vendor Windows", default = "default_true")]
    pub highlight_in_vendor: bool,

    /// Not consulted by matching; keyword matching is always substring based.
    #[serde(rename = "Use Regex for Mod Matching", default)]
    pub use_regex: bool,

    #[serde(rename = "Refresh Interval ms", default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            enable: true,
            enable_highlighting: true,
            enable_overlay: true,
            show_notifications: true,
            highlight_in_vendor: true,
            use_regex: false,
            refresh_interval_ms: default_refresh_interval_ms(),
        }
    }
}

/// Hand-edited filter criteria. This is what the Custom profile slot holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    #[serde(rename = "Minimum Map Tier", default = "default_min_tier")]
    pub min_tier: i32,

    #[serde(rename = "Maximum Map Tier", default = "default_max_tier")]
    pub max_tier: i32,

    #[serde(rename = "Minimum Item Quantity", default)]
    pub min_quantity: i32,

    #[serde(rename = "Minimum Item Rarity", default)]
    pub min_rarity: i32,

    #[serde(rename = "Minimum Pack Size", default)]
    pub min_pack_size: i32,

    #[serde(rename = "Good Mod Keywords", default = "default_good_mods")]
    pub good_mod_keywords: String,

    #[serde(rename = "Bad Mod Keywords", default = "default_bad_mods")]
    pub bad_mod_keywords: String,

    #[serde(rename = "Highlight Good Mods", default = "default_true")]
    pub highlight_good_mods: bool,

    #[serde(rename = "Highlight Bad Mods", default = "default_true")]
    pub highlight_bad_mods: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            min_tier: default_min_tier(),
            max_tier: default_max_tier(),
            min_quantity: 0,
            min_rarity: 0,
            min_pack_size: 0,
            good_mod_keywords: default_good_mods(),
            bad_mod_keywords: default_bad_mods(),
            highlight_good_mods: true,
            highlight_bad_mods: true,
        }
    }
}

impl FilterSettings {
    pub fn thresholds(&self) -> FilterThresholds {
        FilterThresholds {
            min_tier: self.min_tier,
            max_tier: self.max_tier,
            min_quantity: self.min_quantity,
            min_rarity: self.min_rarity,
            min_pack_size: self.min_pack_size,
        }
    }

    /// Build the Custom profile configuration from these criteria.
    pub fn to_configuration(&self) -> Result<FilterConfiguration, FilterError> {
        FilterConfiguration::new(
            "Custom",
            self.thresholds(),
            &self.good_mod_keywords,
            &self.bad_mod_keywords,
        )
    }

    /// Overwrite the criteria with a configuration's values, keeping the highlight toggles.
    pub fn apply_configuration(&mut self, config: &FilterConfiguration) {
        self.min_tier = config.min_tier();
        self.max_tier = config.max_tier();
        self.min_quantity = config.min_quantity();
        self.min_rarity = config.min_rarity();
        self.min_pack_size = config.min_pack_size();
        self.good_mod_keywords = config.good_mods_text();
        self.bad_mod_keywords = config.bad_mods_text();
    }
}

/// RGBA color as stored in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const LIGHT_GREEN: Rgba = Rgba::new(144, 238, 144, 255);
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);

    /// Black with the given alpha, used behind overlay labels
    pub const fn black_with_alpha(a: u8) -> Self {
        Self::new(0, 0, 0, a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualSettings {
    #[serde(rename = "Good Map Border Color", default = "default_good_color")]
    pub good_map_color: Rgba,

    #[serde(rename = "Bad Map Border Color", default = "default_bad_color")]
    pub bad_map_color: Rgba,

    #[serde(rename = "Neutral Map Border Color", default = "default_neutral_color")]
    pub neutral_map_color: Rgba,

    #[serde(rename = "Border Thickness", default = "default_border_thickness")]
    pub border_thickness: u8,

    #[serde(rename = "Text Size", default = "default_text_size")]
    pub text_size: u8,

    #[serde(rename = "Overlay Background Opacity", default = "default_background_opacity")]
    pub background_opacity: u8,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            good_map_color: default_good_color(),
            bad_map_color: default_bad_color(),
            neutral_map_color: default_neutral_color(),
            border_thickness: default_border_thickness(),
            text_size: default_text_size(),
            background_opacity: default_background_opacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    #[serde(rename = "Active Profile", default = "default_active_profile")]
    pub active_profile: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            active_profile: default_active_profile(),
        }
    }
}

/// Key names as reported by the host (e.g. "F9")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeySettings {
    #[serde(rename = "Toggle Overlay", default = "default_toggle_overlay_key")]
    pub toggle_overlay: String,

    #[serde(rename = "Reload Filter", default = "default_reload_filter_key")]
    pub reload_filter: String,

    #[serde(rename = "Cycle Profiles", default = "default_cycle_profiles_key")]
    pub cycle_profiles: String,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            toggle_overlay: default_toggle_overlay_key(),
            reload_filter: default_reload_filter_key(),
            cycle_profiles: default_cycle_profiles_key(),
        }
    }
}

/// What a bound hotkey does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    ToggleOverlay,
    ReloadFilter,
    CycleProfiles,
}

impl HotkeySettings {
    /// Resolve a pressed key to its bound action. Key names compare case-insensitively.
    pub fn action_for(&self, key: &str) -> Option<HotkeyAction> {
        let key = key.trim();
        if key.eq_ignore_ascii_case(&self.toggle_overlay) {
            Some(HotkeyAction::ToggleOverlay)
        } else if key.eq_ignore_ascii_case(&self.reload_filter) {
            Some(HotkeyAction::ReloadFilter)
        } else if key.eq_ignore_ascii_case(&self.cycle_profiles) {
            Some(HotkeyAction::CycleProfiles)
        } else {
            None
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_refresh_interval_ms() -> u64 {
    500
}

fn default_min_tier() -> i32 {
    1
}

fn default_max_tier() -> i32 {
    17
}

fn default_good_mods() -> String {
    "beyond,breach,harbinger,legion,ritual".to_string()
}

fn default_bad_mods() -> String {
    "reflect,no regen,cannot leech".to_string()
}

fn default_good_color() -> Rgba {
    Rgba::new(0, 255, 0, 200)
}

fn default_bad_color() -> Rgba {
    Rgba::new(255, 0, 0, 200)
}

fn default_neutral_color() -> Rgba {
    Rgba::new(255, 255, 255, 150)
}

fn default_border_thickness() -> u8 {
    2
}

fn default_text_size() -> u8 {
    16
}

fn default_background_opacity() -> u8 {
    200
}

fn default_active_profile() -> String {
    "Custom".to_string()
}

fn default_toggle_overlay_key() -> String {
    "F9".to_string()
}

fn default_reload_filter_key() -> String {
    "F10".to_string()
}

fn default_cycle_profiles_key() -> String {
    "F11".to_string()
}
