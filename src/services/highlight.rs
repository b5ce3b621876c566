//! Render-agnostic overlay plans.
//!
//! The host draws; this module only decides what a map's border, label and
//! tooltip should look like given its evaluation and the visual settings.

use crate::models::{
    AnalyzedMap, EvaluationResult, FilterConfiguration, ItemLocation, MapItemRecord,
    PluginSettings, Rgba,
};
use crate::services::evaluator::mod_matches;

/// Number of header lines before the mod list in a tooltip
pub const TOOLTIP_HEADER_LINES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: Rgba,
    pub thickness: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLabel {
    pub text: String,
    pub text_color: Rgba,
    pub background: Rgba,
    pub text_size: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTone {
    Normal,
    Good,
    Bad,
}

impl LineTone {
    pub fn color(self) -> Rgba {
        match self {
            LineTone::Normal => Rgba::WHITE,
            LineTone::Good => Rgba::LIGHT_GREEN,
            LineTone::Bad => Rgba::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    pub text: String,
    pub tone: LineTone,
}

/// Everything the host needs to draw for one map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPlan {
    pub location: ItemLocation,
    pub border: Option<Border>,
    pub label: Option<OverlayLabel>,
    /// Shown while the cursor hovers the item; empty when there is no label
    pub tooltip: Vec<TooltipLine>,
}

/// Border color for a map, or `None` when it should not be highlighted.
///
/// Bad mods take precedence, then good mods on passing maps, then any passing map.
pub fn border_color(
    result: &EvaluationResult,
    highlighting_enabled: bool,
    settings: &PluginSettings,
) -> Option<Rgba> {
    if !highlighting_enabled {
        return None;
    }

    let filter = &settings.filter;
    let visual = &settings.visual;
    if result.has_bad_mods && filter.highlight_bad_mods {
        Some(visual.bad_map_color)
    } else if result.meets_criteria && result.has_good_mods && filter.highlight_good_mods {
        Some(visual.good_map_color)
    } else if result.meets_criteria {
        Some(visual.neutral_map_color)
    } else {
        None
    }
}

/// Short stat line drawn above the item, e.g. `T16 | Q:90% R:0% P:30%`
pub fn overlay_label(record: &MapItemRecord) -> String {
    format!(
        "T{} | Q:{}% R:{}% P:{}%",
        record.tier, record.quantity, record.rarity, record.pack_size
    )
}

/// Hover tooltip: stat header followed by one tone-coded line per mod.
pub fn tooltip_lines(map: &AnalyzedMap, config: &FilterConfiguration) -> Vec<TooltipLine> {
    let record = &map.record;
    let header = [
        format!("Map: {}", record.name),
        format!("Tier: {}", record.tier),
        format!("Quantity: {}%", record.quantity),
        format!("Rarity: {}%", record.rarity),
        format!("Pack Size: {}%", record.pack_size),
        format!("Score: {}", map.result.score),
        String::new(),
        "Mods:".to_string(),
    ];

    let mut lines: Vec<TooltipLine> = header
        .into_iter()
        .map(|text| TooltipLine {
            text,
            tone: LineTone::Normal,
        })
        .collect();

    lines.extend(record.mods.iter().map(|mod_text| TooltipLine {
        text: mod_text.clone(),
        tone: mod_tone(mod_text, config),
    }));

    lines
}

/// Good wins over bad when a line matches both lists
pub fn mod_tone(mod_text: &str, config: &FilterConfiguration) -> LineTone {
    if mod_matches(mod_text, config.good_mod_keywords()) {
        LineTone::Good
    } else if mod_matches(mod_text, config.bad_mod_keywords()) {
        LineTone::Bad
    } else {
        LineTone::Normal
    }
}

/// Build the full plan for one map.
///
/// Labels and tooltips are only produced for maps meeting the criteria while
/// the overlay is enabled.
pub fn plan_overlay(
    map: &AnalyzedMap,
    config: &FilterConfiguration,
    settings: &PluginSettings,
    highlighting_enabled: bool,
    overlay_enabled: bool,
) -> OverlayPlan {
    let visual = &settings.visual;

    let border = border_color(&map.result, highlighting_enabled, settings).map(|color| Border {
        color,
        thickness: visual.border_thickness,
    });

    let show_label = overlay_enabled && map.result.meets_criteria;

    let label = show_label.then(|| OverlayLabel {
        text: overlay_label(&map.record),
        text_color: if map.result.has_good_mods {
            Rgba::LIGHT_GREEN
        } else {
            Rgba::WHITE
        },
        background: Rgba::black_with_alpha(visual.background_opacity),
        text_size: visual.text_size,
    });

    let tooltip = if show_label {
        tooltip_lines(map, config)
    } else {
        Vec::new()
    };

    OverlayPlan {
        location: map.location,
        border,
        label,
        tooltip,
    }
}
