//! Serde document structs for the campfire settings file.
//!
//! These types define the on-disk JSON format. External names are
//! load-bearing: players hand-edit the file, so keys must stay exactly as
//! they are. Every field carries a compiled-in default that fills it when a
//! stored document omits it; the list fields are defaulted only when
//! entirely absent, never merged per-element.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ===========================================================================
// Document
// ===========================================================================

/// The campfire settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampfireConfig {
    #[serde(default = "default_campfires_can_buff")]
    pub campfires_can_buff: bool,

    #[serde(default = "default_buff_radius")]
    pub buff_radius: i32,

    /// Ticks between buff application sweeps.
    #[serde(default = "default_buff_check_interval")]
    pub buff_check_interval: i32,

    #[serde(default = "default_campfires_can_cook")]
    pub campfires_can_cook: bool,

    #[serde(default = "default_cook_radius")]
    pub cook_radius: i32,

    /// Ticks between cooking sweeps.
    #[serde(default = "default_cook_check_interval")]
    pub cook_check_interval: i32,

    /// When false, unlit campfires buff and cook too.
    #[serde(default = "default_require_lit_campfire")]
    pub require_lit_campfire: bool,

    /// Effects applied to players in range, in application order.
    /// Duplicates are allowed and preserved.
    #[serde(default = "default_buffs")]
    pub buffs: Vec<BuffEntry>,

    /// Item transformation table. Source of truth: entries may name unknown
    /// or duplicate raw items; the resolver sorts that out at startup.
    #[serde(default = "default_cookable_items")]
    pub cookable_items: Vec<CookableEntry>,
}

/// One status effect applied by a campfire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffEntry {
    pub effect: String,
    pub duration: i32,
    pub amplifier: i32,
}

/// One raw-to-cooked item mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookableEntry {
    #[serde(rename = "rawItem")]
    pub raw_item: String,
    #[serde(rename = "cookTime")]
    pub cook_time: i32,
    #[serde(rename = "cookedItem")]
    pub cooked_item: String,
}

impl CookableEntry {
    pub fn new(raw_item: &str, cook_time: i32, cooked_item: &str) -> Self {
        Self {
            raw_item: raw_item.to_string(),
            cook_time,
            cooked_item: cooked_item.to_string(),
        }
    }
}

// ===========================================================================
// Defaults
// ===========================================================================

fn default_campfires_can_buff() -> bool {
    true
}

fn default_buff_radius() -> i32 {
    6
}

fn default_buff_check_interval() -> i32 {
    30
}

fn default_campfires_can_cook() -> bool {
    true
}

fn default_cook_radius() -> i32 {
    4
}

fn default_cook_check_interval() -> i32 {
    20
}

fn default_require_lit_campfire() -> bool {
    true
}

fn default_buffs() -> Vec<BuffEntry> {
    vec![
        BuffEntry {
            effect: "minecraft:regeneration".to_string(),
            duration: 200,
            amplifier: 0,
        },
        BuffEntry {
            effect: "minecraft:resistance".to_string(),
            duration: 200,
            amplifier: 0,
        },
    ]
}

fn default_cookable_items() -> Vec<CookableEntry> {
    vec![
        CookableEntry::new("minecraft:cod", 200, "minecraft:cooked_cod"),
        CookableEntry::new("minecraft:salmon", 150, "minecraft:cooked_salmon"),
        CookableEntry::new("minecraft:beef", 300, "minecraft:cooked_beef"),
        CookableEntry::new("minecraft:chicken", 200, "minecraft:cooked_chicken"),
        CookableEntry::new("minecraft:mutton", 200, "minecraft:cooked_mutton"),
        CookableEntry::new("minecraft:porkchop", 250, "minecraft:cooked_porkchop"),
        CookableEntry::new("minecraft:rabbit", 200, "minecraft:cooked_rabbit"),
        CookableEntry::new("minecraft:potato", 100, "minecraft:baked_potato"),
        // Not typically cooked, just for fun.
        CookableEntry::new("minecraft:grass_block", 200, "minecraft:dirt"),
    ]
}

impl Default for CampfireConfig {
    fn default() -> Self {
        Self {
            campfires_can_buff: default_campfires_can_buff(),
            buff_radius: default_buff_radius(),
            buff_check_interval: default_buff_check_interval(),
            campfires_can_cook: default_campfires_can_cook(),
            cook_radius: default_cook_radius(),
            cook_check_interval: default_cook_check_interval(),
            require_lit_campfire: default_require_lit_campfire(),
            buffs: default_buffs(),
            cookable_items: default_cookable_items(),
        }
    }
}

// ===========================================================================
// Sanitation
// ===========================================================================

impl CampfireConfig {
    /// Reset non-positive radius and interval fields to their defaults.
    /// The gameplay sweeps treat these as strictly positive.
    pub fn sanitize(&mut self) {
        sanitize_field(&mut self.buff_radius, default_buff_radius(), "buff_radius");
        sanitize_field(
            &mut self.buff_check_interval,
            default_buff_check_interval(),
            "buff_check_interval",
        );
        sanitize_field(&mut self.cook_radius, default_cook_radius(), "cook_radius");
        sanitize_field(
            &mut self.cook_check_interval,
            default_cook_check_interval(),
            "cook_check_interval",
        );
    }
}

fn sanitize_field(value: &mut i32, default: i32, name: &str) {
    if *value <= 0 {
        warn!(
            field = name,
            value = *value,
            default,
            "non-positive value in settings, resetting to default"
        );
        *value = default;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
