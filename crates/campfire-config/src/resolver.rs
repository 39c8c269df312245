//! Reconciliation of the cookable-item table against the item catalog.
//!
//! Single pass in document order. Entries whose identifiers do not resolve
//! are dropped with a diagnostic; the first entry to claim a raw item wins
//! and later claims are dropped. Buff entries reference the status-effect
//! registry, not the item catalog, and pass through untouched. There is no
//! failure mode: the result is just however many rules survived.

use crate::schema::CampfireConfig;
use campfire_core::{Identifier, ItemCatalog, ItemKey};
use std::collections::HashSet;
use tracing::{info, warn};

/// A cookable-item rule with both identifiers resolved to catalog keys.
/// Rebuilt wholesale by each resolve pass, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookingRule {
    pub raw: ItemKey,
    pub cooked: ItemKey,
    pub cook_ticks: i32,
}

/// Resolve `cookable_items` into the rule set used by the cooking sweep.
///
/// Deduplication is keyed on the resolved raw [`ItemKey`], not the source
/// string: two spellings that reach the same catalog entry still collide.
pub fn resolve_cooking_rules<C: ItemCatalog>(
    config: &CampfireConfig,
    catalog: &C,
) -> Vec<CookingRule> {
    let mut rules = Vec::new();
    let mut seen: HashSet<ItemKey> = HashSet::new();

    for entry in &config.cookable_items {
        let Some(raw) = lookup(catalog, &entry.raw_item) else {
            warn!(
                item = %entry.raw_item,
                "raw item not found in catalog, skipping cookable entry"
            );
            continue;
        };
        let Some(cooked) = lookup(catalog, &entry.cooked_item) else {
            warn!(
                item = %entry.cooked_item,
                "cooked item not found in catalog, skipping cookable entry"
            );
            continue;
        };
        if !seen.insert(raw) {
            warn!(
                item = %resolved_name(catalog, raw, &entry.raw_item),
                "duplicate raw item, skipping cookable entry"
            );
            continue;
        }
        info!(
            raw = %entry.raw_item,
            cooked = %entry.cooked_item,
            ticks = entry.cook_time,
            "registered cookable item"
        );
        rules.push(CookingRule {
            raw,
            cooked,
            cook_ticks: entry.cook_time,
        });
    }

    rules
}

/// Parse an identifier string and look it up. A malformed identifier counts
/// as not found.
fn lookup<C: ItemCatalog>(catalog: &C, spelling: &str) -> Option<ItemKey> {
    let id: Identifier = spelling.parse().ok()?;
    catalog.lookup(&id)
}

/// Canonical name behind a resolved key, for diagnostics.
fn resolved_name<C: ItemCatalog>(catalog: &C, key: ItemKey, fallback: &str) -> String {
    match catalog.get(key) {
        Some(def) => def.id.to_string(),
        None => fallback.to_string(),
    }
}
