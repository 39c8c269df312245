//! Startup context: the loaded document plus its resolved rule set.

use crate::resolver::{CookingRule, resolve_cooking_rules};
use crate::schema::CampfireConfig;
use crate::store;
use campfire_core::{ItemCatalog, ItemKey};
use std::path::Path;

/// The ready-to-use configuration handed to gameplay consumers.
///
/// Constructed once at startup and never mutated afterward; share it by
/// reference from however many readers need it. Picking up new settings
/// means building a replacement context, not mutating this one.
#[derive(Debug, Clone)]
pub struct CampfireContext {
    config: CampfireConfig,
    cooking_rules: Vec<CookingRule>,
}

impl CampfireContext {
    /// Load (or create) the settings file at `path`, normalize it on disk,
    /// and resolve its cookable-item table against `catalog`.
    pub fn initialize<C: ItemCatalog>(path: &Path, catalog: &C) -> Self {
        let config = store::load_or_init(path);
        Self::from_config(config, catalog)
    }

    /// Build a context from an already-loaded document. Useful for tests and
    /// for hosts that manage persistence themselves.
    pub fn from_config<C: ItemCatalog>(config: CampfireConfig, catalog: &C) -> Self {
        let cooking_rules = resolve_cooking_rules(&config, catalog);
        Self {
            config,
            cooking_rules,
        }
    }

    pub fn config(&self) -> &CampfireConfig {
        &self.config
    }

    /// Resolved cookable-item rules, in acceptance order.
    pub fn cooking_rules(&self) -> &[CookingRule] {
        &self.cooking_rules
    }

    /// The rule claiming `raw`, if that item is cookable.
    pub fn rule_for(&self, raw: ItemKey) -> Option<&CookingRule> {
        self.cooking_rules.iter().find(|rule| rule.raw == raw)
    }

    pub fn is_cookable(&self, raw: ItemKey) -> bool {
        self.rule_for(raw).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CookableEntry;
    use campfire_core::{Catalog, CatalogBuilder};

    fn setup_catalog() -> Catalog {
        let mut b = CatalogBuilder::new();
        for name in ["minecraft:cod", "minecraft:cooked_cod", "minecraft:salmon"] {
            b.register(name.parse().unwrap());
        }
        b.build()
    }

    fn key(catalog: &Catalog, name: &str) -> ItemKey {
        catalog.lookup(&name.parse().unwrap()).unwrap()
    }

    #[test]
    fn from_config_resolves_rules() {
        let catalog = setup_catalog();
        let config = CampfireConfig {
            cookable_items: vec![CookableEntry::new(
                "minecraft:cod",
                120,
                "minecraft:cooked_cod",
            )],
            ..CampfireConfig::default()
        };
        let ctx = CampfireContext::from_config(config.clone(), &catalog);
        assert_eq!(ctx.config(), &config);
        assert_eq!(ctx.cooking_rules().len(), 1);
    }

    #[test]
    fn rule_lookup_by_key() {
        let catalog = setup_catalog();
        let config = CampfireConfig {
            cookable_items: vec![CookableEntry::new(
                "minecraft:cod",
                120,
                "minecraft:cooked_cod",
            )],
            ..CampfireConfig::default()
        };
        let ctx = CampfireContext::from_config(config, &catalog);

        let cod = key(&catalog, "minecraft:cod");
        let salmon = key(&catalog, "minecraft:salmon");
        assert!(ctx.is_cookable(cod));
        assert!(!ctx.is_cookable(salmon));

        let rule = ctx.rule_for(cod).unwrap();
        assert_eq!(rule.cooked, key(&catalog, "minecraft:cooked_cod"));
        assert_eq!(rule.cook_ticks, 120);
    }

    #[test]
    fn context_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CampfireContext>();
    }
}
