use crate::id::{Identifier, ItemKey};
use std::collections::HashMap;

/// A canonical item entry in the catalog.
#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: Identifier,
}

/// Read-only lookup surface consumed during configuration resolution.
///
/// Implementations backed by an engine registry that answers unknown names
/// with an "empty"/air sentinel must report that sentinel as `None` from
/// [`lookup`](Self::lookup) rather than handing out its key.
pub trait ItemCatalog {
    /// Resolve a symbolic identifier to an item key, or `None` if the
    /// catalog holds no such item.
    fn lookup(&self, id: &Identifier) -> Option<ItemKey>;

    /// Fetch the definition behind a previously resolved key.
    fn get(&self, key: ItemKey) -> Option<&ItemDef>;
}

/// Builder for constructing an immutable [`Catalog`].
/// Two-phase lifecycle: registration -> freeze.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: Vec<ItemDef>,
    name_to_key: HashMap<Identifier, ItemKey>,
    empty: Option<ItemKey>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item. Returns its key. Registering the same identifier
    /// twice points the name at the newest entry.
    pub fn register(&mut self, id: Identifier) -> ItemKey {
        let key = ItemKey(self.items.len() as u32);
        self.name_to_key.insert(id.clone(), key);
        self.items.push(ItemDef { id });
        key
    }

    /// Register the catalog's empty sentinel. Lookups that reach this entry
    /// answer `None`.
    pub fn register_empty(&mut self, id: Identifier) -> ItemKey {
        let key = self.register(id);
        self.empty = Some(key);
        key
    }

    /// Freeze into an immutable catalog.
    pub fn build(self) -> Catalog {
        Catalog {
            items: self.items,
            name_to_key: self.name_to_key,
            empty: self.empty,
        }
    }
}

/// Immutable in-memory catalog. Frozen after build(). Thread-safe to share.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<ItemDef>,
    name_to_key: HashMap<Identifier, ItemKey>,
    empty: Option<ItemKey>,
}

impl Catalog {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl ItemCatalog for Catalog {
    fn lookup(&self, id: &Identifier) -> Option<ItemKey> {
        let key = self.name_to_key.get(id).copied()?;
        if self.empty == Some(key) { None } else { Some(key) }
    }

    fn get(&self, key: ItemKey) -> Option<&ItemDef> {
        self.items.get(key.0 as usize)
    }
}
