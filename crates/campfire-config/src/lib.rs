//! Campfire Config -- the settings subsystem for the campfire gameplay mod.
//!
//! Loads the JSON settings document (creating or back-filling it from
//! compiled-in defaults as needed), normalizes it back to disk, reconciles
//! its cookable-item table against the host's item catalog, and hands
//! gameplay code an immutable [`CampfireContext`].
//!
//! Nothing in here is fatal: a missing or corrupt file degrades to defaults,
//! a failed write degrades to in-memory-only settings, and an entry naming
//! an unknown or already-claimed item is dropped with a `tracing` diagnostic.

pub mod context;
pub mod resolver;
pub mod schema;
pub mod store;

pub use context::CampfireContext;
pub use resolver::{CookingRule, resolve_cooking_rules};
pub use schema::{BuffEntry, CampfireConfig, CookableEntry};
pub use store::{StoreError, load_or_init};
