//! Startup example: load the settings file and resolve it against a catalog.
//!
//! Builds a small item catalog, initializes a context from a settings file
//! in the system temp directory (created on first run), and prints the
//! resolved cooking table. Diagnostics for dropped entries go to stderr.
//!
//! Run with: `cargo run -p campfire-config --example startup`

use campfire_config::CampfireContext;
use campfire_core::{CatalogBuilder, ItemCatalog};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // --- Step 1: Build the item catalog ---

    // A real host adapts its registry behind the ItemCatalog trait; here we
    // register just enough vanilla items that some default entries resolve
    // and some do not.
    let mut builder = CatalogBuilder::new();
    builder.register_empty("minecraft:air".parse().unwrap());
    for name in [
        "minecraft:cod",
        "minecraft:cooked_cod",
        "minecraft:salmon",
        "minecraft:cooked_salmon",
        "minecraft:potato",
        "minecraft:baked_potato",
        "minecraft:grass_block",
        "minecraft:dirt",
    ] {
        builder.register(name.parse().unwrap());
    }
    let catalog = builder.build();

    // --- Step 2: Load settings and resolve ---

    let path = std::env::temp_dir().join("campfires.json");
    let ctx = CampfireContext::initialize(&path, &catalog);

    // --- Step 3: Show what survived ---

    println!("settings file: {}", path.display());
    println!(
        "buffing: {} (radius {}, every {} ticks)",
        ctx.config().campfires_can_buff,
        ctx.config().buff_radius,
        ctx.config().buff_check_interval
    );
    println!(
        "cooking: {} (radius {}, every {} ticks)",
        ctx.config().campfires_can_cook,
        ctx.config().cook_radius,
        ctx.config().cook_check_interval
    );
    println!("resolved cooking rules:");
    for rule in ctx.cooking_rules() {
        let raw = catalog.get(rule.raw).expect("resolved key").id.to_string();
        let cooked = catalog
            .get(rule.cooked)
            .expect("resolved key")
            .id
            .to_string();
        println!("  {raw} -> {cooked} in {} ticks", rule.cook_ticks);
    }
}
