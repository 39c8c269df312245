//! Load/save persistence for the settings document.
//!
//! Reading is infallible from the caller's point of view: anything that
//! cannot be recovered from the file (missing, unreadable, malformed) falls
//! back to the compiled-in defaults. Writing is best-effort; a failure is
//! logged and the in-memory document stays authoritative.

use crate::schema::CampfireConfig;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while reading or writing the settings file.
/// Internal taxonomy only; the load entry points recover from all of them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file exists but does not deserialize as a settings document.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The in-memory document could not be encoded.
    #[error("failed to encode settings document: {0}")]
    Encode(#[source] serde_json::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Load / save
// ===========================================================================

/// Read the settings document at `path`, substituting full defaults for
/// anything unrecoverable. Fields missing from a readable document are
/// filled per-field during deserialization.
pub fn load_or_default(path: &Path) -> CampfireConfig {
    match read_document(path) {
        Ok(config) => config,
        Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(
                path = %path.display(),
                "no settings file found, starting from defaults"
            );
            CampfireConfig::default()
        }
        Err(e) => {
            warn!(
                error = %e,
                path = %path.display(),
                "failed to read settings file, starting from defaults"
            );
            CampfireConfig::default()
        }
    }
}

fn read_document(path: &Path) -> Result<CampfireConfig, StoreError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StoreError::Parse {
        file: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Write the document to `path` as pretty-printed JSON.
pub fn save(config: &CampfireConfig, path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(config).map_err(StoreError::Encode)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load the settings document, sanitize its scalars, and immediately rewrite
/// it so the on-disk form is normalized (every recognized field present)
/// before first use.
pub fn load_or_init(path: &Path) -> CampfireConfig {
    let mut config = load_or_default(path);
    config.sanitize();
    if let Err(e) = save(&config, path) {
        warn!(
            error = %e,
            path = %path.display(),
            "failed to write settings file, continuing with in-memory settings"
        );
    }
    config
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Create a temporary directory with a unique name for test isolation.
    fn make_test_dir(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "campfire_store_test_{suffix}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Clean up a test directory.
    fn cleanup(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = make_test_dir("missing");
        let config = load_or_default(&dir.join("campfires.json"));
        assert_eq!(config, CampfireConfig::default());
        cleanup(&dir);
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = make_test_dir("malformed");
        let path = dir.join("campfires.json");
        fs::write(&path, "this is not valid JSON {{{").unwrap();

        let config = load_or_default(&path);
        assert_eq!(config, CampfireConfig::default());

        cleanup(&dir);
    }

    #[test]
    fn empty_file_loads_defaults() {
        let dir = make_test_dir("empty");
        let path = dir.join("campfires.json");
        fs::write(&path, "").unwrap();

        let config = load_or_default(&path);
        assert_eq!(config, CampfireConfig::default());

        cleanup(&dir);
    }

    #[test]
    fn null_document_loads_defaults() {
        let dir = make_test_dir("null");
        let path = dir.join("campfires.json");
        fs::write(&path, "null").unwrap();

        let config = load_or_default(&path);
        assert_eq!(config, CampfireConfig::default());

        cleanup(&dir);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = make_test_dir("round_trip");
        let path = dir.join("campfires.json");

        let mut config = CampfireConfig::default();
        config.buff_radius = 11;
        config.cookable_items.truncate(3);
        save(&config, &path).unwrap();

        let loaded = load_or_default(&path);
        assert_eq!(loaded, config);

        cleanup(&dir);
    }

    #[test]
    fn save_is_pretty_printed() {
        let dir = make_test_dir("pretty");
        let path = dir.join("campfires.json");
        save(&CampfireConfig::default(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.lines().count() > 1);
        assert!(content.contains("  \"campfires_can_buff\": true"));

        cleanup(&dir);
    }

    #[test]
    fn load_or_init_creates_file_with_all_fields() {
        let dir = make_test_dir("init_creates");
        let path = dir.join("campfires.json");

        let config = load_or_init(&path);
        assert_eq!(config, CampfireConfig::default());
        assert!(path.exists());

        let written = fs::read_to_string(&path).unwrap();
        for key in ["buff_radius", "require_lit_campfire", "cookable_items"] {
            assert!(written.contains(key), "missing key {key}");
        }

        cleanup(&dir);
    }

    #[test]
    fn load_or_init_backfills_missing_fields_on_disk() {
        let dir = make_test_dir("backfill");
        let path = dir.join("campfires.json");
        fs::write(&path, r#"{"buff_radius": 9}"#).unwrap();

        let config = load_or_init(&path);
        assert_eq!(config.buff_radius, 9);

        // The rewritten file now carries every field, customization intact.
        let reloaded: CampfireConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded, config);
        assert!(fs::read_to_string(&path).unwrap().contains("cook_radius"));

        cleanup(&dir);
    }

    #[test]
    fn load_or_init_reaches_fixed_point_after_one_fill() {
        let dir = make_test_dir("fixed_point");
        let path = dir.join("campfires.json");
        fs::write(&path, r#"{"cook_check_interval": 5}"#).unwrap();

        let first = load_or_init(&path);
        let on_disk_after_first = fs::read_to_string(&path).unwrap();
        let second = load_or_init(&path);
        let on_disk_after_second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(on_disk_after_first, on_disk_after_second);

        cleanup(&dir);
    }

    #[test]
    fn load_or_init_sanitizes_and_persists_corrected_scalars() {
        let dir = make_test_dir("sanitize");
        let path = dir.join("campfires.json");
        fs::write(&path, r#"{"buff_radius": -4, "cook_radius": 7}"#).unwrap();

        let config = load_or_init(&path);
        assert_eq!(config.buff_radius, 6);
        assert_eq!(config.cook_radius, 7);

        // The corrected value is what lands on disk.
        let reloaded: CampfireConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded.buff_radius, 6);

        cleanup(&dir);
    }

    #[test]
    fn partial_list_survives_normalization_unmerged() {
        let dir = make_test_dir("partial_list");
        let path = dir.join("campfires.json");
        fs::write(
            &path,
            r#"{"cookable_items": [{"rawItem": "minecraft:cod", "cookTime": 80, "cookedItem": "minecraft:cooked_cod"}]}"#,
        )
        .unwrap();

        let config = load_or_init(&path);
        assert_eq!(config.cookable_items.len(), 1);

        let reloaded: CampfireConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded.cookable_items.len(), 1);

        cleanup(&dir);
    }

    #[test]
    fn save_failure_is_reported() {
        let dir = make_test_dir("save_fail");
        // A directory path cannot be written as a file.
        let result = save(&CampfireConfig::default(), &dir);
        assert!(matches!(result, Err(StoreError::Io(_))));
        cleanup(&dir);
    }

    #[test]
    fn load_or_init_survives_unwritable_target() {
        let dir = make_test_dir("init_unwritable");
        // load_or_init on a directory path: read fails (recovered), write
        // fails (logged); the in-memory defaults still come back.
        let config = load_or_init(&dir);
        assert_eq!(config, CampfireConfig::default());
        cleanup(&dir);
    }
}
