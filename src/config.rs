use crate::error::{ReviewError, Result};
use crate::types::config::ReviewConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "uxreview.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".uxreview/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/uxreview/config.toml";

pub fn load_config(root: &Path) -> Result<Option<ReviewConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Resolves the effective config, falling back to defaults when no layer exists.
pub fn resolve(root: &Path) -> Result<ReviewConfig> {
    let cfg = load_config(root)?.unwrap_or_default();
    cfg.validate()?;
    Ok(cfg)
}

/// Merges every config layer that exists, lowest precedence first:
/// global, then `uxreview.toml`, then `.uxreview/local.toml`.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ReviewConfig>> {
    let layers: Vec<PathBuf> = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.is_file())
        .collect();
    if layers.is_empty() {
        tracing::debug!(root = %root.display(), "no config layers found, using defaults");
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for path in &layers {
        tracing::debug!(path = %path.display(), "merging config layer");
        merge_toml(&mut merged, read_toml_value(path)?);
    }
    let cfg: ReviewConfig = merged.try_into()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ReviewError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
