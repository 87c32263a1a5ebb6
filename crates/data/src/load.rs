use crate::schema::{multiplier_defs, MultiplierDef, MULTIPLIERS_FILE, RECIPES_FILE};
use anyhow::{bail, Context};
use cookpot_core::{PayTables, Recipe, SlotConfig};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_slot_config(dir: &Path) -> anyhow::Result<SlotConfig> {
    let defs: Vec<MultiplierDef> = load_json(dir.join(MULTIPLIERS_FILE))?;
    let recipes: Vec<Recipe> = load_json(dir.join(RECIPES_FILE))?;

    let mut seen = HashSet::new();
    for def in &defs {
        if !seen.insert(def.symbol) {
            bail!(
                "symbol {} listed twice in {}",
                def.symbol.id(),
                dir.join(MULTIPLIERS_FILE).display()
            );
        }
    }
    let multipliers = defs.iter().flat_map(|def| def.rules()).collect();
    let config = SlotConfig {
        multipliers,
        recipes,
    };
    debug!(
        rules = config.multipliers.len(),
        recipes = config.recipes.len(),
        dir = %dir.display(),
        "slot config loaded"
    );
    Ok(config)
}

pub fn load_pay_tables(dir: &Path) -> anyhow::Result<PayTables> {
    let config = load_slot_config(dir)?;
    PayTables::from_config(&config).with_context(|| format!("validate {}", dir.display()))
}

/// Writes `config` in the assets layout, creating `dir` if needed.
pub fn write_slot_config(dir: &Path, config: &SlotConfig) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    write_json(dir.join(MULTIPLIERS_FILE), &multiplier_defs(config))?;
    write_json(dir.join(RECIPES_FILE), &config.recipes)?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

fn write_json<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> anyhow::Result<()> {
    let path = path.as_ref();
    let raw = serde_json::to_string_pretty(value).context("serialize json")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
