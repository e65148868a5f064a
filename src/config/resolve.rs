use crate::config::{
    model::{ConfigPatch, EffectConfig},
    preset::PresetTable,
};

/// Merge `base`, the named preset and per-instance `overrides` into one config.
///
/// For every field: `overrides` if set, else the preset value if set, else `base`.
/// Unknown preset names resolve exactly like the table's default preset. Pure: equal
/// inputs always produce structurally equal output.
pub fn resolve(
    base: &EffectConfig,
    preset_name: &str,
    overrides: &ConfigPatch,
    table: &PresetTable,
) -> EffectConfig {
    let (_, preset) = table.lookup(preset_name);
    overrides.over(&preset.over(base))
}

/// A base config bound to one call site's preset table.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigResolver {
    base: EffectConfig,
    table: PresetTable,
}

impl ConfigResolver {
    /// Resolver over an explicit base and table.
    pub fn new(base: EffectConfig, table: PresetTable) -> Self {
        Self { base, table }
    }

    /// Resolver with [`EffectConfig::base`] and [`PresetTable::glass`].
    pub fn glass() -> Self {
        Self::new(EffectConfig::base(), PresetTable::glass())
    }

    /// Resolver with [`EffectConfig::base`] and [`PresetTable::navbar`].
    pub fn navbar() -> Self {
        Self::new(EffectConfig::base(), PresetTable::navbar())
    }

    /// See [`resolve`].
    pub fn resolve(&self, preset_name: &str, overrides: &ConfigPatch) -> EffectConfig {
        resolve(&self.base, preset_name, overrides, &self.table)
    }

    /// Name a lookup of `preset_name` actually lands on.
    pub fn canonical_preset<'a>(&'a self, preset_name: &str) -> &'a str {
        self.table.lookup(preset_name).0
    }

    /// Base defaults.
    pub fn base(&self) -> &EffectConfig {
        &self.base
    }

    /// Preset table.
    pub fn table(&self) -> &PresetTable {
        &self.table
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::glass()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/resolve.rs"]
mod tests;
