use resonate_plugin_registry::{PluginKind, PluginRegistry};

use crate::prompts::curated_prompt;

/// One discoverable effect-family toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Untranslated display label.
    pub prompt: String,
    /// Settings key controlling whether this family's effects are enabled.
    pub setting: String,
}

/// Collect one entry per installed module that exposes an effect family.
///
/// Modules without a family carry no separate enable toggle and are skipped.
/// Registration order is arbitrary, so the result is sorted by setting key
/// for a reproducible layout; the sort is stable, so duplicate keys keep
/// their discovery order.
pub fn discover_module_entries(registry: &PluginRegistry) -> Vec<ModuleEntry> {
    let mut entries = Vec::new();
    for plugin in registry.plugins_of(PluginKind::Module) {
        let family = match plugin.effect_family.as_deref() {
            Some(family) if !family.is_empty() => family,
            _ => continue,
        };
        let prompt = curated_prompt(family)
            .map(str::to_owned)
            .unwrap_or_else(|| plugin.name.clone());
        let setting = registry.enabled_setting_path(plugin);
        entries.push(ModuleEntry { prompt, setting });
    }
    entries.sort_by(|a, b| a.setting.cmp(&b.setting));
    log::debug!("discovered {} effect family toggles", entries.len());
    entries
}
