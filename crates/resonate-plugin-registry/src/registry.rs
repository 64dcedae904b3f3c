use crate::{PluginDescriptor, PluginKind};

/// Settings subtree holding the per-plugin enable flags.
pub const ENABLE_SETTING_ROOT: &str = "/Plugins/Enable/";

/// Flat collection of installed plugin descriptors.
///
/// Registration order is whatever order providers announced themselves in;
/// callers must not rely on it.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: PluginDescriptor) {
        log::debug!("registering plugin {} ({:?})", descriptor.id, descriptor.kind);
        self.plugins.push(descriptor);
    }

    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    pub fn plugins_of(&self, kind: PluginKind) -> impl Iterator<Item = &PluginDescriptor> {
        self.plugins.iter().filter(move |plugin| plugin.kind == kind)
    }

    /// The settings key controlling whether this plugin's effects are
    /// enabled. The key is computed from the plugin's identity; consumers
    /// treat it as opaque.
    pub fn enabled_setting_path(&self, descriptor: &PluginDescriptor) -> String {
        format!("{ENABLE_SETTING_ROOT}{}", descriptor.id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
