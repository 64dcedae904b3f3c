use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum PluginKind {
    /// A provider that hosts one effect family (a plugin API standard).
    Module,
    Effect,
    Instrument,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginDescriptor {
    pub id: String,
    pub kind: PluginKind,
    /// The plugin's own display label, as reported by the plugin itself.
    pub name: String,
    pub vendor: Option<String>,
    /// Set on module providers; empty or absent means the module carries no
    /// separate enable toggle.
    pub effect_family: Option<String>,
    pub path: Option<String>,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>, kind: PluginKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            vendor: None,
            effect_family: None,
            path: None,
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_effect_family(mut self, family: impl Into<String>) -> Self {
        self.effect_family = Some(family.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
