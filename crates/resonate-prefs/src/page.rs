use std::sync::{Arc, OnceLock};

use resonate_plugin_registry::PluginRegistry;
use resonate_settings::Settings;

use crate::form::{Form, FormShuttle};
use crate::modules::{discover_module_entries, ModuleEntry};

pub const GROUP_BY_KEY: &str = "/Effects/GroupBy";
pub const MAX_PER_GROUP_KEY: &str = "/Effects/MaxPerGroup";
pub const CHECK_FOR_UPDATES_KEY: &str = "/Plugins/CheckForUpdates";
pub const RESCAN_KEY: &str = "/Plugins/Rescan";
pub const SIMD_GUI_KEY: &str = "/SSE/GUI";

pub const DEFAULT_GROUP_MODE: &str = "sortby:name";

const GROUP_MODES: &[(&str, &str)] = &[
    ("Sorted by Effect Name", "sortby:name"),
    ("Sorted by Publisher and Effect Name", "sortby:publisher:name"),
    ("Sorted by Type and Effect Name", "sortby:type:name"),
    ("Grouped by Publisher", "groupby:publisher"),
    ("Grouped by Type", "groupby:type"),
];

/// Runtime switches for the optional page sections, resolved once at
/// startup.
#[derive(Debug, Clone)]
pub struct FeatureFlags {
    /// The dedicated plugin-management UI replaces the basic scan toggles.
    pub effect_management: bool,
    /// Expose the SIMD instruction-set checkbox.
    pub simd_instruction_set: bool,
    /// Default for the max-effects-per-group field; 0 disables the limit.
    pub max_per_group: i64,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            effect_management: false,
            simd_instruction_set: false,
            max_per_group: if cfg!(target_os = "linux") { 15 } else { 0 },
        }
    }
}

/// The "Effects" preferences page.
///
/// Module toggles are discovered from the injected registry once per page
/// and cached; the installed module set does not change while the
/// preferences dialog is alive.
pub struct EffectsPage {
    registry: Arc<PluginRegistry>,
    flags: FeatureFlags,
    entries: OnceLock<Vec<ModuleEntry>>,
}

impl EffectsPage {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self::with_flags(registry, FeatureFlags::default())
    }

    pub fn with_flags(registry: Arc<PluginRegistry>, flags: FeatureFlags) -> Self {
        Self {
            registry,
            flags,
            entries: OnceLock::new(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        "Effects"
    }

    pub fn description(&self) -> &'static str {
        "Preferences for Effects"
    }

    pub fn help_page(&self) -> &'static str {
        "Effects_Preferences"
    }

    pub fn module_entries(&self) -> &[ModuleEntry] {
        self.entries
            .get_or_init(|| discover_module_entries(&self.registry))
    }

    fn populate(&self, shuttle: &mut FormShuttle<'_>) {
        shuttle.start_section("Enable Effects");
        for entry in self.module_entries() {
            shuttle.tie_checkbox(&entry.prompt, &entry.setting, true);
        }
        shuttle.end_section();

        shuttle.start_section("Effect Options");
        shuttle.tie_choice(
            "S&ort or Group:",
            GROUP_BY_KEY,
            DEFAULT_GROUP_MODE,
            GROUP_MODES,
        );
        shuttle.tie_numeric(
            "&Maximum effects per group (0 to disable):",
            MAX_PER_GROUP_KEY,
            self.flags.max_per_group,
            5,
        );
        shuttle.end_section();

        if !self.flags.effect_management {
            shuttle.start_section("Plugin Options");
            shuttle.tie_checkbox(
                "Check for updated plugins when Resonate starts",
                CHECK_FOR_UPDATES_KEY,
                true,
            );
            shuttle.tie_checkbox(
                "Rescan plugins next time Resonate is started",
                RESCAN_KEY,
                false,
            );
            shuttle.end_section();
        }

        if self.flags.simd_instruction_set {
            shuttle.start_section("Instruction Set");
            shuttle.tie_checkbox("&Use SSE/SSE2/.../AVX", SIMD_GUI_KEY, true);
            shuttle.end_section();
        }
    }

    /// Build the form, initialised from the settings store.
    pub fn open(&self, settings: &Settings) -> Form {
        let mut form = Form::default();
        let mut shuttle = FormShuttle::load(settings, &mut form);
        self.populate(&mut shuttle);
        form
    }

    /// Write every bound control back to the settings store. The control
    /// types involved admit no invalid state, so commit always succeeds.
    pub fn commit(&self, form: &mut Form, settings: &Settings) -> bool {
        let mut shuttle = FormShuttle::save(settings, form);
        self.populate(&mut shuttle);
        true
    }
}
