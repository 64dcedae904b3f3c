use std::sync::Arc;

use resonate_plugin_registry::{PluginDescriptor, PluginKind, PluginRegistry};
use resonate_prefs::{EffectsPage, FeatureFlags, GROUP_BY_KEY, MAX_PER_GROUP_KEY};
use resonate_settings::Settings;
use tempfile::tempdir;

fn installed_registry() -> Arc<PluginRegistry> {
    let mut registry = PluginRegistry::new();
    registry.register(
        PluginDescriptor::new("LADSPA", PluginKind::Module, "LADSPA Effects")
            .with_effect_family("LADSPA"),
    );
    registry.register(
        PluginDescriptor::new("LV2", PluginKind::Module, "LV2 Effects").with_effect_family("LV2"),
    );
    registry.register(
        PluginDescriptor::new("builtin", PluginKind::Module, "Builtin Tools")
            .with_vendor("Resonate Labs"),
    );
    registry.register(PluginDescriptor::new(
        "reverb",
        PluginKind::Effect,
        "Reverb",
    ));
    Arc::new(registry)
}

#[test]
fn edits_survive_commit_save_and_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let settings = Settings::open(&path).unwrap();
        let page = EffectsPage::with_flags(
            installed_registry(),
            FeatureFlags {
                effect_management: false,
                simd_instruction_set: false,
                max_per_group: 0,
            },
        );

        let mut form = page.open(&settings);
        form.set_checkbox("/Plugins/Enable/LV2", false);
        form.set_choice(GROUP_BY_KEY, "groupby:publisher");
        form.set_numeric(MAX_PER_GROUP_KEY, 12);
        assert!(page.commit(&mut form, &settings));
        settings.save().unwrap();
    }

    let settings = Settings::open(&path).unwrap();
    let page = EffectsPage::with_flags(
        installed_registry(),
        FeatureFlags {
            effect_management: false,
            simd_instruction_set: false,
            max_per_group: 0,
        },
    );
    let form = page.open(&settings);

    let enable = form.section("Enable Effects").unwrap();
    // The builtin module has no effect family, so only two toggles exist.
    assert_eq!(enable.controls.len(), 2);
    assert_eq!(enable.controls[0].key(), "/Plugins/Enable/LADSPA");
    assert_eq!(enable.controls[1].key(), "/Plugins/Enable/LV2");

    assert!(settings.bool_or("/Plugins/Enable/LADSPA", false));
    assert!(!settings.bool_or("/Plugins/Enable/LV2", true));
    assert_eq!(
        settings.str_or(GROUP_BY_KEY, "sortby:name"),
        "groupby:publisher"
    );
    assert_eq!(settings.int_or(MAX_PER_GROUP_KEY, 0), 12);
}

#[test]
fn toggle_layout_is_stable_across_pages() {
    let settings = Settings::in_memory();
    let first = EffectsPage::new(installed_registry()).open(&settings);
    let second = EffectsPage::new(installed_registry()).open(&settings);
    assert_eq!(
        first.section("Enable Effects"),
        second.section("Enable Effects")
    );
}
