use resonate_settings::Settings;

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Checkbox {
        label: String,
        key: String,
        value: bool,
    },
    Choice {
        label: String,
        key: String,
        selected: String,
        labels: Vec<String>,
        codes: Vec<String>,
    },
    Numeric {
        label: String,
        key: String,
        value: i64,
        digits: u8,
    },
}

impl Control {
    pub fn key(&self) -> &str {
        match self {
            Control::Checkbox { key, .. }
            | Control::Choice { key, .. }
            | Control::Numeric { key, .. } => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Control::Checkbox { label, .. }
            | Control::Choice { label, .. }
            | Control::Numeric { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub title: String,
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    pub sections: Vec<Section>,
}

impl Form {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.sections.iter().flat_map(|section| &section.controls)
    }

    fn control_mut(&mut self, key: &str) -> Option<&mut Control> {
        self.sections
            .iter_mut()
            .flat_map(|section| &mut section.controls)
            .find(|control| control.key() == key)
    }

    /// Edit the checked state of a bound checkbox, as the UI layer would.
    pub fn set_checkbox(&mut self, key: &str, checked: bool) {
        if let Some(Control::Checkbox { value, .. }) = self.control_mut(key) {
            *value = checked;
        }
    }

    pub fn set_choice(&mut self, key: &str, code: &str) {
        if let Some(Control::Choice { selected, .. }) = self.control_mut(key) {
            *selected = code.to_owned();
        }
    }

    pub fn set_numeric(&mut self, key: &str, new_value: i64) {
        if let Some(Control::Numeric { value, .. }) = self.control_mut(key) {
            *value = new_value;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuttleMode {
    /// Build controls, initialised from the settings store.
    Load,
    /// Walk an already-built form and write each control back to its key.
    Save,
}

/// Runs one population function in either direction between a [`Form`] and
/// the settings store. In `Save` mode a cursor retraces the declaration
/// order, so load and save stay structurally identical by construction.
pub struct FormShuttle<'a> {
    mode: ShuttleMode,
    settings: &'a Settings,
    form: &'a mut Form,
    section: usize,
    control: usize,
    started: bool,
}

impl<'a> FormShuttle<'a> {
    pub fn load(settings: &'a Settings, form: &'a mut Form) -> Self {
        form.sections.clear();
        Self {
            mode: ShuttleMode::Load,
            settings,
            form,
            section: 0,
            control: 0,
            started: false,
        }
    }

    pub fn save(settings: &'a Settings, form: &'a mut Form) -> Self {
        Self {
            mode: ShuttleMode::Save,
            settings,
            form,
            section: 0,
            control: 0,
            started: false,
        }
    }

    pub fn mode(&self) -> ShuttleMode {
        self.mode
    }

    pub fn start_section(&mut self, title: &str) {
        match self.mode {
            ShuttleMode::Load => self.form.sections.push(Section {
                title: title.to_owned(),
                controls: Vec::new(),
            }),
            ShuttleMode::Save => {
                if self.started {
                    self.section += 1;
                }
                self.started = true;
                self.control = 0;
            }
        }
    }

    pub fn end_section(&mut self) {}

    pub fn tie_checkbox(&mut self, label: &str, key: &str, default: bool) {
        match self.mode {
            ShuttleMode::Load => {
                let value = self.settings.bool_or(key, default);
                self.push(Control::Checkbox {
                    label: label.to_owned(),
                    key: key.to_owned(),
                    value,
                });
            }
            ShuttleMode::Save => {
                if let Some(Control::Checkbox { value, .. }) = self.next_saved() {
                    let value = *value;
                    self.settings.set_bool(key, value);
                }
            }
        }
    }

    pub fn tie_choice(&mut self, label: &str, key: &str, default: &str, options: &[(&str, &str)]) {
        match self.mode {
            ShuttleMode::Load => {
                let stored = self.settings.str_or(key, default);
                // An unknown stored code falls back to the default option.
                let selected = if options.iter().any(|(_, code)| *code == stored) {
                    stored
                } else {
                    default.to_owned()
                };
                self.push(Control::Choice {
                    label: label.to_owned(),
                    key: key.to_owned(),
                    selected,
                    labels: options.iter().map(|(label, _)| (*label).to_owned()).collect(),
                    codes: options.iter().map(|(_, code)| (*code).to_owned()).collect(),
                });
            }
            ShuttleMode::Save => {
                if let Some(Control::Choice { selected, .. }) = self.next_saved() {
                    let selected = selected.clone();
                    self.settings.set_str(key, selected);
                }
            }
        }
    }

    pub fn tie_numeric(&mut self, label: &str, key: &str, default: i64, digits: u8) {
        match self.mode {
            ShuttleMode::Load => {
                let value = self.settings.int_or(key, default);
                self.push(Control::Numeric {
                    label: label.to_owned(),
                    key: key.to_owned(),
                    value,
                    digits,
                });
            }
            ShuttleMode::Save => {
                if let Some(Control::Numeric { value, .. }) = self.next_saved() {
                    let value = *value;
                    self.settings.set_int(key, value);
                }
            }
        }
    }

    fn push(&mut self, control: Control) {
        if let Some(section) = self.form.sections.last_mut() {
            section.controls.push(control);
        }
    }

    fn next_saved(&mut self) -> Option<&Control> {
        let control = self
            .form
            .sections
            .get(self.section)?
            .controls
            .get(self.control)?;
        self.control += 1;
        Some(control)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn populate(shuttle: &mut FormShuttle<'_>) {
        shuttle.start_section("General");
        shuttle.tie_checkbox("Enable", "/Test/Enable", true);
        shuttle.tie_numeric("Count", "/Test/Count", 4, 3);
        shuttle.end_section();
        shuttle.start_section("Modes");
        shuttle.tie_choice(
            "Mode",
            "/Test/Mode",
            "plain",
            &[("Plain", "plain"), ("Fancy", "fancy")],
        );
        shuttle.end_section();
    }

    #[test]
    fn load_applies_store_values_over_defaults() {
        let settings = Settings::in_memory();
        settings.set_bool("/Test/Enable", false);
        settings.set_str("/Test/Mode", "fancy");

        let mut form = Form::default();
        populate(&mut FormShuttle::load(&settings, &mut form));

        assert_eq!(form.sections.len(), 2);
        assert_eq!(
            form.sections[0].controls[0],
            Control::Checkbox {
                label: "Enable".into(),
                key: "/Test/Enable".into(),
                value: false,
            }
        );
        assert_eq!(
            form.sections[0].controls[1],
            Control::Numeric {
                label: "Count".into(),
                key: "/Test/Count".into(),
                value: 4,
                digits: 3,
            }
        );
        assert_eq!(
            form.sections[1].controls[0],
            Control::Choice {
                label: "Mode".into(),
                key: "/Test/Mode".into(),
                selected: "fancy".into(),
                labels: vec!["Plain".into(), "Fancy".into()],
                codes: vec!["plain".into(), "fancy".into()],
            }
        );
    }

    #[test]
    fn unknown_stored_choice_falls_back_to_default() {
        let settings = Settings::in_memory();
        settings.set_str("/Test/Mode", "bogus");

        let mut form = Form::default();
        populate(&mut FormShuttle::load(&settings, &mut form));

        let Some(Control::Choice { selected, .. }) = form.sections[1].controls.first() else {
            panic!("expected a choice control");
        };
        assert_eq!(selected, "plain");
    }

    #[test]
    fn save_writes_edited_controls_back() {
        let settings = Settings::in_memory();
        let mut form = Form::default();
        populate(&mut FormShuttle::load(&settings, &mut form));

        form.set_checkbox("/Test/Enable", false);
        form.set_numeric("/Test/Count", 9);
        form.set_choice("/Test/Mode", "fancy");
        populate(&mut FormShuttle::save(&settings, &mut form));

        assert!(!settings.bool_or("/Test/Enable", true));
        assert_eq!(settings.int_or("/Test/Count", 0), 9);
        assert_eq!(settings.str_or("/Test/Mode", "plain"), "fancy");
    }

    #[test]
    fn save_over_empty_form_is_a_noop() {
        let settings = Settings::in_memory();
        let mut form = Form::default();
        populate(&mut FormShuttle::save(&settings, &mut form));
        assert!(!settings.contains("/Test/Enable"));
    }
}
