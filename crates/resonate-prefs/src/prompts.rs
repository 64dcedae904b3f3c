struct CuratedPrompt {
    family: &'static str,
    prompt: &'static str,
}

// Effect families are discovered from the registry rather than hard-coded,
// but the well-known ones get curated labels so their menu accelerators stay
// distinct. A family may appear here and never be installed, or be installed
// and not appear here; neither is an error.
const CURATED_PROMPTS: &[CuratedPrompt] = &[
    CuratedPrompt {
        family: "AudioUnit",
        prompt: "Audio Unit",
    },
    CuratedPrompt {
        family: "LADSPA",
        prompt: "&LADSPA",
    },
    CuratedPrompt {
        family: "LV2",
        prompt: "LV&2",
    },
    CuratedPrompt {
        family: "Nyquist",
        prompt: "N&yquist",
    },
    CuratedPrompt {
        family: "Vamp",
        prompt: "&Vamp",
    },
    CuratedPrompt {
        family: "VST",
        prompt: "V&ST",
    },
];

/// The curated display label for a well-known effect family, if any.
pub fn curated_prompt(family: &str) -> Option<&'static str> {
    CURATED_PROMPTS
        .iter()
        .find(|entry| entry.family == family)
        .map(|entry| entry.prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_families_resolve() {
        assert_eq!(curated_prompt("LADSPA"), Some("&LADSPA"));
        assert_eq!(curated_prompt("VST"), Some("V&ST"));
        assert_eq!(curated_prompt("LV2"), Some("LV&2"));
    }

    #[test]
    fn unknown_families_do_not() {
        assert_eq!(curated_prompt("MyCo"), None);
        assert_eq!(curated_prompt(""), None);
    }
}
