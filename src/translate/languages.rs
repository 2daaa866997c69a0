use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered by the page. `auto` is only meaningful as a source.
pub const LANGUAGES: &[Language] = &[
    Language { code: "auto", name: "Auto-detect" },
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "pl", name: "Polish" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "sv", name: "Swedish" },
    Language { code: "da", name: "Danish" },
    Language { code: "no", name: "Norwegian" },
    Language { code: "fi", name: "Finnish" },
    Language { code: "cs", name: "Czech" },
];

/// Display name for a code; unknown codes are returned unchanged.
pub fn language_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
        .map(|lang| lang.name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_names() {
        assert_eq!(language_name("fr"), "French");
        assert_eq!(language_name("ZH"), "Chinese");
        assert_eq!(language_name("auto"), "Auto-detect");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(language_name("tlh"), "tlh");
        assert_eq!(language_name("Brazilian Portuguese"), "Brazilian Portuguese");
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            assert!(LANGUAGES[i + 1..].iter().all(|b| b.code != a.code), "duplicate {}", a.code);
        }
    }
}
