//! Fixed catalog of UI languages.
//!
//! The catalog is compiled in and never read from or written to a settings
//! document; a document only selects a language by locale code.

use std::sync::OnceLock;

use serde::Serialize;

/// Locale selected when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A UI language LOOT ships translations for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Locale code, e.g. `"pt_BR"`.
    pub locale: String,
    /// Name of the language in that language.
    pub name: String,
    /// Font family the UI must switch to for this script, if any.
    pub font_family: Option<String>,
}

const CATALOG: [(&str, &str, Option<&str>); 18] = [
    ("en", "English", None),
    ("bg", "Български", None),
    ("cs", "Čeština", None),
    ("da", "Dansk", None),
    ("de", "Deutsch", None),
    ("es", "Español", None),
    ("fi", "Suomi", None),
    ("fr", "Français", None),
    ("it", "Italiano", None),
    ("ja", "日本語", Some("Meiryo")),
    ("ko", "한국어", Some("Malgun Gothic")),
    ("pl", "Polski", None),
    ("pt_BR", "Português do Brasil", None),
    ("pt_PT", "Português de Portugal", None),
    ("ru", "Русский", None),
    ("sv", "Svenska", None),
    ("uk_UA", "Українська", None),
    ("zh_CN", "简体中文", Some("Microsoft Yahei")),
];

/// Every supported language, in display order.
pub fn language_catalog() -> &'static [Language] {
    static LANGUAGES: OnceLock<Vec<Language>> = OnceLock::new();
    LANGUAGES.get_or_init(|| {
        CATALOG
            .iter()
            .map(|(locale, name, font_family)| Language {
                locale: locale.to_string(),
                name: name.to_string(),
                font_family: font_family.map(str::to_string),
            })
            .collect()
    })
}

/// Looks up a catalog entry by exact locale code.
pub fn find_language(locale: &str) -> Option<&'static Language> {
    language_catalog().iter().find(|l| l.locale == locale)
}
