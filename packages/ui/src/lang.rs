//! Language catalog and locale detection.
//!
//! Everything here is plain data and pure functions so the detection
//! cascade can be unit tested without a browser. DOM side effects live in
//! `selector.rs`.

/// One supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Short key used in storage, URLs, and `data-lang` attributes.
    pub key: &'static str,
    /// Name shown in the switcher, written in the language itself.
    pub name: &'static str,
    /// Locale tag for `og:locale` and `<html lang>`, e.g. "vi_VN".
    pub locale: &'static str,
    /// Decorative flag glyph for the switcher.
    pub flag: &'static str,
}

impl Language {
    /// Language portion of the locale tag ("vi_VN" -> "vi").
    pub fn lang_subtag(&self) -> &'static str {
        self.locale.split('_').next().unwrap_or(self.locale)
    }
}

static LANGUAGES: [Language; 10] = [
    Language { key: "en", name: "English", locale: "en_US", flag: "\u{1F1FA}\u{1F1F8}" },
    Language { key: "vn", name: "Tiếng Việt", locale: "vi_VN", flag: "\u{1F1FB}\u{1F1F3}" },
    Language { key: "zh", name: "中文", locale: "zh_CN", flag: "\u{1F1E8}\u{1F1F3}" },
    Language { key: "th", name: "ไทย", locale: "th_TH", flag: "\u{1F1F9}\u{1F1ED}" },
    Language { key: "id", name: "Bahasa Indonesia", locale: "id_ID", flag: "\u{1F1EE}\u{1F1E9}" },
    Language { key: "ru", name: "Русский", locale: "ru_RU", flag: "\u{1F1F7}\u{1F1FA}" },
    Language { key: "es", name: "Español", locale: "es_ES", flag: "\u{1F1EA}\u{1F1F8}" },
    Language { key: "pt", name: "Português", locale: "pt_BR", flag: "\u{1F1E7}\u{1F1F7}" },
    Language { key: "hi", name: "हिन्दी", locale: "hi_IN", flag: "\u{1F1EE}\u{1F1F3}" },
    Language { key: "ko", name: "한국어", locale: "ko_KR", flag: "\u{1F1F0}\u{1F1F7}" },
];

/// Fixed set of supported languages plus the fallback key.
///
/// Constructed once at startup and handed to `LangProvider`; components
/// read it back out of context instead of reaching for module globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: &'static [Language],
    default_key: &'static str,
}

impl LanguageCatalog {
    pub const fn new(languages: &'static [Language], default_key: &'static str) -> Self {
        Self {
            languages,
            default_key,
        }
    }

    /// The ten languages the site ships with, defaulting to English.
    pub fn site_default() -> Self {
        Self::new(&LANGUAGES, "en")
    }

    pub fn languages(&self) -> &'static [Language] {
        self.languages
    }

    pub fn default_key(&self) -> &'static str {
        self.default_key
    }

    pub fn get(&self, key: &str) -> Option<&'static Language> {
        self.languages.iter().find(|lang| lang.key == key)
    }

    /// Borrow-free form of `get` for threading keys through signals.
    pub fn lookup_key(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|lang| lang.key)
    }

    /// Map any input to a valid catalog key, substituting the default for
    /// anything unknown. Never fails.
    pub fn normalize(&self, key: &str) -> &'static str {
        self.lookup_key(key).unwrap_or(self.default_key)
    }
}

/// Environment snapshot taken once at page load, before detection runs.
#[derive(Debug, Default, Clone)]
pub struct DetectionSignals<'a> {
    /// Stored preference, if any ("preferredLang" in localStorage).
    pub stored: Option<&'a str>,
    /// `location.pathname` as reported by the browser.
    pub path: Option<&'a str>,
    /// `navigator.language` as reported by the browser.
    pub browser: Option<&'a str>,
}

/// First segment of a URL path: "/th/pricing" -> Some("th").
pub fn first_path_segment(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

/// Path the page should show for a language: "/" for the default key,
/// "/<key>/" for everything else.
pub fn lang_path(catalog: &LanguageCatalog, key: &str) -> String {
    let key = catalog.normalize(key);
    if key == catalog.default_key() {
        "/".to_string()
    } else {
        format!("/{key}/")
    }
}

fn tag_to_key(tag: &str) -> Option<&'static str> {
    Some(match tag {
        "en" | "en-us" | "en-gb" | "en-au" | "en-sg" => "en",
        "vi" | "vi-vn" => "vn",
        "zh" | "zh-cn" | "zh-sg" | "zh-tw" | "zh-hk" => "zh",
        "th" | "th-th" => "th",
        // "in" is the legacy browser tag for Indonesian.
        "id" | "in" | "id-id" => "id",
        "ru" | "ru-ru" | "ru-by" | "ru-kz" => "ru",
        "es" | "es-es" | "es-mx" | "es-ar" | "es-419" => "es",
        "pt" | "pt-br" | "pt-pt" => "pt",
        "hi" | "hi-in" => "hi",
        "ko" | "ko-kr" => "ko",
        _ => return None,
    })
}

/// Map a browser language tag to a catalog key.
///
/// Lowercases the tag, tries the exact tag first, then just the primary
/// subtag ("vi-VN" -> "vi" -> "vn").
pub fn key_for_browser_tag(catalog: &LanguageCatalog, tag: &str) -> Option<&'static str> {
    let tag = tag.trim().to_ascii_lowercase();
    let key = tag_to_key(&tag)
        .or_else(|| tag_to_key(tag.split('-').next().unwrap_or_default()))?;
    catalog.lookup_key(key)
}

/// Resolve the language to show at page load.
///
/// Strict priority: stored preference, then URL path segment, then browser
/// language, then the default. Whatever wins is still overridden to the
/// default if the page carries no content block for it.
pub fn resolve_initial(
    catalog: &LanguageCatalog,
    signals: &DetectionSignals<'_>,
    has_content: impl Fn(&str) -> bool,
) -> &'static str {
    let key = signals
        .stored
        .and_then(|stored| catalog.lookup_key(stored))
        .or_else(|| {
            signals
                .path
                .and_then(first_path_segment)
                .and_then(|segment| catalog.lookup_key(segment))
        })
        .or_else(|| {
            signals
                .browser
                .and_then(|tag| key_for_browser_tag(catalog, tag))
        })
        .unwrap_or(catalog.default_key());

    if has_content(key) {
        key
    } else {
        catalog.default_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LanguageCatalog {
        LanguageCatalog::site_default()
    }

    fn all_content(_key: &str) -> bool {
        true
    }

    #[test]
    fn normalize_is_identity_on_catalog_keys() {
        let catalog = catalog();
        for lang in catalog.languages() {
            assert_eq!(catalog.normalize(lang.key), lang.key);
        }
    }

    #[test]
    fn normalize_substitutes_default_for_unknown_keys() {
        let catalog = catalog();
        assert_eq!(catalog.normalize("klingon"), "en");
        assert_eq!(catalog.normalize(""), "en");
        // Keys are case-sensitive; "EN" is not a catalog key.
        assert_eq!(catalog.normalize("EN"), "en");
    }

    #[test]
    fn stored_preference_wins_over_path_and_browser() {
        let signals = DetectionSignals {
            stored: Some("zh"),
            path: Some("/ru/"),
            browser: Some("es"),
        };
        assert_eq!(resolve_initial(&catalog(), &signals, all_content), "zh");
    }

    #[test]
    fn path_segment_wins_when_nothing_is_stored() {
        let signals = DetectionSignals {
            stored: None,
            path: Some("/th/"),
            browser: Some("es"),
        };
        assert_eq!(resolve_initial(&catalog(), &signals, all_content), "th");
    }

    #[test]
    fn unknown_stored_value_falls_through_to_path() {
        let signals = DetectionSignals {
            stored: Some("tlh"),
            path: Some("/ko/"),
            browser: None,
        };
        assert_eq!(resolve_initial(&catalog(), &signals, all_content), "ko");
    }

    #[test]
    fn browser_tag_wins_when_storage_and_path_miss() {
        let signals = DetectionSignals {
            stored: None,
            path: Some("/pricing"),
            browser: Some("vi-VN"),
        };
        assert_eq!(resolve_initial(&catalog(), &signals, all_content), "vn");
    }

    #[test]
    fn everything_empty_resolves_to_default() {
        let signals = DetectionSignals::default();
        assert_eq!(resolve_initial(&catalog(), &signals, all_content), "en");
    }

    #[test]
    fn missing_content_block_forces_default() {
        let signals = DetectionSignals {
            stored: Some("hi"),
            path: None,
            browser: None,
        };
        let resolved = resolve_initial(&catalog(), &signals, |key| key != "hi");
        assert_eq!(resolved, "en");
    }

    #[test]
    fn browser_tag_matching_tries_exact_then_primary_subtag() {
        let catalog = catalog();
        assert_eq!(key_for_browser_tag(&catalog, "vi-VN"), Some("vn"));
        assert_eq!(key_for_browser_tag(&catalog, "ZH-TW"), Some("zh"));
        assert_eq!(key_for_browser_tag(&catalog, "pt-AO"), Some("pt"));
        assert_eq!(key_for_browser_tag(&catalog, "es-CL"), Some("es"));
        assert_eq!(key_for_browser_tag(&catalog, "fr-FR"), None);
        assert_eq!(key_for_browser_tag(&catalog, ""), None);
    }

    #[test]
    fn first_path_segment_skips_leading_and_doubled_slashes() {
        assert_eq!(first_path_segment("/th/"), Some("th"));
        assert_eq!(first_path_segment("//vn"), Some("vn"));
        assert_eq!(first_path_segment("/"), None);
        assert_eq!(first_path_segment(""), None);
        assert_eq!(first_path_segment("/pricing/th"), Some("pricing"));
    }

    #[test]
    fn lang_path_is_root_for_default_and_scoped_otherwise() {
        let catalog = catalog();
        assert_eq!(lang_path(&catalog, "en"), "/");
        assert_eq!(lang_path(&catalog, "vn"), "/vn/");
        assert_eq!(lang_path(&catalog, "ko"), "/ko/");
        // Unknown keys normalize to the default before the path is built.
        assert_eq!(lang_path(&catalog, "klingon"), "/");
    }

    #[test]
    fn catalog_keys_are_unique() {
        let catalog = catalog();
        for (i, a) in catalog.languages().iter().enumerate() {
            for b in &catalog.languages()[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn lang_subtag_strips_region() {
        let catalog = catalog();
        assert_eq!(catalog.get("vn").unwrap().lang_subtag(), "vi");
        assert_eq!(catalog.get("en").unwrap().lang_subtag(), "en");
    }
}
