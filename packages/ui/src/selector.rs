//! Language selector: detection at load, switching on click.
//!
//! `LangProvider` owns the active-language signal. Detection runs once
//! after mount: one `document::eval` snapshots the URL path, the browser
//! language, and which content blocks the page actually carries, then the
//! pure cascade in `lang.rs` picks the winner and `apply_to` pushes it
//! into the DOM. User clicks go through the same `apply_to` path.

use dioxus::prelude::*;

use crate::js::js_escape;
use crate::lang::{lang_path, resolve_initial, DetectionSignals, Language, LanguageCatalog};
use crate::storage;

const SNAPSHOT_JS: &str = r#"(function(){
  var present = [];
  try {
    document.querySelectorAll(".lang-content[data-lang]").forEach(function (el) {
      var key = el.getAttribute("data-lang");
      if (key && present.indexOf(key) < 0) present.push(key);
    });
  } catch (e) {}
  var path = "";
  try { path = window.location.pathname || ""; } catch (e) {}
  var browser = "";
  try { browser = navigator.language || ""; } catch (e) {}
  return { path: path, browser: browser, present: present };
})()"#;

/// Provide the catalog and the active-language signal to the tree, then
/// resolve the initial language once the page is mounted.
#[component]
pub fn LangProvider(children: Element) -> Element {
    let catalog = use_context_provider(LanguageCatalog::site_default);
    let active = use_signal(|| catalog.default_key());
    use_context_provider(|| active);

    // Runs after mount so the content blocks are queryable.
    use_effect(move || {
        spawn(async move {
            let snapshot = document::eval(SNAPSHOT_JS).await.ok();
            let path = snapshot
                .as_ref()
                .and_then(|v| v.get("path"))
                .and_then(|v| v.as_str())
                .map(str::to_string);
            let browser = snapshot
                .as_ref()
                .and_then(|v| v.get("browser"))
                .and_then(|v| v.as_str())
                .map(str::to_string);
            let present: Vec<String> = snapshot
                .as_ref()
                .and_then(|v| v.get("present"))
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();

            let stored = storage::read_preference();
            let signals = DetectionSignals {
                stored: stored.as_deref(),
                path: path.as_deref(),
                browser: browser.as_deref(),
            };
            let resolved = resolve_initial(&catalog, &signals, |key| {
                present.iter().any(|block| block == key)
            });
            apply_to(catalog, active, resolved);
        });
    });

    rsx! {
        {children}
    }
}

/// The active-language signal. Always holds a catalog key.
pub fn use_lang() -> Signal<&'static str> {
    if let Some(sig) = try_use_context::<Signal<&'static str>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing LangProvider context, using local default signal");
    use_signal(|| LanguageCatalog::site_default().default_key())
}

pub fn use_catalog() -> LanguageCatalog {
    try_use_context::<LanguageCatalog>().unwrap_or_else(LanguageCatalog::site_default)
}

/// Switch the page to `key`. Unknown keys are normalized to the default
/// first, so this never fails and never leaves a half-applied state.
pub fn set_lang(key: &str) {
    let catalog = use_catalog();
    let active = use_lang();
    apply_to(catalog, active, key);
}

fn apply_to(catalog: LanguageCatalog, mut active: Signal<&'static str>, key: &str) {
    let key = catalog.normalize(key);
    active.set(key);
    storage::write_preference(key);

    if let Some(lang) = catalog.get(key) {
        let js = apply_effects_js(lang, &lang_path(&catalog, key));
        spawn(async move {
            let _ = document::eval(&js).await;
        });
    }
}

/// DOM effects that live outside the component tree: `<html lang>`, the
/// `og:locale` meta (if the page has one), and the visible URL.
fn apply_effects_js(lang: &Language, path: &str) -> String {
    format!(
        r#"(function(){{
  try {{ document.documentElement.lang = "{subtag}"; }} catch (e) {{}}
  try {{
    var meta = document.querySelector('meta[property="og:locale"]');
    if (meta) meta.setAttribute("content", "{locale}");
  }} catch (e) {{}}
  try {{ history.replaceState(null, "", "{path}"); }} catch (e) {{}}
  return "";
}})()"#,
        subtag = lang.lang_subtag(),
        locale = lang.locale,
        path = js_escape(path),
    )
}

/// One button per catalog language. Exactly one carries `active` at any
/// time because the class is an equality check against the signal.
#[component]
pub fn LanguageSwitcher() -> Element {
    let catalog = use_catalog();
    let active = use_lang()();

    rsx! {
        div { class: "lang_switcher",
            for lang in catalog.languages() {
                button {
                    key: "{lang.key}",
                    class: if active == lang.key { "lang_btn active" } else { "lang_btn" },
                    "data-lang": "{lang.key}",
                    title: "{lang.name}",
                    onclick: {
                        let key = lang.key;
                        move |_| set_lang(key)
                    },
                    span { class: "lang_flag", "{lang.flag}" }
                    span { class: "lang_name", "{lang.name}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_js_carries_subtag_locale_and_path() {
        let catalog = LanguageCatalog::site_default();
        let lang = catalog.get("vn").unwrap();
        let js = apply_effects_js(lang, "/vn/");
        assert!(js.contains(r#"document.documentElement.lang = "vi""#));
        assert!(js.contains(r#"setAttribute("content", "vi_VN")"#));
        assert!(js.contains(r#"history.replaceState(null, "", "/vn/")"#));
    }

    #[test]
    fn effects_js_uses_root_path_for_default_language() {
        let catalog = LanguageCatalog::site_default();
        let lang = catalog.get("en").unwrap();
        let js = apply_effects_js(lang, &lang_path(&catalog, "en"));
        assert!(js.contains(r#"history.replaceState(null, "", "/")"#));
    }
}
