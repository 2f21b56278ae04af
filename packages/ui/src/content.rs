use dioxus::prelude::*;

/// One language's version of a page section.
///
/// Blocks are pre-rendered for every catalog language; only the one whose
/// key equals the active language carries `active` (and is shown). The
/// `data-lang` attribute is what the detection snapshot queries to decide
/// whether a resolved language actually has content on the page.
#[component]
pub fn LangContent(lang: &'static str, children: Element) -> Element {
    let active = crate::use_lang()();

    rsx! {
        div {
            class: if active == lang { "lang-content active" } else { "lang-content" },
            "data-lang": "{lang}",
            {children}
        }
    }
}
