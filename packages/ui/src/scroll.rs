use dioxus::prelude::*;

use crate::js::js_escape;

/// In-page link with smooth scrolling.
///
/// Suppresses the default jump and scrolls to the target element instead;
/// does nothing when no element matches the fragment.
#[component]
pub fn AnchorLink(target: String, class: Option<String>, children: Element) -> Element {
    let href = target.clone();

    rsx! {
        a {
            class: class.unwrap_or_default(),
            href: "{href}",
            onclick: move |evt| {
                evt.prevent_default();
                let js = smooth_scroll_js(&target);
                spawn(async move {
                    let _ = document::eval(&js).await;
                });
            },
            {children}
        }
    }
}

fn smooth_scroll_js(target: &str) -> String {
    format!(
        r#"(function(){{
  try {{
    var el = document.querySelector("{target}");
    if (el) el.scrollIntoView({{ behavior: "smooth", block: "start" }});
  }} catch (e) {{}}
  return "";
}})()"#,
        target = js_escape(target),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_js_targets_the_fragment() {
        let js = smooth_scroll_js("#features");
        assert!(js.contains(r##"document.querySelector("#features")"##));
        assert!(js.contains(r#"behavior: "smooth""#));
    }

    #[test]
    fn scroll_js_escapes_hostile_selectors() {
        let js = smooth_scroll_js(r##"#a"); alert(1); ("##);
        assert!(!js.contains(r##"querySelector("#a")"##));
        assert!(js.contains(r#"\""#));
    }
}
