use dioxus::prelude::*;

use crate::content::LangContent;
use crate::copy::{copy_for, SITE_COPY};
use crate::js::js_escape;
use crate::toast::use_toasts;

/// The launch coupon. A literal: the code is part of the page, not
/// fetched from anywhere.
pub const COUPON_CODE: &str = "DRIFT20";

/// Coupon section with a copy-to-clipboard button. Both outcomes of the
/// clipboard write are surfaced as toasts; the rejection is not dropped.
#[component]
pub fn CouponCard() -> Element {
    let toasts = use_toasts();
    let lang = crate::use_lang();
    let active = lang();

    let on_copy = move |_| {
        let key = lang();
        spawn(async move {
            let copy = copy_for(key);
            let result = document::eval(&copy_code_js(COUPON_CODE)).await;
            match result {
                Ok(v) if v.as_str() == Some("ok") => {
                    toasts.success(format!("{}: {COUPON_CODE}", copy.coupon_copied));
                }
                _ => toasts.error(copy.coupon_copy_failed.to_string()),
            }
        });
    };

    rsx! {
        section { id: "coupon",
            div { class: "coupon_card",
                for copy in SITE_COPY.iter() {
                    LangContent { key: "{copy.lang}", lang: copy.lang,
                        h2 { {copy.coupon_title} }
                        p { {copy.coupon_body} }
                    }
                }
                div { class: "coupon_row",
                    code { class: "coupon_code", "{COUPON_CODE}" }
                    button { class: "btn primary", onclick: on_copy,
                        {copy_for(active).coupon_button}
                    }
                }
            }
        }
    }
}

fn copy_code_js(code: &str) -> String {
    format!(
        r#"(async function(){{
  try {{
    await navigator.clipboard.writeText("{code}");
    return "ok";
  }} catch (e) {{
    return "error";
  }}
}})()"#,
        code = js_escape(code),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_js_writes_the_literal_code() {
        let js = copy_code_js("DRIFT20");
        assert!(js.contains(r#"writeText("DRIFT20")"#));
    }

    #[test]
    fn copy_js_escapes_quotes_in_the_code() {
        let js = copy_code_js(r#"A"B"#);
        assert!(js.contains(r#"writeText("A\"B")"#));
    }
}
