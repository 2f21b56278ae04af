use dioxus::prelude::*;

use crate::content::LangContent;
use crate::copy::SITE_COPY;

/// Feature-card grid, one content block per language. The cards are the
/// targets of the scroll-reveal observer (`reveal.rs`).
#[component]
pub fn FeatureGrid() -> Element {
    rsx! {
        section { id: "features",
            for copy in SITE_COPY.iter() {
                LangContent { key: "{copy.lang}", lang: copy.lang,
                    h2 { {copy.features_title} }
                    div { class: "feature-grid",
                        for feature in copy.features.iter() {
                            div { key: "{feature.title}", class: "feature-card",
                                span { class: "feature_icon", {feature.icon} }
                                h3 { {feature.title} }
                                p { {feature.body} }
                            }
                        }
                    }
                }
            }
        }
    }
}
