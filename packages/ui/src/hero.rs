use dioxus::prelude::*;

use crate::content::LangContent;
use crate::copy::SITE_COPY;
use crate::scroll::AnchorLink;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        header { id: "hero",
            for copy in SITE_COPY.iter() {
                LangContent { key: "{copy.lang}", lang: copy.lang,
                    h1 { {copy.hero_tagline} }
                    p { class: "subtitle", {copy.hero_subtitle} }
                    div { class: "cta_row",
                        AnchorLink { target: "#coupon".to_string(), class: "btn primary".to_string(),
                            {copy.hero_cta}
                        }
                        AnchorLink { target: "#features".to_string(), class: "btn".to_string(),
                            {copy.nav_features}
                        }
                    }
                }
            }
        }
    }
}
