use dioxus::prelude::*;

use crate::copy::copy_for;
use crate::scroll::AnchorLink;
use crate::selector::LanguageSwitcher;

#[component]
pub fn Navbar() -> Element {
    let active = crate::use_lang()();
    let copy = copy_for(active);

    rsx! {
        nav { class: "site_nav",
            div { class: "site_nav_inner",
                AnchorLink { target: "#hero".to_string(), class: "brand".to_string(),
                    span { class: "brand_mark" }
                    span { class: "brand_name", "Driftnote" }
                }
                div { class: "nav_links",
                    AnchorLink { target: "#features".to_string(), class: "nav_link".to_string(),
                        {copy.nav_features}
                    }
                    AnchorLink { target: "#coupon".to_string(), class: "nav_link".to_string(),
                        {copy.nav_coupon}
                    }
                    LanguageSwitcher {}
                }
            }
        }
    }
}
