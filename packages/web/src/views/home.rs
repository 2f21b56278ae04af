use dioxus::prelude::*;
use ui::{CouponCard, FeatureGrid, Hero, ScrollReveal};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        FeatureGrid {}
        CouponCard {}
        ScrollReveal {}
    }
}

/// Same page under a language-scoped path (/vn/, /th/, ...). The selector
/// reads the segment out of `location.pathname` itself.
#[component]
pub fn LangHome(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        Home {}
    }
}
