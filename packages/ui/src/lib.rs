//! This crate contains all shared UI for the workspace.

mod lang;
pub use lang::{
    first_path_segment, key_for_browser_tag, lang_path, resolve_initial, DetectionSignals,
    Language, LanguageCatalog,
};

mod storage;
pub use storage::PREFERENCE_KEY;

mod js;

mod selector;
pub use selector::{set_lang, use_catalog, use_lang, LangProvider, LanguageSwitcher};

mod content;
pub use content::LangContent;

mod copy;
pub use copy::{copy_for, Feature, SiteCopy, SITE_COPY};

mod hero;
pub use hero::Hero;

mod features;
pub use features::FeatureGrid;

mod coupon;
pub use coupon::{CouponCard, COUPON_CODE};

mod reveal;
pub use reveal::ScrollReveal;

mod scroll;
pub use scroll::AnchorLink;

mod navbar;
pub use navbar::Navbar;

mod theme;
pub use theme::SiteTheme;

mod toast;
pub use toast::{use_toasts, Toast, ToastKind, ToastProvider, Toasts};
