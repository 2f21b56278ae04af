use dioxus::prelude::*;

/// Scroll-reveal for feature cards.
///
/// Installs one IntersectionObserver after mount. Each card starts
/// translated down and transparent, staggered by its index within its
/// grid, and is revealed the first time it enters the viewport. Reveal is
/// one-shot: the card is unobserved once shown.
#[component]
pub fn ScrollReveal() -> Element {
    use_effect(|| {
        spawn(async move {
            let _ = document::eval(REVEAL_JS).await;
        });
    });

    rsx! {}
}

const REVEAL_JS: &str = r#"(function(){
  try {
    if (!("IntersectionObserver" in window)) return "";
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (!entry.isIntersecting) return;
        entry.target.style.opacity = "1";
        entry.target.style.transform = "translateY(0)";
        observer.unobserve(entry.target);
      });
    }, { threshold: 0.1, rootMargin: "0px 0px -50px 0px" });

    document.querySelectorAll(".feature-grid").forEach(function (grid) {
      Array.prototype.forEach.call(grid.children, function (card, index) {
        card.style.opacity = "0";
        card.style.transform = "translateY(30px)";
        card.style.transition = "all 0.6s ease " + (index * 0.1) + "s";
        observer.observe(card);
      });
    });
  } catch (e) {}
  return "";
})()"#;
