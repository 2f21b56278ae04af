use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen before dismissing itself.
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, message: String, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = (next_id)();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.push(Toast { id, message, kind }));

        // Auto-dismiss; the close button can beat the timer, retain is a
        // no-op then.
        spawn(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn success(&self, message: String) {
        self.push(message, ToastKind::Success);
    }

    pub fn error(&self, message: String) {
        self.push(message, ToastKind::Error);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = Toasts { toasts, next_id };
    use_context_provider(|| ctx);

    rsx! {
        {children}
        ToastViewport { toasts: ctx.toasts }
    }
}

#[component]
fn ToastViewport(toasts: Signal<Vec<Toast>>) -> Element {
    let items = toasts();

    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast_success",
                        ToastKind::Error => "toast toast_error",
                    },
                    span { class: "toast_message", "{toast.message}" }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            let mut toasts = toasts;
                            move |_| {
                                toasts.with_mut(|items| items.retain(|t| t.id != id));
                            }
                        },
                        "×"
                    }
                }
            }
        }
    }
}
