use dioxus::prelude::*;
use std::time::Duration;

/// How long a toast stays up before it dismisses itself
const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notification stack shared across the app
#[derive(Clone)]
pub struct ToastContext {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut next_id = self.next_id;
        let id = *next_id.read();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, kind, message });

        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

/// Provider component making the toast stack available throughout the app
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let ctx = ToastContext {
        toasts: use_signal(Vec::new),
        next_id: use_signal(|| 0),
    };

    use_context_provider(|| ctx.clone());

    rsx! {
        {children}
        Toaster {}
    }
}

/// Hook to access the toast stack
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
}

#[component]
pub fn Toaster() -> Element {
    let ctx = use_toasts();

    rsx! {
        div { class: "fixed top-4 right-4 z-[2000] flex flex-col gap-2",
            for toast in ctx.toasts.read().iter() {
                div {
                    key: "{toast.id}",
                    class: if toast.kind == ToastKind::Error {
                        "bg-red-600 text-white px-6 py-4 rounded-lg shadow-lg max-w-md"
                    } else {
                        "bg-gray-800 text-white px-6 py-4 rounded-lg shadow-lg max-w-md"
                    },
                    div { class: "flex items-center justify-between gap-4",
                        span { "{toast.message}" }
                        button {
                            class: "text-white hover:text-gray-200",
                            onclick: {
                                let ctx = ctx.clone();
                                let id = toast.id;
                                move |_| ctx.dismiss(id)
                            },
                            "✕"
                        }
                    }
                }
            }
        }
    }
}
