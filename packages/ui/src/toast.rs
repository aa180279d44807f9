//! Transient notifications ("Link created successfully!", failure messages).
//!
//! A `Signal<Toasts>` lives in context; flows push entries through
//! [`push_toast`] and [`ToastProvider`] renders the stack, dropping each
//! entry after a few seconds. Presentation is deliberately minimal.

use dioxus::prelude::*;

const DISMISS_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a transient notification; it dismisses itself.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = {
        let mut state = toasts.write();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    let mut toasts = *toasts;
    spawn(async move {
        sleep_secs(DISMISS_SECS).await;
        toasts.write().entries.retain(|t| t.id != id);
    });
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

/// Provider component: wraps the app and renders the toast stack.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        div {
            class: "toast-host",
            for toast in toasts.read().entries.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
