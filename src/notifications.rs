use dioxus::prelude::*;

pub const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tone: ToastTone,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, title: &str, description: &str, tone: ToastTone) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
            tone,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn push(&self, title: &str, description: &str, tone: ToastTone) {
        let mut queue = self.queue;
        let id = queue.write().push(title, description, tone);
        tracing::debug!("toast: {title}");
        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            queue.write().dismiss(id);
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(title, description, ToastTone::Success);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(title, description, ToastTone::Error);
    }
}

pub fn use_toaster_provider() -> Toaster {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toaster { queue })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> Element {
    let toaster = use_toaster();
    let mut queue = toaster.queue;
    let toasts = queue.read().items().to_vec();
    rsx! {
        div { class: "toast-viewport", role: "status", aria_live: "polite",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.tone {
                        ToastTone::Success => "toast success",
                        ToastTone::Error => "toast error",
                    },
                    div { class: "toast-copy",
                        p { class: "toast-title", "{toast.title}" }
                        p { class: "toast-description", "{toast.description}" }
                    }
                    button {
                        r#type: "button",
                        class: "toast-close",
                        aria_label: "Dismiss notification",
                        onclick: move |_| queue.write().dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn queue_assigns_ids_and_dismisses_by_id() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Message sent!", "Thanks", ToastTone::Success);
        let second = queue.push("Failed", "Try again", ToastTone::Error);
        assert_ne!(first, second);
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].title, "Failed");
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }
}
