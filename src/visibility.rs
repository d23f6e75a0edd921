use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: "0px",
            once: false,
        }
    }
}

impl VisibilityOptions {
    pub fn once() -> Self {
        Self {
            once: true,
            ..Self::default()
        }
    }

    /// Reveals slightly before the element is fully in view.
    pub fn early_once() -> Self {
        Self {
            root_margin: "0px 0px -10% 0px",
            once: true,
            ..Self::default()
        }
    }
}

/// What the observer should do after an intersection event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveDirective {
    Continue,
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTracker {
    options: VisibilityOptions,
    visible: bool,
    observing: bool,
}

impl VisibilityTracker {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            visible: false,
            observing: true,
        }
    }

    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn record(&mut self, intersecting: bool) -> ObserveDirective {
        if !self.observing {
            return ObserveDirective::Stop;
        }
        if intersecting {
            self.visible = true;
            if self.options.once {
                self.observing = false;
                return ObserveDirective::Stop;
            }
        } else if !self.options.once {
            self.visible = false;
        }
        ObserveDirective::Continue
    }

    /// Without an observer API the content is shown and never hidden again.
    pub fn mark_unsupported(&mut self) {
        self.visible = true;
        self.observing = false;
    }

    pub fn detach(&mut self) {
        self.observing = false;
    }
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    target: web_sys::Element,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// Visibility signal bound to one mounted element.
#[derive(Clone, Copy)]
pub struct Visibility {
    tracker: Signal<VisibilityTracker>,
    #[cfg(target_arch = "wasm32")]
    handle: Signal<Option<ObserverHandle>>,
}

impl Visibility {
    pub fn visible(&self) -> bool {
        self.tracker.read().is_visible()
    }

    /// `onmounted` handler for the element to watch.
    pub fn attach(&self, event: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            use dioxus::web::WebEventExt;
            use wasm_bindgen::JsCast;

            let element = event.data.as_ref().as_web_event();
            if let Ok(node) = element.dyn_into::<web_sys::Element>() {
                self.observe(node);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
            let mut tracker = self.tracker;
            tracker.write().mark_unsupported();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn observe(&self, target: web_sys::Element) {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let mut tracker = self.tracker;
        let mut handle = self.handle;
        if handle.read().is_some() || !tracker.read().is_observing() {
            return;
        }
        let supported = web_sys::window()
            .map(|window| {
                js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !supported {
            tracing::warn!("visibility: IntersectionObserver unsupported, revealing immediately");
            tracker.write().mark_unsupported();
            return;
        }

        let options = tracker.read().options();
        let closure = Rc::new(Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let directive = tracker.write().record(entry.is_intersecting());
                    if directive == ObserveDirective::Stop {
                        observer.unobserve(&entry.target());
                        tracing::debug!("visibility: stopped observing after first reveal");
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().as_ref().unchecked_ref(),
            &init,
        ) else {
            tracing::warn!("visibility: observer construction failed, revealing immediately");
            tracker.write().mark_unsupported();
            return;
        };
        observer.observe(&target);
        tracing::debug!("visibility: observing element");
        handle.set(Some(ObserverHandle {
            observer,
            target,
            _closure: closure,
        }));
    }
}

pub fn use_visibility(options: VisibilityOptions) -> Visibility {
    let tracker = use_signal(|| VisibilityTracker::new(options));
    #[cfg(target_arch = "wasm32")]
    let handle = use_signal(|| None::<ObserverHandle>);

    #[cfg(target_arch = "wasm32")]
    {
        let mut tracker = tracker;
        use_drop(move || {
            if let Some(handle) = handle.read().as_ref() {
                handle.observer.unobserve(&handle.target);
                handle.observer.disconnect();
            }
            tracker.write().detach();
        });
    }

    Visibility {
        tracker,
        #[cfg(target_arch = "wasm32")]
        handle,
    }
}

/// Shared class switch for fade-up reveals.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal is-visible"
    } else {
        "reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden_and_observing() {
        let tracker = VisibilityTracker::new(VisibilityOptions::default());
        assert!(!tracker.is_visible());
        assert!(tracker.is_observing());
        assert_eq!(tracker.options().threshold, 0.1);
        assert_eq!(tracker.options().root_margin, "0px");
    }

    #[test]
    fn once_flag_never_resets() {
        let mut tracker = VisibilityTracker::new(VisibilityOptions::once());
        assert_eq!(tracker.record(false), ObserveDirective::Continue);
        assert!(!tracker.is_visible());

        assert_eq!(tracker.record(true), ObserveDirective::Stop);
        assert!(tracker.is_visible());
        assert!(!tracker.is_observing());

        for intersecting in [false, true, false, false] {
            assert_eq!(tracker.record(intersecting), ObserveDirective::Stop);
            assert!(tracker.is_visible());
        }
    }

    #[test]
    fn repeating_flag_follows_the_viewport() {
        let mut tracker = VisibilityTracker::new(VisibilityOptions::default());
        tracker.record(true);
        assert!(tracker.is_visible());
        tracker.record(false);
        assert!(!tracker.is_visible());
        tracker.record(true);
        assert!(tracker.is_visible());
        assert!(tracker.is_observing());
    }

    #[test]
    fn unsupported_observer_shows_content() {
        let mut tracker = VisibilityTracker::new(VisibilityOptions::default());
        tracker.mark_unsupported();
        assert!(tracker.is_visible());
        tracker.record(false);
        assert!(tracker.is_visible());
    }

    #[test]
    fn detached_tracker_ignores_events() {
        let mut tracker = VisibilityTracker::new(VisibilityOptions::default());
        tracker.detach();
        assert_eq!(tracker.record(true), ObserveDirective::Stop);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn early_reveal_uses_negative_bottom_margin() {
        let options = VisibilityOptions::early_once();
        assert!(options.once);
        assert_eq!(options.root_margin, "0px 0px -10% 0px");
    }
}
