//! Click-outside dismissal for popovers.
//!
//! ARCHITECTURE
//! ============
//! A popover that closes on any outside click needs a page-level click
//! listener, but only while it is open. [`Popover`] owns that listener as a
//! [`ClickSubscription`]: showing acquires it, hiding or dropping releases it.
//! Visibility is derived from the held subscription, so a visible popover
//! always has exactly one listener and a hidden one has none.

#[cfg(test)]
#[path = "outside_click_test.rs"]
mod outside_click_test;

/// A live page-level click listener.
pub trait ClickSubscription {
    /// Detach the listener.
    fn release(self);
}

/// Something that can deliver page-level clicks.
pub trait ClickSource {
    type Subscription: ClickSubscription;

    /// Attach `on_outside_click`, called for clicks outside the popover trigger.
    fn subscribe(&self, on_outside_click: Box<dyn Fn()>) -> Self::Subscription;
}

/// Visibility state of a dismissible popover and the listener that backs it.
pub struct Popover<S: ClickSource> {
    source: S,
    subscription: Option<S::Subscription>,
}

impl<S: ClickSource> Popover<S> {
    pub fn new(source: S) -> Self {
        Self { source, subscription: None }
    }

    pub fn is_visible(&self) -> bool {
        self.subscription.is_some()
    }

    /// Show the popover. A no-op when already visible.
    pub fn show(&mut self, on_outside_click: impl Fn() + 'static) {
        if self.subscription.is_none() {
            self.subscription = Some(self.source.subscribe(Box::new(on_outside_click)));
        }
    }

    /// Hide the popover. A no-op when already hidden.
    pub fn hide(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self, on_outside_click: impl Fn() + 'static) -> bool {
        if self.is_visible() {
            self.hide();
        } else {
            self.show(on_outside_click);
        }
        self.is_visible()
    }
}

impl<S: ClickSource> Drop for Popover<S> {
    fn drop(&mut self) {
        self.hide();
    }
}

#[cfg(feature = "hydrate")]
pub use browser::WindowClicks as PageClicks;
#[cfg(not(feature = "hydrate"))]
pub use inert::InertClicks as PageClicks;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::ev;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{ClickSource, ClickSubscription};

    /// Window click listener that ignores clicks on a trigger: an element
    /// matching `trigger_selector` inside `region`.
    ///
    /// Trigger clicks are handled by the popover's own toggle, which runs
    /// before the click bubbles up to the window.
    #[derive(Clone, Copy)]
    pub struct WindowClicks {
        region: NodeRef<leptos::html::Div>,
        trigger_selector: &'static str,
    }

    impl WindowClicks {
        pub fn new(region: NodeRef<leptos::html::Div>, trigger_selector: &'static str) -> Self {
            Self { region, trigger_selector }
        }
    }

    impl ClickSubscription for WindowListenerHandle {
        fn release(self) {
            self.remove();
        }
    }

    impl ClickSource for WindowClicks {
        type Subscription = WindowListenerHandle;

        fn subscribe(&self, on_outside_click: Box<dyn Fn()>) -> Self::Subscription {
            let Self { region, trigger_selector } = *self;
            window_event_listener(ev::click, move |event: ev::MouseEvent| {
                let trigger = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest(trigger_selector).ok().flatten());
                let on_trigger = match (region.get_untracked(), trigger) {
                    (Some(region), Some(trigger)) => region.contains(Some(trigger.as_ref())),
                    _ => false,
                };
                if !on_trigger {
                    on_outside_click();
                }
            })
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod inert {
    use leptos::prelude::NodeRef;

    use super::{ClickSource, ClickSubscription};

    /// Server-side stand-in: there is no page to click on.
    #[derive(Clone, Copy)]
    pub struct InertClicks;

    impl InertClicks {
        pub fn new(_region: NodeRef<leptos::html::Div>, _trigger_selector: &'static str) -> Self {
            Self
        }
    }

    pub struct InertSubscription;

    impl ClickSubscription for InertSubscription {
        fn release(self) {}
    }

    impl ClickSource for InertClicks {
        type Subscription = InertSubscription;

        fn subscribe(&self, _on_outside_click: Box<dyn Fn()>) -> Self::Subscription {
            InertSubscription
        }
    }
}
