//! Small wrappers over `web_sys` for listeners and layout reads.

use komodo::scroll::SectionGeometry;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, ScrollBehavior, ScrollToOptions};

/// Event listener that is removed from its target when dropped.
///
/// Components keep guards in a `StoredValue`, so the listener lives exactly
/// as long as the owning component (or until the guard is replaced).
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    /// Listens on `window`. Non-passive listeners may call `prevent_default`.
    pub fn window(
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let Some(window) = web_sys::window() else {
            warn!(event, "no window; listener not attached");
            return None;
        };
        Self::attach(window.into(), event, passive, handler)
    }

    pub fn attach(
        target: EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => {
                debug!(event, passive, "listener attached");
                Some(Self {
                    target,
                    event,
                    callback,
                })
            }
            Err(err) => {
                warn!(event, ?err, "failed to attach listener");
                None
            }
        }
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => debug!(event = self.event, "listener detached"),
            Err(err) => warn!(event = self.event, ?err, "failed to detach listener"),
        }
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

/// Bounding-rect geometry of `element` relative to the viewport.
pub fn section_geometry(element: &Element) -> Option<SectionGeometry> {
    let rect = element.get_bounding_client_rect();
    Some(SectionGeometry::new(rect.top(), rect.height(), viewport_height()?))
}

/// Smooth-scrolls the page to absolute offset `y`.
pub fn scroll_page_to(y: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(y);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
