use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Window};

/// Window event subscription, detached when dropped.
pub struct WindowListener {
    label: &'static str,
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn attach<F>(label: &'static str, events: &'static [&'static str], callback: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let Some(window) = window() else {
            warn!("{label}: no window, listeners not attached");
            return None;
        };
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);

        for event in events {
            if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                warn!("{label}: failed to listen for {event}: {err:?}");
            }
        }
        debug!("{label}: listeners attached");

        Some(WindowListener {
            label,
            window,
            events,
            callback,
        })
    }

    pub fn fire(&self) {
        let function: &web_sys::js_sys::Function = self.callback.as_ref().unchecked_ref();
        if let Err(err) = function.call0(&JsValue::NULL) {
            warn!("{}: initial call failed: {err:?}", self.label);
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                warn!("{}: failed to remove {event} listener: {err:?}", self.label);
            }
        }
        debug!("{}: listeners removed", self.label);
    }
}
