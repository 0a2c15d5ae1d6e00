use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use super::controller::{ScrollState, Viewport};

/// The browser window as a [`Viewport`].
#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn anchor_offset(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        // Bounding rect is relative to the viewport, shift it into document space
        Some(element.get_bounding_client_rect().top() + self.scroll_offset())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Something that can deliver `scroll` notifications to a handler.
pub trait ScrollSource {
    /// Registration handle, needed again to detach.
    type Listener;
    type Error: std::fmt::Debug;

    fn add_scroll_listener(&self, handler: Box<dyn FnMut()>) -> Result<Self::Listener, Self::Error>;

    fn remove_scroll_listener(&self, listener: &Self::Listener) -> Result<(), Self::Error>;
}

impl ScrollSource for Window {
    type Listener = Closure<dyn FnMut()>;
    type Error = JsValue;

    fn add_scroll_listener(&self, handler: Box<dyn FnMut()>) -> Result<Self::Listener, JsValue> {
        let callback = Closure::wrap(handler);
        self.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(callback)
    }

    fn remove_scroll_listener(&self, listener: &Self::Listener) -> Result<(), JsValue> {
        self.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
    }
}

/// A `scroll` listener that lives exactly as long as this value. Dropping it
/// detaches the handler.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    listener: S::Listener,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn attach(source: S, handler: impl FnMut() + 'static) -> Option<Self> {
        match source.add_scroll_listener(Box::new(handler)) {
            Ok(listener) => Some(Self { source, listener }),
            Err(err) => {
                warn!("could not attach scroll listener: {:?}", err);
                None
            }
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Err(err) = self.source.remove_scroll_listener(&self.listener) {
            warn!("could not detach scroll listener: {:?}", err);
        }
    }
}

/// Whether the page is scrolled past the scroll-to-top threshold.
///
/// The listener is acquired when the calling component mounts and released
/// when it unmounts. The component only re-renders when the answer changes.
#[hook]
pub fn use_scroll_past_threshold() -> bool {
    let past_threshold = use_state_eq(|| false);

    {
        let past_threshold = past_threshold.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = BrowserViewport::new().and_then(|viewport| {
                    let mut state = ScrollState::new(viewport.scroll_offset());
                    past_threshold.set(state.is_past_threshold());

                    let window = viewport.window().clone();
                    ScrollSubscription::attach(window, move || {
                        if state.sample(viewport.scroll_offset()).is_some() {
                            debug!(
                                "scroll threshold crossed at {}px: {:?}",
                                state.scroll_top(),
                                state.state()
                            );
                            past_threshold.set(state.is_past_threshold());
                        }
                    })
                });

                move || drop(subscription)
            },
            (),
        );
    }

    *past_threshold
}

/// Jump to the top once when the calling page mounts. Router navigation
/// keeps the previous page's offset otherwise.
#[hook]
pub fn use_reset_scroll_on_mount() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Event target that keeps its handlers in a list and fires them on demand.
    #[derive(Default)]
    struct FakeScrollSource {
        next_id: Cell<usize>,
        handlers: RefCell<Vec<(usize, Box<dyn FnMut()>)>>,
    }

    impl FakeScrollSource {
        fn scroll(&self) {
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler();
            }
        }

        fn listener_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl<'a> ScrollSource for &'a FakeScrollSource {
        type Listener = usize;
        type Error = String;

        fn add_scroll_listener(&self, handler: Box<dyn FnMut()>) -> Result<usize, String> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));
            Ok(id)
        }

        fn remove_scroll_listener(&self, listener: &usize) -> Result<(), String> {
            let mut handlers = self.handlers.borrow_mut();
            let before = handlers.len();
            handlers.retain(|(id, _)| id != listener);
            if handlers.len() == before {
                return Err(format!("listener {} was never attached", listener));
            }
            Ok(())
        }
    }

    fn counting_handler() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        (calls, move || counter.set(counter.get() + 1))
    }

    #[test]
    fn handler_runs_while_subscribed() {
        let source = FakeScrollSource::default();
        let (calls, handler) = counting_handler();
        let _subscription = ScrollSubscription::attach(&source, handler).unwrap();

        source.scroll();
        source.scroll();
        assert_eq!(calls.get(), 2);
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn drop_detaches_the_same_listener() {
        let source = FakeScrollSource::default();
        let (calls, handler) = counting_handler();
        let subscription = ScrollSubscription::attach(&source, handler).unwrap();
        source.scroll();

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.scroll();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn early_return_releases_the_listener() {
        let source = FakeScrollSource::default();
        let (calls, handler) = counting_handler();

        let mount = |source: &FakeScrollSource, anchor: Option<f64>| -> Option<f64> {
            let _subscription = ScrollSubscription::attach(source, handler)?;
            let top = anchor?;
            Some(top)
        };
        assert_eq!(mount(&source, None), None);

        source.scroll();
        assert_eq!(source.listener_count(), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn remounting_leaves_one_listener() {
        let source = FakeScrollSource::default();
        for _ in 0..3 {
            let (_, handler) = counting_handler();
            let _subscription = ScrollSubscription::attach(&source, handler).unwrap();
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
    }
}
