use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use iranmap_shared::Refresh;

/// Canvas layers a repaint covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layers {
    pub regions: bool,
    pub labels: bool,
}

impl Layers {
    pub const ALL: Layers = Layers {
        regions: true,
        labels: true,
    };
    pub const REGIONS: Layers = Layers {
        regions: true,
        labels: false,
    };

    pub fn is_empty(self) -> bool {
        !self.regions && !self.labels
    }

    pub fn union(self, other: Layers) -> Layers {
        Layers {
            regions: self.regions || other.regions,
            labels: self.labels || other.labels,
        }
    }
}

impl From<Refresh> for Layers {
    fn from(refresh: Refresh) -> Self {
        Layers {
            regions: refresh.regions,
            labels: refresh.labels,
        }
    }
}

/// Batches repaint requests via `requestAnimationFrame`.
///
/// Dirty layers accumulate between frames; the render function sees the
/// union of everything marked since the last frame.
pub struct RenderScheduler {
    inner: Rc<Inner>,
}

struct Inner {
    window: Option<web_sys::Window>,
    dirty: Cell<Layers>,
    scheduled: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl RenderScheduler {
    pub fn new(render_fn: impl Fn(Layers) + 'static) -> Self {
        let inner = Rc::new(Inner {
            window: web_sys::window(),
            dirty: Cell::new(Layers::default()),
            scheduled: Cell::new(false),
            raf_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let inner_cb = inner.clone();
        let cb = Closure::<dyn FnMut()>::new(move || {
            inner_cb.scheduled.set(false);
            inner_cb.raf_id.set(None);
            let layers = inner_cb.dirty.replace(Layers::default());
            if !layers.is_empty() {
                render_fn(layers);
            }
        });
        *inner.callback.borrow_mut() = Some(cb);

        Self { inner }
    }

    /// Mark layers as needing a repaint. Schedules one frame if none is
    /// pending.
    pub fn mark_dirty(&self, layers: Layers) {
        if layers.is_empty() {
            return;
        }
        self.inner.dirty.set(self.inner.dirty.get().union(layers));
        if self.inner.scheduled.get() {
            return;
        }
        self.inner.scheduled.set(true);
        let cb_ref = self.inner.callback.borrow();
        let Some(ref cb) = *cb_ref else {
            self.inner.scheduled.set(false);
            return;
        };
        let Some(window) = self.inner.window.as_ref() else {
            self.inner.scheduled.set(false);
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.inner.raf_id.set(Some(id)),
            Err(_) => self.inner.scheduled.set(false),
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        if let Some(raf_id) = self.inner.raf_id.replace(None)
            && let Some(window) = self.inner.window.as_ref()
        {
            let _ = window.cancel_animation_frame(raf_id);
        }
        self.inner.scheduled.set(false);
        self.inner.dirty.set(Layers::default());
        // Break the callback->inner reference cycle on teardown.
        self.inner.callback.borrow_mut().take();
    }
}
