use dioxus::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::eggs::{EggState, Effect, PageFilter, Transition, HELLO_FILTER};
use crate::preference::{persist_info_dismissed, PreferenceStore};
use crate::random::RandomSource;

// Pending resets owned by one mounted component. Cancelling bumps the
// epoch so that timers already in flight land as no-ops.
#[derive(Clone, Default)]
pub struct TimerSet {
    epoch: Rc<Cell<u64>>,
    pending: Rc<Cell<usize>>,
}

impl TimerSet {
    pub fn cancel_all(&self) {
        self.epoch.set(self.epoch.get() + 1);
        tracing::debug!(
            "easter-eggs: cancelled {} pending timers",
            self.pending.get()
        );
    }

    #[cfg(target_arch = "wasm32")]
    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        use gloo_timers::future::TimeoutFuture;

        let epoch = self.epoch.clone();
        let armed_at = epoch.get();
        let pending = self.pending.clone();
        pending.set(pending.get() + 1);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            pending.set(pending.get().saturating_sub(1));
            if epoch.get() == armed_at {
                callback();
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        tracing::debug!("easter-eggs: no browser timers, dropping {delay_ms}ms reset");
        let _ = callback;
    }
}

#[derive(Clone)]
pub struct EggRuntime {
    state: Signal<EggState>,
    timers: TimerSet,
    store: Rc<RefCell<Box<dyn PreferenceStore>>>,
    rng: Rc<RefCell<Box<dyn RandomSource>>>,
    info_key: Rc<str>,
}

impl EggRuntime {
    pub fn new(
        state: Signal<EggState>,
        store: Rc<RefCell<Box<dyn PreferenceStore>>>,
        rng: Box<dyn RandomSource>,
        info_key: &str,
    ) -> Self {
        Self {
            state,
            timers: TimerSet::default(),
            store,
            rng: Rc::new(RefCell::new(rng)),
            info_key: Rc::from(info_key),
        }
    }

    pub fn state(&self) -> Signal<EggState> {
        self.state
    }

    pub fn dispatch<F>(&self, handler: F)
    where
        F: FnOnce(&mut EggState, &mut dyn RandomSource) -> Vec<Effect>,
    {
        let mut state = self.state;
        let effects = {
            let Ok(mut guard) = state.try_write() else {
                return;
            };
            let mut rng = self.rng.borrow_mut();
            handler(&mut guard, &mut **rng)
        };
        self.apply(effects);
    }

    pub fn resize(&self, width: f64) -> Option<Transition> {
        let mut state = self.state;
        let (transition, effects) = {
            let Ok(mut guard) = state.try_write() else {
                return None;
            };
            guard.resize(width)
        };
        self.apply(effects);
        Some(transition)
    }

    pub fn samples(&self, count: usize, scale: f64) -> Vec<f64> {
        let mut rng = self.rng.borrow_mut();
        (0..count).map(|_| rng.next_f64() * scale).collect()
    }

    pub fn teardown(&self) {
        self.timers.cancel_all();
        let active = self
            .state
            .try_peek()
            .map(|state| state.filter_active())
            .unwrap_or(false);
        if active {
            set_page_filter(PageFilter::Clear);
        }
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { delay_ms, expiry } => {
                    let runtime = self.clone();
                    self.timers.schedule(delay_ms, move || {
                        runtime.dispatch(|state, _| state.expire(expiry));
                    });
                }
                Effect::SetPageFilter(filter) => set_page_filter(filter),
                Effect::PersistInfoDismissed => {
                    let mut store = self.store.borrow_mut();
                    persist_info_dismissed(&mut **store, &self.info_key);
                }
                Effect::Alert(message) => show_alert(message),
                Effect::CancelTimers => self.timers.cancel_all(),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn set_page_filter(filter: PageFilter) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = match filter {
        PageFilter::HueRotate => HELLO_FILTER,
        PageFilter::Clear => "",
    };
    let _ = body.style().set_property("filter", value);
}

#[cfg(not(target_arch = "wasm32"))]
fn set_page_filter(filter: PageFilter) {
    tracing::debug!("easter-eggs: page filter {filter:?} ({HELLO_FILTER}) skipped off-browser");
}

#[cfg(target_arch = "wasm32")]
fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show_alert(message: &str) {
    tracing::info!("easter-eggs: {message}");
}
