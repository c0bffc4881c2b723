use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::use_egg_config;
use crate::eggs::{EggState, OverlayKind, Panel, Phase};
#[cfg(target_arch = "wasm32")]
use crate::eggs::Transition;
#[cfg(target_arch = "wasm32")]
use crate::listeners::WindowListeners;
use crate::overlays::{
    CoffeeButton, HeartsOverlay, HelloOverlay, InfoBanner, MouseHint, ParticleLayer,
    RandomEggButton, SecretOverlay,
};
use crate::particles::Particle;
use crate::preference::{default_store, info_dismissed};
use crate::random::SystemRandom;
use crate::runtime::EggRuntime;

#[component]
pub fn EasterEggs() -> Element {
    let config = use_egg_config();
    let store = use_hook(|| Rc::new(RefCell::new(default_store())));
    let state = use_signal({
        let config = config.clone();
        let store = store.clone();
        move || {
            let dismissed = info_dismissed(&**store.borrow(), &config.info_storage_key);
            EggState::new(config, initial_width(), dismissed)
        }
    });
    let runtime = use_hook(|| {
        EggRuntime::new(
            state,
            store.clone(),
            Box::new(SystemRandom),
            &config.info_storage_key,
        )
    });
    use_context_provider(|| runtime.clone());

    #[cfg(target_arch = "wasm32")]
    {
        let mut resize_listener = use_signal(|| None::<WindowListeners>);
        let mut input_listeners = use_signal(|| None::<WindowListeners>);

        let mount_runtime = runtime.clone();
        use_effect(move || {
            if resize_listener.peek().is_some() {
                return;
            }
            tracing::debug!("easter-eggs: mount");
            if mount_runtime.state().peek().enabled() {
                input_listeners.set(WindowListeners::input(&mount_runtime));
            }
            let resize_runtime = mount_runtime.clone();
            let mut inputs = input_listeners;
            resize_listener.set(WindowListeners::resize(move |width| {
                match resize_runtime.resize(width) {
                    Some(Transition::Enabled) => {
                        inputs.set(WindowListeners::input(&resize_runtime));
                    }
                    Some(Transition::Disabled) => {
                        tracing::debug!("easter-eggs: viewport too narrow, detaching");
                        inputs.set(None);
                    }
                    Some(Transition::Unchanged) | None => {}
                }
            }));
        });

        let teardown_runtime = runtime.clone();
        use_drop(move || {
            teardown_runtime.teardown();
            if let Ok(mut slot) = input_listeners.try_write() {
                slot.take();
            }
            if let Ok(mut slot) = resize_listener.try_write() {
                slot.take();
            }
        });
    }

    let view = state.read();
    if !view.enabled() {
        return rsx! {};
    }
    let info = view.panel_phase(Panel::Info);
    let hint = view.panel_phase(Panel::MouseHint);
    let secret = view.phase(OverlayKind::Secret);
    let hearts = view.phase(OverlayKind::Hearts);
    let hello = view.phase(OverlayKind::Hello);
    let particles: Vec<Particle> = view.particles().iter().copied().collect();
    drop(view);

    rsx! {
        if info.is_mounted() {
            InfoBanner { closing: info == Phase::Closing }
        }
        if hint.is_mounted() {
            MouseHint { closing: hint == Phase::Closing }
        }
        if secret.is_mounted() {
            SecretOverlay { closing: secret == Phase::Closing }
        }
        if hearts.is_mounted() {
            HeartsOverlay { closing: hearts == Phase::Closing }
        }
        ParticleLayer { particles }
        if hello.is_mounted() {
            HelloOverlay { closing: hello == Phase::Closing }
        }
        CoffeeButton {}
        RandomEggButton {}
    }
}

fn initial_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::listeners::viewport_width()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
