use dioxus::prelude::*;

use crate::eggs::OverlayKind;
use crate::particles::Particle;
use crate::runtime::EggRuntime;

const HEART_COUNT: usize = 20;
const PULSE_DOTS: usize = 10;

#[component]
pub fn InfoBanner(closing: bool) -> Element {
    let runtime = use_context::<EggRuntime>();
    let hide_runtime = runtime.clone();
    let class = if closing { "egg-info egg-info-out egg-closing" } else { "egg-info" };
    rsx! {
        div { class: "{class}", role: "status",
            span { class: "egg-info-icon", "ℹ" }
            div {
                div {
                    b { "Try these fun surprises:" }
                }
                ul { class: "egg-info-list",
                    li {
                        "Type "
                        b { "EASTER" }
                        " anywhere"
                    }
                    li { "Double-click anywhere" }
                    li { "Move your mouse around" }
                    li {
                        "Type "
                        b { "hello" }
                        " for a color effect"
                    }
                    li { "Click the coffee cup" }
                }
            }
            button {
                r#type: "button",
                class: "egg-info-button",
                onclick: move |_| hide_runtime.dispatch(|state, _| state.hide_info()),
                "Hide"
            }
            button {
                r#type: "button",
                class: "egg-info-button danger",
                onclick: move |_| runtime.dispatch(|state, _| state.dismiss_info_permanently()),
                "Don't show again"
            }
        }
    }
}

#[component]
pub fn MouseHint(closing: bool) -> Element {
    let class = if closing {
        "egg-mouse-hint egg-hint-out egg-closing"
    } else {
        "egg-mouse-hint"
    };
    rsx! {
        div { class: "{class}", "Move your mouse for a sparkle trail!" }
    }
}

#[component]
fn CloseButton(kind: OverlayKind, class: String) -> Element {
    let runtime = use_context::<EggRuntime>();
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: "Close popup",
            tabindex: 0,
            onclick: move |event: MouseEvent| {
                event.stop_propagation();
                runtime.dispatch(|state, _| state.dismiss(kind));
            },
            "×"
        }
    }
}

#[component]
fn PopupCard(
    kind: OverlayKind,
    glyph: String,
    title: String,
    subtitle: String,
    closing: bool,
    children: Element,
) -> Element {
    let runtime = use_context::<EggRuntime>();
    let (backdrop, card) = if closing {
        ("egg-backdrop egg-fade-out egg-closing", "egg-card egg-spin-out")
    } else {
        ("egg-backdrop egg-fade-in", "egg-card egg-spin-in")
    };
    rsx! {
        div {
            class: "{backdrop}",
            onclick: move |_| runtime.dispatch(|state, _| state.dismiss(kind)),
            div {
                class: "{card}",
                onclick: move |event: MouseEvent| event.stop_propagation(),
                CloseButton { kind, class: "egg-close".to_string() }
                div { class: "egg-glyph egg-rotate", "{glyph}" }
                h2 { class: "egg-title", "{title}" }
                p { class: "egg-subtitle", "{subtitle}" }
                {children}
            }
        }
    }
}

#[component]
pub fn SecretOverlay(closing: bool) -> Element {
    let delays: Vec<String> = (0..PULSE_DOTS)
        .map(|index| format!("animation-delay: {:.1}s;", index as f64 * 0.1))
        .collect();
    rsx! {
        PopupCard {
            kind: OverlayKind::Secret,
            glyph: "🥚".to_string(),
            title: "Easter Egg Unlocked!".to_string(),
            subtitle: "You typed EASTER!".to_string(),
            closing,
            div { class: "egg-dots",
                for (index, delay) in delays.into_iter().enumerate() {
                    div { key: "{index}", class: "egg-dot", style: "{delay}" }
                }
            }
        }
    }
}

#[component]
pub fn HelloOverlay(closing: bool) -> Element {
    rsx! {
        PopupCard {
            kind: OverlayKind::Hello,
            glyph: "🌈".to_string(),
            title: "Color Surprise!".to_string(),
            subtitle: "You typed hello!".to_string(),
            closing,
            children: rsx! {},
        }
    }
}

#[component]
pub fn HeartsOverlay(closing: bool) -> Element {
    let runtime = use_context::<EggRuntime>();
    let lanes = use_hook(|| runtime.samples(HEART_COUNT, 100.0));
    let hearts: Vec<String> = lanes
        .iter()
        .enumerate()
        .map(|(index, left)| {
            format!(
                "left: {left:.2}vw; animation-delay: {:.1}s;",
                index as f64 * 0.1
            )
        })
        .collect();
    let class = if closing {
        "egg-backdrop egg-fade-out egg-closing"
    } else {
        "egg-backdrop"
    };
    rsx! {
        div {
            class: "{class}",
            onclick: move |_| runtime.dispatch(|state, _| state.dismiss(OverlayKind::Hearts)),
            CloseButton { kind: OverlayKind::Hearts, class: "egg-close egg-close-corner".to_string() }
            div { class: "egg-hearts",
                for (index, style) in hearts.into_iter().enumerate() {
                    span { key: "{index}", class: "egg-heart", style: "{style}", "❤" }
                }
            }
        }
    }
}

#[component]
pub fn ParticleLayer(particles: Vec<Particle>) -> Element {
    rsx! {
        for Particle { id, x, y } in particles {
            span {
                key: "{id}",
                class: "egg-particle",
                style: "left: {x}px; top: {y}px;",
                "✦"
            }
        }
    }
}

#[component]
pub fn CoffeeButton() -> Element {
    let runtime = use_context::<EggRuntime>();
    rsx! {
        button {
            r#type: "button",
            class: "egg-coffee",
            aria_label: "Coffee Easter Egg",
            onclick: move |_| runtime.dispatch(|state, rng| state.coffee(rng)),
            "☕"
        }
    }
}

#[component]
pub fn RandomEggButton() -> Element {
    let runtime = use_context::<EggRuntime>();
    rsx! {
        button {
            r#type: "button",
            class: "egg-try",
            aria_label: "Try a random Easter Egg!",
            onclick: move |_| runtime.dispatch(|state, rng| state.random_trigger(rng)),
            "⚡"
        }
    }
}
