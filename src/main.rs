mod app;
mod component;
mod config;
mod eggs;
mod keys;
#[cfg(target_arch = "wasm32")]
mod listeners;
mod overlays;
mod particles;
mod preference;
mod random;
mod runtime;

fn main() {
    dioxus::launch(app::App);
}
