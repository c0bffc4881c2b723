use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::runtime::EggRuntime;

type EventClosure = Rc<Closure<dyn FnMut(web_sys::Event)>>;

pub struct WindowListeners {
    attached: Vec<(&'static str, EventClosure)>,
}

impl WindowListeners {
    fn attach_all(entries: Vec<(&'static str, EventClosure)>) -> Option<Self> {
        let window = web_sys::window()?;
        for (event, closure) in &entries {
            let _ = window
                .add_event_listener_with_callback(event, closure.as_ref().as_ref().unchecked_ref());
        }
        Some(Self { attached: entries })
    }

    pub fn resize<F>(mut on_resize: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let closure = wrap(move |_event| {
            if let Some(width) = viewport_width() {
                on_resize(width);
            }
        });
        Self::attach_all(vec![("resize", closure)])
    }

    pub fn input(runtime: &EggRuntime) -> Option<Self> {
        tracing::debug!("easter-eggs: attach input listeners");

        let on_key_down = {
            let runtime = runtime.clone();
            wrap(move |event| {
                if let Some(key) = keyboard_key(&event) {
                    runtime.dispatch(|state, _| state.key_down(&key));
                }
            })
        };
        let on_double_click = {
            let runtime = runtime.clone();
            wrap(move |_event| runtime.dispatch(|state, _| state.double_click()))
        };
        let on_mouse_move = {
            let runtime = runtime.clone();
            wrap(move |event| {
                let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                let x = f64::from(mouse.client_x());
                let y = f64::from(mouse.client_y());
                runtime.dispatch(|state, rng| state.mouse_move(x, y, rng));
            })
        };
        let on_key_press = {
            let runtime = runtime.clone();
            wrap(move |event| {
                if let Some(key) = keyboard_key(&event) {
                    runtime.dispatch(|state, _| state.key_press(&key));
                }
            })
        };

        Self::attach_all(vec![
            ("keydown", on_key_down),
            ("dblclick", on_double_click),
            ("mousemove", on_mouse_move),
            ("keypress", on_key_press),
        ])
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        for (event, closure) in &self.attached {
            let _ = window.remove_event_listener_with_callback(
                event,
                closure.as_ref().as_ref().unchecked_ref(),
            );
        }
        tracing::debug!("easter-eggs: detached {} listeners", self.attached.len());
    }
}

fn wrap<F>(handler: F) -> EventClosure
where
    F: FnMut(web_sys::Event) + 'static,
{
    Rc::new(Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>))
}

fn keyboard_key(event: &web_sys::Event) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|keyboard| keyboard.key())
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}
