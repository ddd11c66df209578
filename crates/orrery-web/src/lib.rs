pub mod runner;

pub use runner::SimulationRunner;

use std::cell::RefCell;

use orrery_engine::{InputEvent, Viewport};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SimulationRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner. Calls made before `orrery_init` are
/// reported to the console and answered with `None`.
fn with_runner<R>(f: impl FnOnce(&mut SimulationRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                web_sys::console::warn_1(&"orrery: not initialized, call orrery_init() first".into());
                None
            }
        }
    })
}

/// Build the scene. `config_json` may be empty for the default solar system;
/// without an explicit `seed` the orbital phases are seeded from the clock.
/// Returns false if the config was rejected.
#[wasm_bindgen]
pub fn orrery_init(config_json: &str, width: f32, height: f32, seed: Option<f64>) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = seed.unwrap_or_else(js_sys::Date::now) as u64;
    match SimulationRunner::from_json(config_json, Some(seed), Viewport::new(width, height)) {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("orrery: initialized (seed {})", seed);
            true
        }
        Err(err) => {
            log::error!("orrery: init failed: {}", err);
            false
        }
    }
}

/// Advance one frame. Returns true when the host should schedule another.
#[wasm_bindgen]
pub fn orrery_tick(dt: f32) -> bool {
    with_runner(|r| r.tick(dt)).unwrap_or(false)
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

/// Bound to the window so a release off the canvas still ends a drag.
#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}

#[wasm_bindgen]
pub fn orrery_wheel(delta_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
}

#[wasm_bindgen]
pub fn orrery_set_speed(body: u32, value: f64) {
    with_runner(|r| r.set_speed(body, value));
}

#[wasm_bindgen]
pub fn orrery_toggle_pause() {
    with_runner(|r| r.push_input(InputEvent::TogglePause));
}

#[wasm_bindgen]
pub fn orrery_reset() {
    with_runner(|r| r.push_input(InputEvent::Reset));
}

#[wasm_bindgen]
pub fn orrery_toggle_theme() {
    with_runner(|r| r.push_input(InputEvent::ToggleTheme));
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn orrery_scene_json() -> String {
    with_runner(|r| r.scene_json()).unwrap_or_else(|| String::from("[]"))
}

#[wasm_bindgen]
pub fn orrery_tooltip_text() -> String {
    with_runner(|r| r.tooltip_text()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn orrery_background() -> String {
    with_runner(|r| r.background()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn orrery_base_speed(body: u32) -> f64 {
    with_runner(|r| r.base_speed(body)).flatten().unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_header_ptr() -> *const f32 {
    with_runner(|r| r.header_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_header_len() -> u32 {
    with_runner(|r| r.header_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}
