use wasm_bindgen::prelude::*;

// ============================================================================
// CONSTELLATION - Ambient particle network behind page content
// ============================================================================
//
// Points drift and wrap around the viewport, get pushed away from the
// pointer, and are joined by lines that fade with distance. Rendering follows
// display refresh; the pointer force runs on its own fixed-period clock.

pub mod color;
pub mod config;
pub mod driver;
pub mod host;
pub mod render;
pub mod sim;

pub use config::FieldConfig;
pub use sim::{Field, Particle};

/// Handle to a running background.
///
/// The background outlives the handle; letting JS collect it leaves the
/// animation running. Only `stop` tears it down.
#[wasm_bindgen]
pub struct ParticleBackground {
    inner: host::Live,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Cancel both clocks and detach input listeners. Safe to call twice.
    pub fn stop(&mut self) {
        host::stop(&self.inner);
    }

    pub fn running(&self) -> bool {
        self.inner.borrow().is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.inner.borrow().particle_count()
    }
}

/// Insert the background canvas and start animating.
///
/// Returns `undefined` when the user prefers reduced motion.
#[wasm_bindgen]
pub fn start_particle_background() -> Result<Option<ParticleBackground>, JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let inner = host::Background::start(window, FieldConfig::default())?;
    Ok(inner.map(|inner| ParticleBackground { inner }))
}
