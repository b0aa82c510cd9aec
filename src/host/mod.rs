// host/ - Browser glue
//
// Owns the canvas, both clocks and the input listeners. Every callback
// borrows the field for its whole run; JS never interleaves callbacks, so
// frame and force ticks cannot overlap.
//
// A started background is parked in `LIVE` and runs for the page's lifetime.
// JS handles only point at it, so collecting a handle changes nothing;
// `stop` is the one teardown path.

pub mod canvas;
pub mod console;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::config::FieldConfig;
use crate::driver::{Clocks, ForceClock, FrameDriver, Phase};
use crate::sim::Field;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Shared pointer to a running background.
pub type Live = Rc<RefCell<Background>>;

thread_local! {
    static LIVE: RefCell<Vec<Live>> = const { RefCell::new(Vec::new()) };
}

/// Missing `matchMedia` counts as "motion allowed".
pub fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}

/// Seed for the field RNG; sessions only need to differ, not be secret.
fn session_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64 ^ js_sys::Date::now() as u64
}

pub struct Background {
    window: Window,
    canvas: HtmlCanvasElement,

    field: Rc<RefCell<Field>>,
    clocks: Clocks,

    // Frame loop: the callback re-registers itself through this slot
    frame: Rc<RefCell<Option<FrameCallback>>>,
    frame_id: Rc<Cell<Option<i32>>>,

    // Force loop
    interval_id: Option<i32>,
    force_tick: Option<Closure<dyn FnMut()>>,

    // Input
    on_resize: Option<Closure<dyn FnMut()>>,
    on_pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl Background {
    /// Mount the canvas, start both clocks and park the background in `LIVE`.
    ///
    /// Returns `Ok(None)` without touching the page when reduced motion is preferred.
    pub fn start(window: Window, cfg: FieldConfig) -> Result<Option<Live>, JsValue> {
        let driver = FrameDriver::new(prefers_reduced_motion(&window));
        if driver.phase() == Phase::Stopped {
            console::debug("reduced motion preferred, background skipped");
            return Ok(None);
        }

        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = canvas::mount(&document)?;
        let (w, h) = canvas::viewport(&window)?;
        canvas::fit(&canvas, w, h);
        let ctx = canvas::context_2d(&canvas)?;

        let field = Field::new(w, h, cfg, session_seed());
        console::debug(&format!("{} particles on {}x{}", field.particles().len(), w, h));

        let mut bg = Self {
            window,
            canvas,
            field: Rc::new(RefCell::new(field)),
            clocks: Clocks::new(driver, ForceClock::new(cfg.force_period_ms)),
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            interval_id: None,
            force_tick: None,
            on_resize: None,
            on_pointer: None,
        };

        if let Err(err) = bg.wire(ctx) {
            bg.stop();
            return Err(err);
        }

        let live = Rc::new(RefCell::new(bg));
        LIVE.with(|l| l.borrow_mut().push(live.clone()));
        Ok(Some(live))
    }

    fn wire(&mut self, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        self.start_force_clock()?;
        self.start_frames(ctx)?;
        self.listen()
    }

    fn start_force_clock(&mut self) -> Result<(), JsValue> {
        let field = self.field.clone();
        let clocks = self.clocks.clone();
        let tick = Closure::<dyn FnMut()>::new(move || {
            clocks.fire(&mut field.borrow_mut());
        });

        let period = self.clocks.period_ms();
        let id = self.window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period,
        )?;
        self.interval_id = Some(id);
        self.force_tick = Some(tick);
        Ok(())
    }

    fn start_frames(&mut self, mut ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let window = self.window.clone();
        let field = self.field.clone();
        let clocks = self.clocks.clone();
        let slot = self.frame.clone();
        let frame_id = self.frame_id.clone();

        let frame = Closure::<dyn FnMut(f64)>::new(move |_t: f64| {
            frame_id.set(None);
            let again = clocks.frame(&mut field.borrow_mut(), &mut ctx);
            if !again {
                return;
            }
            if let Some(cb) = slot.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(err) => console::warn_js("could not schedule next frame", &err),
                }
            }
        });

        let id = self.window.request_animation_frame(frame.as_ref().unchecked_ref())?;
        self.frame_id.set(Some(id));
        *self.frame.borrow_mut() = Some(frame);
        Ok(())
    }

    fn listen(&mut self) -> Result<(), JsValue> {
        let window = self.window.clone();
        let canvas = self.canvas.clone();
        let field = self.field.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            match canvas::viewport(&window) {
                Ok((w, h)) => {
                    canvas::fit(&canvas, w, h);
                    field.borrow_mut().resize(w, h);
                }
                Err(err) => console::warn_js("could not read viewport size", &err),
            }
        });
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);

        // Canvas sits at the viewport origin, so client coords are surface coords
        let field = self.field.clone();
        let on_pointer = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            field.borrow_mut().set_pointer(e.client_x() as f64, e.client_y() as f64);
        });
        self.window
            .add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref())?;
        self.on_pointer = Some(on_pointer);

        Ok(())
    }

    /// Cancel both clocks and detach listeners. Idempotent.
    pub fn stop(&mut self) {
        let was_running = self.clocks.stop();

        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the callback also breaks its self-reference
        self.frame.borrow_mut().take();

        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
        }
        self.force_tick = None;

        if let Some(cb) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = self.on_pointer.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
        }

        if was_running {
            console::debug("stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.clocks.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }
}

/// Stop `live` and release it from `LIVE`.
pub fn stop(live: &Live) {
    live.borrow_mut().stop();
    LIVE.with(|l| l.borrow_mut().retain(|bg| !Rc::ptr_eq(bg, live)));
}
