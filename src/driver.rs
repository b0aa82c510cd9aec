// driver.rs - The two clocks
//
// FrameDriver runs once per display refresh; ForceClock on a fixed period.
// Both are plain state machines over `Field`; the host decides when they fire.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Color;
use crate::render::Surface;
use crate::sim::Field;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

pub struct FrameDriver {
    phase: Phase,
}

impl FrameDriver {
    /// Reduced motion is checked once here and never again.
    pub fn new(reduced_motion: bool) -> Self {
        let phase = if reduced_motion { Phase::Stopped } else { Phase::Running };
        Self { phase }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Terminal: there is no way back to Running.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// One rendered frame. Returns whether the next frame should be scheduled.
    pub fn frame<S: Surface + ?Sized>(&mut self, field: &mut Field, surface: &mut S) -> bool {
        if self.phase == Phase::Stopped {
            return false;
        }

        // Translucent veil instead of a clear leaves fading trails
        let veil = Color::black(field.config().trail_alpha);
        surface.fade(field.width(), field.height(), veil);

        field.step_and_draw(surface);
        true
    }
}

pub struct ForceClock {
    period_ms: i32,
    stopped: bool,
}

impl ForceClock {
    pub fn new(period_ms: i32) -> Self {
        Self { period_ms, stopped: false }
    }

    pub fn period_ms(&self) -> i32 {
        self.period_ms
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// One force tick. Returns false once stopped.
    pub fn fire(&mut self, field: &mut Field) -> bool {
        if self.stopped {
            return false;
        }
        field.apply_forces();
        true
    }
}

/// Both clocks behind shared cells.
///
/// Host callbacks and JS handles each hold a clone and see one state.
/// Dropping a clone stops nothing; only `stop` does.
#[derive(Clone)]
pub struct Clocks {
    frames: Rc<RefCell<FrameDriver>>,
    forces: Rc<RefCell<ForceClock>>,
}

impl Clocks {
    pub fn new(frames: FrameDriver, forces: ForceClock) -> Self {
        Self {
            frames: Rc::new(RefCell::new(frames)),
            forces: Rc::new(RefCell::new(forces)),
        }
    }

    pub fn frame<S: Surface + ?Sized>(&self, field: &mut Field, surface: &mut S) -> bool {
        self.frames.borrow_mut().frame(field, surface)
    }

    pub fn fire(&self, field: &mut Field) -> bool {
        self.forces.borrow_mut().fire(field)
    }

    /// Stop both clocks. Returns whether frames were still running.
    pub fn stop(&self) -> bool {
        let was_running = self.is_running();
        self.frames.borrow_mut().stop();
        self.forces.borrow_mut().stop();
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.frames.borrow().phase() == Phase::Running
    }

    pub fn period_ms(&self) -> i32 {
        self.forces.borrow().period_ms()
    }
}
