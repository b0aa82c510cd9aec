// render.rs - Drawing surface abstraction
//
// The simulation paints through `Surface` and never touches the DOM. The
// browser host implements it for `CanvasRenderingContext2d`; tests record
// the calls instead.

use glam::DVec2;

use crate::color::Color;

pub trait Surface {
    /// Paint `veil` over the whole `w` x `h` area (translucent, so old frames fade).
    fn fade(&mut self, w: f64, h: f64, veil: Color);

    /// Filled circle with a thin outline.
    fn disc(&mut self, center: DVec2, radius: f64, fill: Color, outline: Color, outline_width: f64);

    /// Straight stroke between two points.
    fn line(&mut self, from: DVec2, to: DVec2, stroke: Color, width: f64);
}

/// Recorded draw call, for tests.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Fade { w: f64, h: f64, veil: Color },
    Disc { center: DVec2, radius: f64, fill: Color, outline: Color, outline_width: f64 },
    Line { from: DVec2, to: DVec2, stroke: Color, width: f64 },
}

#[cfg(test)]
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

#[cfg(test)]
impl Surface for Recorder {
    fn fade(&mut self, w: f64, h: f64, veil: Color) {
        self.ops.push(Op::Fade { w, h, veil });
    }

    fn disc(&mut self, center: DVec2, radius: f64, fill: Color, outline: Color, outline_width: f64) {
        self.ops.push(Op::Disc { center, radius, fill, outline, outline_width });
    }

    fn line(&mut self, from: DVec2, to: DVec2, stroke: Color, width: f64) {
        self.ops.push(Op::Line { from, to, stroke, width });
    }
}
