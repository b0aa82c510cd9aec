// canvas.rs - Canvas 2D backend for `Surface`

use std::f64::consts::TAU;

use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::color::Color;
use crate::render::Surface;

pub const CANVAS_ID: &str = "particle-bg";

impl Surface for CanvasRenderingContext2d {
    fn fade(&mut self, w: f64, h: f64, veil: Color) {
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(&veil.to_string()));
        self.fill_rect(0.0, 0.0, w, h);
    }

    fn disc(&mut self, center: DVec2, radius: f64, fill: Color, outline: Color, outline_width: f64) {
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(&fill.to_string()));
        self.begin_path();
        // only fails on a negative radius
        if self.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.fill();

        #[allow(deprecated)]
        self.set_stroke_style(&JsValue::from_str(&outline.to_string()));
        self.set_line_width(outline_width);
        self.stroke();
    }

    fn line(&mut self, from: DVec2, to: DVec2, stroke: Color, width: f64) {
        #[allow(deprecated)]
        self.set_stroke_style(&JsValue::from_str(&stroke.to_string()));
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
    }
}

/// Create the background canvas as the first child of `<body>`.
pub fn mount(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("no <body>"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_id(CANVAS_ID);
    body.insert_before(&canvas, body.first_child().as_ref())?;
    Ok(canvas)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Viewport size in CSS pixels.
pub fn viewport(window: &Window) -> Result<(f64, f64), JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

/// Match the canvas backing store to the viewport.
pub fn fit(canvas: &HtmlCanvasElement, w: f64, h: f64) {
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
}
