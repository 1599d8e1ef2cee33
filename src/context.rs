//! Drawing surface abstraction and the browser-backed implementation.
//!
//! This module is the only place that names [`web_sys`] types. The rest of
//! the framework — and every game object — programs against the [`Canvas2d`]
//! trait, which mirrors the subset of the `CanvasRenderingContext2d` API the
//! course uses. Unit tests drive the scene loop against a recording
//! implementation of the same trait, so all viewport and draw-order logic is
//! testable without a browser.
//!
//! Geometry-affecting calls are fallible (matching the underlying web
//! bindings) and propagate [`CanvasError`]; plain state setters are not.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Errors surfaced by the drawing surface or by game-object hooks.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A 2D-context call failed.
    #[error("canvas context call failed: {0}")]
    Context(String),
    /// A game object reported a fault from one of its hooks.
    #[error("game object fault: {0}")]
    Object(String),
}

impl CanvasError {
    /// Wrap a raw JS error from the canvas bindings.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Context(format!("{value:?}"))
    }
}

/// The 2D drawing surface the framework renders to.
///
/// `width` and `height` report the physical canvas size in pixels. The
/// transform stack (`save`/`restore`, `translate`, `scale`, `rotate`) and the
/// `filter` property behave as on a browser 2D context: `save` pushes the
/// full drawing state, `restore` pops it.
pub trait Canvas2d {
    /// Physical canvas width in pixels.
    fn width(&self) -> f64;
    /// Physical canvas height in pixels.
    fn height(&self) -> f64;

    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the most recently saved drawing state.
    fn restore(&mut self);

    /// Translate the current transform by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), CanvasError>;

    /// Scale the current transform by `(sx, sy)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), CanvasError>;

    /// Rotate the current transform by `radians`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn rotate(&mut self, radians: f64) -> Result<(), CanvasError>;

    /// Set the fill style to any CSS color string.
    fn set_fill_style(&mut self, style: &str);
    /// Set the stroke style to any CSS color string.
    fn set_stroke_style(&mut self, style: &str);
    /// Set the stroke line width.
    fn set_line_width(&mut self, width: f64);
    /// Set the CSS filter (e.g. `"blur(4px)"` or `"none"`).
    fn set_filter(&mut self, filter: &str);
    /// Set the font used by `fill_text`.
    fn set_font(&mut self, font: &str);

    /// Fill a rectangle with the current fill style.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Stroke a rectangle outline with the current stroke style.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Begin a new path.
    fn begin_path(&mut self);
    /// Move the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64);
    /// Add a line segment to the path.
    fn line_to(&mut self, x: f64, y: f64);
    /// Close the current subpath.
    fn close_path(&mut self);

    /// Add a circular arc to the path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), CanvasError>;

    /// Fill the current path.
    fn fill(&mut self);
    /// Stroke the current path.
    fn stroke(&mut self);

    /// Draw filled text at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), CanvasError>;
}

/// [`Canvas2d`] backed by a real browser canvas.
///
/// Holds both the element and its 2D context so `width`/`height` track the
/// element's pixel dimensions as the host resizes it.
pub struct Html2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Html2d {
    /// Acquire the `"2d"` context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser refuses to hand out a 2D context (for
    /// example because the canvas is already bound to a different context
    /// type).
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, CanvasError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| CanvasError::from_js(&e))?
            .ok_or_else(|| CanvasError::Context("canvas has no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::Context("2d context has unexpected type".to_owned()))?;
        Ok(Self { canvas, ctx })
    }
}

impl Canvas2d for Html2d {
    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), CanvasError> {
        self.ctx.translate(dx, dy).map_err(|e| CanvasError::from_js(&e))
    }

    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), CanvasError> {
        self.ctx.scale(sx, sy).map_err(|e| CanvasError::from_js(&e))
    }

    fn rotate(&mut self, radians: f64) -> Result<(), CanvasError> {
        self.ctx.rotate(radians).map_err(|e| CanvasError::from_js(&e))
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_filter(&mut self, filter: &str) {
        self.ctx.set_filter(filter);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), CanvasError> {
        self.ctx
            .arc(x, y, radius, start, end)
            .map_err(|e| CanvasError::from_js(&e))
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), CanvasError> {
        self.ctx
            .fill_text(text, x, y)
            .map_err(|e| CanvasError::from_js(&e))
    }
}
