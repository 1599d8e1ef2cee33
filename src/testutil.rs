//! Test support: a recording [`Canvas2d`] implementation.
//!
//! Scene and object tests drive the real draw pass against this mock and
//! assert on the resulting op log, which is how the viewport, camera, and
//! filter behavior is verified without a browser.

use crate::context::{Canvas2d, CanvasError};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64),
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    SetFilter(String),
    SetFont(String),
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    ClearRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Arc(f64, f64, f64, f64, f64),
    Fill,
    Stroke,
    FillText(String, f64, f64),
}

/// In-memory canvas that records every call in order and never fails.
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    /// Net save/restore balance over the whole log (0 = balanced).
    pub fn save_restore_balance(&self) -> i32 {
        self.ops.iter().fold(0, |acc, op| match op {
            Op::Save => acc + 1,
            Op::Restore => acc - 1,
            _ => acc,
        })
    }

    /// The filter string in effect just before the given op index.
    pub fn filter_before(&self, index: usize) -> &str {
        self.ops[..index]
            .iter()
            .rev()
            .find_map(|op| match op {
                Op::SetFilter(f) => Some(f.as_str()),
                _ => None,
            })
            .unwrap_or("none")
    }

    /// Indices and payloads of every `FillText` op, in order.
    pub fn texts(&self) -> Vec<(usize, &str)> {
        self.ops
            .iter()
            .enumerate()
            .filter_map(|(i, op)| match op {
                Op::FillText(s, _, _) => Some((i, s.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Canvas2d for RecordingCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), CanvasError> {
        self.ops.push(Op::Translate(dx, dy));
        Ok(())
    }

    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), CanvasError> {
        self.ops.push(Op::Scale(sx, sy));
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<(), CanvasError> {
        self.ops.push(Op::Rotate(radians));
        Ok(())
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::SetFillStyle(style.to_owned()));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(Op::SetStrokeStyle(style.to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::SetLineWidth(width));
    }

    fn set_filter(&mut self, filter: &str) {
        self.ops.push(Op::SetFilter(filter.to_owned()));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::SetFont(font.to_owned()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::StrokeRect(x, y, w, h));
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::ClearRect(x, y, w, h));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), CanvasError> {
        self.ops.push(Op::Arc(x, y, radius, start, end));
        Ok(())
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), CanvasError> {
        self.ops.push(Op::FillText(text.to_owned(), x, y));
        Ok(())
    }
}
