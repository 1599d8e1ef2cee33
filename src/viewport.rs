//! Viewport mapping from logical game coordinates to physical canvas pixels.
//!
//! A scene authored in logical coordinates declares a `logical_width` and an
//! `aspect_ratio` (height/width). Each frame the logical rectangle is scaled
//! uniformly to fit inside the physical canvas, centered, with solid bars
//! filling the remainder: pillarboxed (bars left/right) when the content is
//! relatively taller than the window, letterboxed (bars top/bottom)
//! otherwise.
//!
//! The math lives here as a pure type so the formulas can be asserted
//! directly without a drawing context.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Which pair of canvas edges the bars sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOrientation {
    /// Bars on the left and right edges (pillarbox).
    LeftRight,
    /// Bars on the top and bottom edges (letterbox).
    TopBottom,
}

/// The letterbox fit for one frame.
///
/// `bar1_end` / `bar2_start` delimit the content region along the barred
/// axis, in physical canvas pixels. `scale` is the uniform factor mapping
/// logical units to physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub orientation: BarOrientation,
    /// Where the leading bar ends (content start) along the barred axis.
    pub bar1_end: f64,
    /// Where the trailing bar starts (content end) along the barred axis.
    pub bar2_start: f64,
    /// Uniform logical-to-physical scale factor.
    pub scale: f64,
}

impl Letterbox {
    /// Compute the fit for a canvas of `canvas_w` x `canvas_h` pixels.
    ///
    /// Returns `None` when logical coordinates are disabled
    /// (`logical_width <= 0` or `aspect_ratio <= 0`), in which case the
    /// scene draws directly in canvas pixels with no bars.
    ///
    /// Degenerate canvas sizes (zero or negative) are not validated and
    /// produce degenerate transforms.
    #[must_use]
    pub fn compute(canvas_w: f64, canvas_h: f64, logical_width: f64, aspect_ratio: f64) -> Option<Self> {
        if logical_width <= 0.0 || aspect_ratio <= 0.0 {
            return None;
        }

        let window_aspect = canvas_h / canvas_w;
        if aspect_ratio > window_aspect {
            // Content is relatively taller than the window: it fills the
            // canvas height and the leftover width becomes side bars.
            let half_content = (canvas_h / aspect_ratio) / 2.0;
            Some(Self {
                orientation: BarOrientation::LeftRight,
                bar1_end: canvas_w / 2.0 - half_content,
                bar2_start: canvas_w / 2.0 + half_content,
                scale: canvas_h / logical_width,
            })
        } else {
            // Content fills the canvas width; leftover height becomes
            // top/bottom bars.
            let half_content = (canvas_w * aspect_ratio) / 2.0;
            Some(Self {
                orientation: BarOrientation::TopBottom,
                bar1_end: canvas_h / 2.0 - half_content,
                bar2_start: canvas_h / 2.0 + half_content,
                scale: canvas_w / (logical_width / aspect_ratio),
            })
        }
    }

    /// Origin translation that centers the content region, applied before
    /// the uniform scale.
    #[must_use]
    pub fn translation(&self) -> (f64, f64) {
        match self.orientation {
            BarOrientation::LeftRight => (self.bar1_end, 0.0),
            BarOrientation::TopBottom => (0.0, self.bar1_end),
        }
    }

    /// The two bar rectangles as `(x, y, w, h)` in physical canvas pixels.
    ///
    /// Drawn after the draw pass restores the context transform, so they
    /// cover any content that overflowed the logical rectangle.
    #[must_use]
    pub fn bar_rects(&self, canvas_w: f64, canvas_h: f64) -> [(f64, f64, f64, f64); 2] {
        match self.orientation {
            BarOrientation::LeftRight => [
                (0.0, 0.0, self.bar1_end, canvas_h),
                (self.bar2_start, 0.0, canvas_w - self.bar2_start, canvas_h),
            ],
            BarOrientation::TopBottom => [
                (0.0, 0.0, canvas_w, self.bar1_end),
                (0.0, self.bar2_start, canvas_w, canvas_h - self.bar2_start),
            ],
        }
    }
}
