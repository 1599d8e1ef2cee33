//! The scene: an ordered collection of game objects and the per-frame loop.
//!
//! An external run-loop (typically `requestAnimationFrame` glue in the host
//! page) calls [`Scene::start`] before the first frame, then
//! [`Scene::update`] and [`Scene::draw`] once per frame. `start` is
//! self-gating, so calling it every frame is also fine.
//!
//! Drawing is single-threaded and frame-driven: one logical thread owns the
//! frame, and the only resource needing scoped discipline is the context's
//! transform stack — `draw` pairs its `save` with exactly one `restore` on
//! the normal path. A fault in any object hook aborts the remainder of that
//! pass; the scene performs no recovery, retry, or logging.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::camera::Camera;
use crate::consts::{COORDS_DISABLED, FILTER_NONE, GLOW_FILTER, GLOW_LAYER, LETTERBOX_FILL};
use crate::context::{Canvas2d, CanvasError};
use crate::object::GameObject;
use crate::viewport::Letterbox;

/// Optional scene-level hook run once, before the objects' `start` hooks.
pub type StartHook = Box<dyn FnMut(&mut dyn Canvas2d) -> Result<(), CanvasError>>;

/// A renderable, updatable collection of game objects.
///
/// Objects keep their insertion order for `start` and `update`; `draw`
/// orders a copy by layer each frame without disturbing it. At most one
/// scene should be the active run-loop target at a time.
pub struct Scene {
    /// Background fill, any CSS color string. Passed through to the
    /// fill-style API unvalidated.
    pub background_color: String,
    /// Width of the logical coordinate space; [`COORDS_DISABLED`] (or any
    /// non-positive value) draws directly in canvas pixels.
    pub logical_width: f64,
    /// Height/width ratio of the logical space; [`COORDS_DISABLED`] (or any
    /// non-positive value) disables logical coordinates.
    pub aspect_ratio: f64,
    /// View transform applied to the whole scene, innermost in the
    /// transform composition. Read every frame, never mutated by the scene.
    pub camera: Camera,
    objects: Vec<Box<dyn GameObject>>,
    has_started: bool,
    on_start: Option<StartHook>,
}

impl Scene {
    /// Create an empty scene with the given background color.
    ///
    /// Logical coordinates start disabled and the camera starts at the
    /// identity view.
    #[must_use]
    pub fn new(background_color: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
            logical_width: COORDS_DISABLED,
            aspect_ratio: COORDS_DISABLED,
            camera: Camera::default(),
            objects: Vec::new(),
            has_started: false,
            on_start: None,
        }
    }

    /// Author the scene in a logical coordinate space.
    ///
    /// Each frame the logical rectangle (`logical_width` wide, with the
    /// given height/width `aspect_ratio`) is scaled uniformly to fit the
    /// canvas, centered, with black bars covering the remainder.
    pub fn use_logical_coordinates(&mut self, logical_width: f64, aspect_ratio: f64) {
        self.logical_width = logical_width;
        self.aspect_ratio = aspect_ratio;
    }

    /// Install the scene-level start hook.
    pub fn set_start_hook(
        &mut self,
        hook: impl FnMut(&mut dyn Canvas2d) -> Result<(), CanvasError> + 'static,
    ) {
        self.on_start = Some(Box::new(hook));
    }

    /// Append an object. Insertion order is the `start`/`update` order.
    pub fn add(&mut self, object: impl GameObject + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Number of objects in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether the one-time start pass has run.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.has_started
    }

    /// Run the one-time start pass: the scene hook first, then every
    /// object's `start` in insertion order. No-op on every call after the
    /// first — the gate flips before the hooks run and never resets, so a
    /// faulting hook is not retried.
    ///
    /// # Errors
    ///
    /// Propagates the first hook fault; later objects do not start.
    pub fn start(&mut self, ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        if self.has_started {
            return Ok(());
        }
        self.has_started = true;

        if let Some(hook) = &mut self.on_start {
            hook(ctx)?;
        }
        for object in &mut self.objects {
            object.start(ctx)?;
        }
        Ok(())
    }

    /// Run every object's `update` in insertion order. No filtering, no
    /// sorting.
    ///
    /// # Errors
    ///
    /// Propagates the first object fault; later objects are skipped for
    /// this call.
    pub fn update(&mut self, ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        for object in &mut self.objects {
            object.update(ctx)?;
        }
        Ok(())
    }

    /// Render one frame.
    ///
    /// Clears to the background color, saves the context state, applies the
    /// letterbox mapping (when logical coordinates are enabled) and then the
    /// camera transform on top of it, draws the objects in ascending layer
    /// order with the glow filter toggled around [`GLOW_LAYER`] objects,
    /// restores the context state, and finally paints the letterbox bars in
    /// unscaled canvas pixels so they cover any overscan.
    ///
    /// Draw order sorts a fresh index list each frame; ties between equal
    /// layers may land in either order, and insertion order is untouched.
    ///
    /// # Errors
    ///
    /// Propagates the first context or object fault, aborting the rest of
    /// the frame.
    pub fn draw(&mut self, ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        let canvas_w = ctx.width();
        let canvas_h = ctx.height();

        ctx.set_fill_style(&self.background_color);
        ctx.fill_rect(0.0, 0.0, canvas_w, canvas_h);

        ctx.save();

        let letterbox =
            Letterbox::compute(canvas_w, canvas_h, self.logical_width, self.aspect_ratio);
        if let Some(fit) = letterbox {
            let (dx, dy) = fit.translation();
            ctx.translate(dx, dy)?;
            ctx.scale(fit.scale, fit.scale)?;
        }

        let view = self.camera.transform;
        ctx.scale(view.scale_x, view.scale_y)?;
        ctx.translate(-view.x, -view.y)?;

        let mut order: Vec<usize> = (0..self.objects.len()).collect();
        order.sort_unstable_by_key(|&i| self.objects[i].layer());

        for &i in &order {
            if self.objects[i].layer() == GLOW_LAYER {
                ctx.set_filter(GLOW_FILTER);
            } else {
                ctx.set_filter(FILTER_NONE);
            }
            self.objects[i].draw(ctx)?;
        }
        ctx.set_filter(FILTER_NONE);

        ctx.restore();

        if let Some(fit) = letterbox {
            ctx.set_fill_style(LETTERBOX_FILL);
            for (x, y, w, h) in fit.bar_rects(canvas_w, canvas_h) {
                ctx.fill_rect(x, y, w, h);
            }
        }

        Ok(())
    }
}
