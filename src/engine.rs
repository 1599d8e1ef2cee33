//! Browser glue: binds a scene to a real canvas element.
//!
//! The host page owns the run-loop (`requestAnimationFrame`) and the DOM
//! event wiring; this type owns everything on the Rust side of that line.
//! Each animation frame the host calls [`Engine::frame`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use web_sys::HtmlCanvasElement;

use crate::context::{Canvas2d, CanvasError, Html2d};
use crate::scene::Scene;

/// Run one frame of `scene` against any drawing surface: the (self-gating)
/// start pass, then update, then draw.
///
/// [`Engine::frame`] delegates here; hosts with their own context handling
/// can call it directly.
///
/// # Errors
///
/// Propagates the first context or object fault; the rest of the frame is
/// abandoned.
pub fn run_frame(scene: &mut Scene, ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
    scene.start(ctx)?;
    scene.update(ctx)?;
    scene.draw(ctx)
}

/// A scene bound to a browser canvas.
pub struct Engine {
    ctx: Html2d,
    scene: Scene,
}

impl Engine {
    /// Bind `scene` to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, scene: Scene) -> Result<Self, CanvasError> {
        Ok(Self { ctx: Html2d::from_canvas(canvas)?, scene })
    }

    /// The running scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the running scene (camera moves, adding objects).
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Run one frame: the scene's (self-gating) start pass, then update,
    /// then draw.
    ///
    /// # Errors
    ///
    /// Propagates the first context or object fault; the rest of the frame
    /// is abandoned.
    pub fn frame(&mut self) -> Result<(), CanvasError> {
        run_frame(&mut self.scene, &mut self.ctx)
    }
}
