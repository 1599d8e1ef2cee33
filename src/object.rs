//! The game-object contract between a scene and the things it runs.
//!
//! A scene is an ordered collection of game objects, opaque to it beyond
//! this trait. Objects opt into lifecycle hooks selectively: every hook has
//! a default no-op body, so a background that only draws, or a timer that
//! only updates, implements exactly the methods it needs and the scene
//! skips the rest.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use crate::context::{Canvas2d, CanvasError};

/// A single object living inside a [`crate::scene::Scene`].
///
/// Only [`layer`](GameObject::layer) is required. The scene invokes `start`
/// once (on the first scene start), then `update` and `draw` once per frame.
/// Hooks that return `Err` abort the remainder of that frame's pass.
///
/// Objects that have a position own a [`crate::camera::Transform`] as an
/// ordinary field; the scene itself never reads it.
///
/// ```
/// use scene2d::context::{Canvas2d, CanvasError};
/// use scene2d::camera::Transform;
/// use scene2d::object::GameObject;
///
/// struct Crate {
///     transform: Transform,
/// }
///
/// impl GameObject for Crate {
///     fn layer(&self) -> i32 {
///         2
///     }
///
///     fn update(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
///         self.transform.x += 1.0;
///         Ok(())
///     }
///
///     fn draw(&mut self, ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
///         ctx.set_fill_style("peru");
///         ctx.fill_rect(self.transform.x, self.transform.y, 1.0, 1.0);
///         Ok(())
///     }
/// }
/// ```
pub trait GameObject {
    /// Draw-order key, ascending (higher layers draw on top).
    ///
    /// [`crate::consts::GLOW_LAYER`] (`-1`) is reserved: objects on it are
    /// drawn with the glow filter enabled.
    fn layer(&self) -> i32;

    /// Called once when the scene starts.
    ///
    /// # Errors
    ///
    /// An `Err` aborts the scene's start pass; later objects do not start.
    fn start(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        Ok(())
    }

    /// Called once per frame before drawing.
    ///
    /// # Errors
    ///
    /// An `Err` aborts the frame's update pass.
    fn update(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        Ok(())
    }

    /// Called once per frame in layer order.
    ///
    /// The context arrives with the viewport and camera transforms already
    /// applied, so coordinates here are logical (or world) coordinates.
    ///
    /// # Errors
    ///
    /// An `Err` aborts the frame's draw pass.
    fn draw(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        Ok(())
    }
}
