//! Camera and transform types for pan/zoom over the game world.
//!
//! The camera is owned by the [`crate::scene::Scene`] and injected into the
//! draw pass — there is no process-wide singleton, so tests can supply a
//! fixed transform. `Scene::draw` composes the camera on top of the viewport
//! mapping as `scale(scale_x, scale_y)` then `translate(-x, -y)`; the
//! conversion helpers here invert exactly that composition.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in either view or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position and scale of an entity in world space.
///
/// Game objects own one of these as an ordinary field; the camera exposes one
/// for the whole view. Identity is position `(0, 0)` at scale `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space x position.
    pub x: f64,
    /// World-space y position.
    pub y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, scale_x: 1.0, scale_y: 1.0 }
    }
}

impl Transform {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }
}

/// View transform applied to the whole scene each frame.
///
/// `transform.x` / `transform.y` pan the view (in logical coordinates when
/// the scene uses them, otherwise in canvas pixels); `scale_x` / `scale_y`
/// zoom it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub transform: Transform,
}

impl Camera {
    /// Move the camera by `(dx, dy)` in world units.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.transform.x += dx;
        self.transform.y += dy;
    }

    /// Set a uniform zoom factor on both axes.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.transform.scale_x = zoom;
        self.transform.scale_y = zoom;
    }

    /// Convert a world-space point to view coordinates.
    #[must_use]
    pub fn world_to_view(&self, world: Point) -> Point {
        Point {
            x: (world.x - self.transform.x) * self.transform.scale_x,
            y: (world.y - self.transform.y) * self.transform.scale_y,
        }
    }

    /// Convert a view-space point back to world coordinates.
    #[must_use]
    pub fn view_to_world(&self, view: Point) -> Point {
        Point {
            x: view.x / self.transform.scale_x + self.transform.x,
            y: view.y / self.transform.scale_y + self.transform.y,
        }
    }
}
