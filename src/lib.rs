//! A minimal 2D scene/game-object framework for browser canvas games.
//!
//! This crate is compiled to WebAssembly and runs in the browser. A game is
//! a [`scene::Scene`] holding an ordered collection of [`object::GameObject`]s
//! and a [`camera::Camera`]; the host page's `requestAnimationFrame` loop
//! drives one [`engine::Engine::frame`] per frame. Scenes can be authored in
//! a fixed logical coordinate space that is letterboxed onto the physical
//! canvas with the aspect ratio preserved.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | The scene and its start/update/draw loop |
//! | [`object`] | The [`object::GameObject`] lifecycle contract |
//! | [`camera`] | Pan/zoom view transform and coordinate conversions |
//! | [`viewport`] | Letterbox/pillarbox fit from logical to canvas pixels |
//! | [`context`] | The [`context::Canvas2d`] drawing surface and browser adapter |
//! | [`input`] | Keyboard state fed by the host's DOM handlers |
//! | [`engine`] | Glue binding a scene to a canvas element |
//! | [`consts`] | Shared constants (glow layer, filter strings, sentinels) |

pub mod camera;
pub mod consts;
pub mod context;
pub mod engine;
pub mod input;
pub mod object;
pub mod scene;
pub mod viewport;

#[cfg(test)]
pub(crate) mod testutil;
