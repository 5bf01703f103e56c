//! Canvas 2D rendering module
//!
//! Draws the stage (scrolling sky, sprites) and the active scene's text.

pub mod canvas;

pub use canvas::CanvasRenderer;
