//! Escape-time fractal rendering on fixed-point arithmetic.
//!
//! The core (`fixed`, `viewport`, `engine`, `color`, `view`) is pure: it
//! maps pixels to the complex plane, iterates `z <- z^2 + c` in Q4.29 or
//! `f64`, and turns iteration counts into packed colors. The driver
//! (`app`, `terminal`, `render`) hosts it in a terminal with half-block
//! truecolor output and wasd/zoom navigation.

pub mod app;
pub mod color;
pub mod config;
pub mod engine;
pub mod fixed;
pub mod render;
pub mod terminal;
pub mod view;
pub mod viewport;
