//! Pan/zoom view state and the per-frame command transition.
//!
//! The engine never sees input events; the driver decodes at most one
//! discrete command per frame and applies it here. Transitions are pure:
//! `apply` returns the successor state and `tick` advances the automatic
//! zoom, so a frame's viewport is always rebuilt from an explicit state
//! value.

use crate::viewport::Viewport;

/// Plane distance per pixel at zoom 1 on a 500-pixel-tall raster.
pub const BASE_STEP: f64 = 0.01;
pub const REF_HEIGHT: f64 = 500.0;

/// Pan distance per command in plane units at zoom 1; quantized to whole
/// pixels and rescaled by the current step, so the on-screen pan fraction
/// stays constant while the plane distance shrinks as zoom grows.
const PAN_DISTANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleZoom,
    Reset,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub center_re: f64,
    pub center_im: f64,
    pub zoom: u32,
    pub zoom_enabled: bool,
    /// Center restored by `Command::Reset`.
    pub home_re: f64,
    pub home_im: f64,
}

impl ViewState {
    pub fn new(center_re: f64, center_im: f64) -> ViewState {
        ViewState {
            center_re,
            center_im,
            zoom: 1,
            zoom_enabled: false,
            home_re: center_re,
            home_im: center_im,
        }
    }

    /// Plane distance per pixel at the current zoom level, scaled so a
    /// taller raster keeps the same plane extent per screen.
    pub fn step_size(&self, height: u32) -> f64 {
        BASE_STEP / ((height.max(1) as f64 / REF_HEIGHT) * self.zoom as f64)
    }

    /// Apply one command. Pans move by a fixed pixel count (derived from
    /// the zoom-1 step) times the current step, so a pan covers the same
    /// screen fraction at every zoom level. Unknown input never reaches
    /// here; the driver drops it.
    pub fn apply(&self, cmd: Command, height: u32) -> ViewState {
        let mut next = *self;
        let base_step = BASE_STEP / (height.max(1) as f64 / REF_HEIGHT);
        let pan_pixels = (PAN_DISTANCE / base_step).floor();
        let shift = pan_pixels * self.step_size(height);
        match cmd {
            Command::ToggleZoom => next.zoom_enabled = !next.zoom_enabled,
            Command::Reset => {
                next.zoom = 1;
                next.zoom_enabled = false;
                next.center_re = next.home_re;
                next.center_im = next.home_im;
            }
            Command::PanLeft => next.center_re -= shift,
            Command::PanRight => next.center_re += shift,
            Command::PanUp => next.center_im += shift,
            Command::PanDown => next.center_im -= shift,
        }
        next
    }

    /// Per-frame automatic zoom advance.
    pub fn tick(&self) -> ViewState {
        let mut next = *self;
        if next.zoom_enabled {
            next.zoom += 1;
        }
        next
    }

    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        Viewport {
            width,
            height,
            center_re: self.center_re,
            center_im: self.center_im,
            step_size: self.step_size(height),
        }
    }
}
