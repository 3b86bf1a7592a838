//! Pixel-raster to complex-plane mapping.

use std::fmt;

use crate::fixed::Real;

/// The rectangular region of the complex plane mapped onto the raster.
///
/// Control-surface state (center, step) lives in `f64`; a frame snapshots
/// it into the numeric backend once via [`PlaneMap`] and stays there for
/// the whole scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub center_re: f64,
    pub center_im: f64,
    /// Complex-plane distance between adjacent pixels. Strictly positive.
    pub step_size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportError {
    ZeroWidth,
    ZeroHeight,
    /// `step_size` was zero, negative, or NaN — a degenerate region.
    BadStepSize,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "viewport width must be positive"),
            Self::ZeroHeight => write!(f, "viewport height must be positive"),
            Self::BadStepSize => write!(f, "viewport step size must be strictly positive"),
        }
    }
}

impl std::error::Error for ViewportError {}

impl Viewport {
    pub fn validate(&self) -> Result<(), ViewportError> {
        if self.width == 0 {
            return Err(ViewportError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ViewportError::ZeroHeight);
        }
        // NaN fails the comparison too.
        if !(self.step_size > 0.0) {
            return Err(ViewportError::BadStepSize);
        }
        Ok(())
    }
}

/// Frame-local snapshot of a [`Viewport`] in the backend's domain.
///
/// Bounds are derived once per frame with backend multiplies, so the hot
/// loop never re-derives floating bounds per pixel. Half-extents use the
/// truncated pixel count (`width / 2`), keeping the region centered on
/// `(center_re, center_im)` up to one step for odd extents.
#[derive(Clone, Copy, Debug)]
pub struct PlaneMap<N: Real> {
    min_re: N,
    max_im: N,
    step: N,
}

impl<N: Real> PlaneMap<N> {
    pub fn new(vp: &Viewport) -> PlaneMap<N> {
        let step = N::from_f64(vp.step_size);
        let min_re = N::from_f64(vp.center_re) - step * N::from_f64((vp.width / 2) as f64);
        let min_im = N::from_f64(vp.center_im) - step * N::from_f64((vp.height / 2) as f64);
        let max_im = min_im + step * N::from_f64(vp.height as f64);
        PlaneMap { min_re, max_im, step }
    }

    /// Complex value of pixel `(x, y)`. Row 0 maps to the top of the
    /// region (maximum imaginary part): the raster origin is top-left
    /// while the imaginary axis grows upward.
    pub fn point_at(&self, x: u32, y: u32) -> (N, N) {
        let re = self.min_re + N::from_f64(x as f64) * self.step;
        let im = self.max_im - N::from_f64(y as f64) * self.step;
        (re, im)
    }
}
