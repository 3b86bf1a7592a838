//! Escape-time iteration engine.
//!
//! One routine covers all four classic variants (Mandelbrot/Julia, fixed
//! point or `f64`): the recurrence kind is a tagged value and the numeric
//! backend is a type parameter. A frame is a single synchronous row-major
//! scan; pixels are fully independent and the engine holds no state
//! between them.

use std::fmt;

use crate::fixed::Real;
use crate::viewport::{PlaneMap, Viewport, ViewportError};

/// Which complex recurrence a frame iterates.
///
/// Both variants start from `z0 = c` (the mapped pixel). Mandelbrot adds
/// the pixel's own `c` each step; Julia adds the fixed constant `k` and
/// uses the pixel only as the starting point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Recurrence {
    Mandelbrot,
    Julia { k_re: f64, k_im: f64 },
}

/// Frame-constant iteration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameParams {
    pub max_iterations: u32,
}

/// Per-pixel classification.
///
/// `escaped == false` always pairs with `count == max_iterations`: the
/// point used the whole budget without leaving the escape radius and is
/// treated as inside the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub escaped: bool,
    pub count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameError {
    Viewport(ViewportError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(e) => write!(f, "invalid viewport: {e}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<ViewportError> for FrameError {
    fn from(e: ViewportError) -> Self {
        Self::Viewport(e)
    }
}

/// Iterate `z <- z^2 + konst` from `z0 = c` until `|z|^2 > 4` or the
/// budget runs out.
///
/// The escape test compares squared magnitude against the squared radius:
/// exact in fixed point, and never needs a square root. The test runs
/// before each update, so a zero budget classifies every point as bounded
/// without iterating.
pub fn escape_count<N: Real>(c: (N, N), konst: (N, N), max_iterations: u32) -> Outcome {
    let four = N::from_f64(4.0);
    let two = N::from_f64(2.0);

    let (mut re, mut im) = c;
    for n in 0..max_iterations {
        let re2 = re * re;
        let im2 = im * im;
        if re2 + im2 > four {
            return Outcome { escaped: true, count: n };
        }
        // z^2 = (re^2 - im^2) + (2 re im)i
        im = two * (re * im) + konst.1;
        re = re2 - im2 + konst.0;
    }
    Outcome { escaped: false, count: max_iterations }
}

/// Compute one full frame, handing every pixel's outcome to `sink` in
/// row-major order (increasing `y`, then increasing `x`), exactly once
/// per pixel.
///
/// The viewport is validated up front; on rejection nothing is emitted,
/// so a caller can keep its previous frame intact.
pub fn render_frame<N, F>(
    viewport: &Viewport,
    params: FrameParams,
    recurrence: Recurrence,
    mut sink: F,
) -> Result<(), FrameError>
where
    N: Real,
    F: FnMut(u32, u32, Outcome),
{
    viewport.validate()?;

    let map: PlaneMap<N> = PlaneMap::new(viewport);
    let k = match recurrence {
        Recurrence::Mandelbrot => None,
        Recurrence::Julia { k_re, k_im } => Some((N::from_f64(k_re), N::from_f64(k_im))),
    };

    for y in 0..viewport.height {
        for x in 0..viewport.width {
            let c = map.point_at(x, y);
            let konst = k.unwrap_or(c);
            sink(x, y, escape_count(c, konst, params.max_iterations));
        }
    }
    Ok(())
}
