//! Iteration-count to packed-RGB mapping.
//!
//! Escaped pixels get `count * (2^24 / max_iterations)` as a raw packed
//! 0xRRGGBB value. The integer-division truncation of the unit and the
//! wrapping multiply are part of the mapping's look (visible banding),
//! not defects, and are kept bit-for-bit.

use crate::engine::Outcome;

pub const BLACK: u32 = 0x000000;

/// Packed color step per escape iteration.
pub fn colour_unit(max_iterations: u32) -> u32 {
    if max_iterations == 0 {
        return 0;
    }
    (1u32 << 24) / max_iterations
}

/// Map a pixel outcome to a packed 0xRRGGBB value. Bounded points are
/// black; escaped points ramp monotonically with escape speed.
pub fn color_of(outcome: Outcome, max_iterations: u32) -> u32 {
    if outcome.escaped {
        outcome.count.wrapping_mul(colour_unit(max_iterations))
    } else {
        BLACK
    }
}

/// Pack separate channels, reducing each modulo 256.
pub fn build_color(r: u32, g: u32, b: u32) -> u32 {
    ((r % 256) << 16) + ((g % 256) << 8) + (b % 256)
}

/// Split a packed value back into `(r, g, b)` bytes for a truecolor sink.
pub fn channels(packed: u32) -> (u8, u8, u8) {
    (
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    )
}
