//! Half-block ANSI truecolor output.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper-half
//! block glyph takes the top pixel as foreground and the bottom pixel as
//! background. The raster handed to [`HalfBlockRenderer::render`] must
//! therefore be `cols` wide and `2 * visual_rows` tall.

use std::io::Write;

/// One frame's worth of pixels plus the status line.
pub struct Frame<'a> {
    pub term_cols: u16,
    pub visual_rows: u16,
    pub pixel_width: usize,
    pub pixel_height: usize,
    pub pixels_rgba: &'a [u8],
    pub hud: &'a str,
    /// Wrap the paint in a synchronized-output block (DEC 2026) so
    /// terminals that support it present the frame atomically.
    pub sync_updates: bool,
}

pub struct HalfBlockRenderer {
    last_fg: Option<(u8, u8, u8)>,
    last_bg: Option<(u8, u8, u8)>,
}

impl Default for HalfBlockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HalfBlockRenderer {
    pub fn new() -> Self {
        Self {
            last_fg: None,
            last_bg: None,
        }
    }

    pub fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        let cols = frame.term_cols as usize;
        let visual_rows = frame.visual_rows as usize;
        let w = frame.pixel_width;
        let h = frame.pixel_height;

        if cols == 0 || visual_rows == 0 || w == 0 || h == 0 {
            return Ok(());
        }
        if w != cols || h != visual_rows.saturating_mul(2) {
            // Raster doesn't match the terminal (mid-resize); skip rather
            // than index out of bounds.
            return Ok(());
        }
        if frame.pixels_rgba.len() < w.saturating_mul(h).saturating_mul(4) {
            return Ok(());
        }

        if frame.sync_updates {
            out.write_all(b"\x1b[?2026h")?;
        }

        // Home, reset attributes, and disable autowrap while painting
        // full-width rows; some terminals wrap on the last column
        // otherwise and the newline tears the image.
        out.write_all(b"\x1b[H\x1b[0m\x1b[?7l")?;
        self.last_fg = None;
        self.last_bg = None;

        const HALF_BLOCK: char = '\u{2580}';

        for row in 0..visual_rows {
            let top_y = row * 2;
            let bot_y = top_y + 1;
            for x in 0..cols {
                let top = pixel_rgb(frame.pixels_rgba, w, x, top_y);
                let bot = pixel_rgb(frame.pixels_rgba, w, x, bot_y);

                if self.last_fg != Some(top) {
                    write!(out, "\x1b[38;2;{};{};{}m", top.0, top.1, top.2)?;
                    self.last_fg = Some(top);
                }
                if self.last_bg != Some(bot) {
                    write!(out, "\x1b[48;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    self.last_bg = Some(bot);
                }
                write!(out, "{HALF_BLOCK}")?;
            }
            out.write_all(b"\r\n")?;
        }

        // Status line under the image, truncated on a character boundary
        // so multi-byte HUD text never splits mid-codepoint.
        write!(out, "\x1b[{};1H\x1b[0m\x1b[2K", visual_rows + 1)?;
        let mut hud = frame.hud;
        if let Some((end, _)) = hud.char_indices().nth(cols) {
            hud = &hud[..end];
        }
        write!(out, "{hud}")?;

        out.write_all(b"\x1b[?7h")?;
        if frame.sync_updates {
            out.write_all(b"\x1b[?2026l")?;
        }
        out.flush()?;
        Ok(())
    }
}

fn pixel_rgb(rgba: &[u8], w: usize, x: usize, y: usize) -> (u8, u8, u8) {
    let i = (y * w + x) * 4;
    (rgba[i], rgba[i + 1], rgba[i + 2])
}
