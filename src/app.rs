//! Interactive driver: event pump, view-state updates, frame pacing.
//!
//! The driver owns everything the core does not: the terminal, the key
//! decoding, and the RGBA scratch buffer. Each loop turn consumes at most
//! one view command, advances the auto-zoom, rebuilds the viewport from
//! the view state, runs one full scan through the engine, and paints it.

use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::color::{channels, color_of};
use crate::config::{Backend, Config, Mode};
use crate::engine::{render_frame, FrameError, FrameParams, Recurrence};
use crate::fixed::{Fixed, Real};
use crate::render::{Frame, HalfBlockRenderer};
use crate::terminal::TerminalGuard;
use crate::view::{Command, ViewState};
use crate::viewport::Viewport;

/// Rows reserved under the image for the status line.
const HUD_ROWS: u16 = 1;

pub fn run(cfg: Config) -> anyhow::Result<()> {
    let _term = TerminalGuard::new()?;
    let mut out = BufWriter::new(TerminalGuard::stdout());
    let mut renderer = HalfBlockRenderer::new();

    let (mut term_cols, mut term_rows) =
        crossterm::terminal::size().context("get terminal size")?;
    if term_cols < 4 || term_rows < 2 {
        anyhow::bail!("terminal too small (need at least 4x2, got {term_cols}x{term_rows})");
    }

    let recurrence = match cfg.mode {
        Mode::Mandelbrot => Recurrence::Mandelbrot,
        Mode::Julia => Recurrence::Julia {
            k_re: cfg.k_re,
            k_im: cfg.k_im,
        },
    };
    let params = FrameParams {
        max_iterations: cfg.max_iterations,
    };

    let (center_re, center_im) = cfg.center();
    let mut state = ViewState::new(center_re, center_im);

    let frame_budget = Duration::from_secs_f64(1.0 / cfg.fps.max(1) as f64);
    let mut pixels: Vec<u8> = Vec::new();

    loop {
        let frame_start = Instant::now();

        // At most one view command per frame; quit and resize are always
        // honored.
        let mut command = None;
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => {
                    if k.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(k.code, KeyCode::Char('c'))
                    {
                        return Ok(());
                    }
                    match decode_key(k.code) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::View(cmd) => {
                            if command.is_none() {
                                command = Some(cmd);
                            }
                        }
                        KeyAction::None => {}
                    }
                }
                Event::Resize(c, r) => {
                    term_cols = c;
                    term_rows = r;
                }
                _ => {}
            }
        }

        let cols = cfg.width.unwrap_or(term_cols as u32).min(term_cols as u32);
        let visual_rows = visual_rows_for(cfg.height, term_rows);
        let raster_w = cols;
        let raster_h = visual_rows * 2;

        if let Some(cmd) = command {
            state = state.apply(cmd, raster_h);
        }
        state = state.tick();

        let viewport = state.viewport(raster_w, raster_h);
        pixels.resize((raster_w as usize) * (raster_h as usize) * 4, 0);

        let computed = match cfg.backend {
            Backend::Fixed => compute_pixels::<Fixed>(&viewport, params, recurrence, &mut pixels),
            Backend::Float => compute_pixels::<f64>(&viewport, params, recurrence, &mut pixels),
        };

        // A frame that fails validation (degenerate raster mid-resize) is
        // skipped; the previous frame stays on screen.
        if computed.is_ok() {
            let hud = format!(
                "{} ({:?}) | zoom {}{} | cRe {:.6} cIm {:.6} | q quit  z auto-zoom  r reset  wasd/arrows pan",
                cfg.mode.label(),
                cfg.backend,
                state.zoom,
                if state.zoom_enabled { "+" } else { "" },
                state.center_re,
                state.center_im,
            );
            let frame = Frame {
                term_cols: raster_w as u16,
                visual_rows: visual_rows as u16,
                pixel_width: raster_w as usize,
                pixel_height: raster_h as usize,
                pixels_rgba: &pixels,
                hud: &hud,
                sync_updates: cfg.sync_updates,
            };
            renderer.render(&frame, &mut out)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}

/// Terminal rows available for the image. Each half-block cell holds two
/// pixel rows, so an explicit height override is rounded down to whole
/// cells — never up past what the user asked for.
pub fn visual_rows_for(height_override: Option<u32>, term_rows: u16) -> u32 {
    let available = term_rows.saturating_sub(HUD_ROWS) as u32;
    height_override.map(|h| h / 2).unwrap_or(available).min(available)
}

enum KeyAction {
    Quit,
    View(Command),
    None,
}

fn decode_key(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('z') | KeyCode::Char('Z') => KeyAction::View(Command::ToggleZoom),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::View(Command::Reset),
        KeyCode::Char('a') | KeyCode::Left => KeyAction::View(Command::PanLeft),
        KeyCode::Char('d') | KeyCode::Right => KeyAction::View(Command::PanRight),
        KeyCode::Char('w') | KeyCode::Up => KeyAction::View(Command::PanUp),
        KeyCode::Char('s') | KeyCode::Down => KeyAction::View(Command::PanDown),
        // Anything else is a no-op, not an error.
        _ => KeyAction::None,
    }
}

/// Run one scan and write packed colors into the RGBA raster.
fn compute_pixels<N: Real>(
    viewport: &Viewport,
    params: FrameParams,
    recurrence: Recurrence,
    pixels: &mut [u8],
) -> Result<(), FrameError> {
    let w = viewport.width as usize;
    render_frame::<N, _>(viewport, params, recurrence, |x, y, outcome| {
        let (r, g, b) = channels(color_of(outcome, params.max_iterations));
        let i = (y as usize * w + x as usize) * 4;
        pixels[i] = r;
        pixels[i + 1] = g;
        pixels[i + 2] = b;
        pixels[i + 3] = 255;
    })
}
