use fixbrot::view::{Command, ViewState, BASE_STEP};

const HEIGHT: u32 = 500;

fn state() -> ViewState {
    ViewState::new(-0.76, -0.102)
}

#[test]
fn step_size_follows_zoom_and_height() {
    let mut s = state();
    assert!((s.step_size(500) - BASE_STEP).abs() < 1e-12);
    // Doubling the raster height halves the per-pixel step.
    assert!((s.step_size(1000) - BASE_STEP / 2.0).abs() < 1e-12);
    s.zoom = 4;
    assert!((s.step_size(500) - BASE_STEP / 4.0).abs() < 1e-12);
}

#[test]
fn toggle_zoom_flips_and_restores() {
    let s = state();
    let on = s.apply(Command::ToggleZoom, HEIGHT);
    assert!(on.zoom_enabled);
    let off = on.apply(Command::ToggleZoom, HEIGHT);
    assert_eq!(off, s);
}

#[test]
fn tick_advances_zoom_only_when_enabled() {
    let s = state();
    assert_eq!(s.tick().zoom, 1);
    let on = s.apply(Command::ToggleZoom, HEIGHT);
    assert_eq!(on.tick().zoom, 2);
    assert_eq!(on.tick().tick().zoom, 3);
}

#[test]
fn reset_is_idempotent() {
    let mut s = state();
    s = s.apply(Command::ToggleZoom, HEIGHT);
    s = s.tick().tick().tick();
    s = s.apply(Command::PanRight, HEIGHT);
    s = s.apply(Command::PanDown, HEIGHT);

    let once = s.apply(Command::Reset, HEIGHT);
    let twice = once.apply(Command::Reset, HEIGHT);
    assert_eq!(once, twice);
    assert_eq!(once.zoom, 1);
    assert!(!once.zoom_enabled);
    assert_eq!((once.center_re, once.center_im), (-0.76, -0.102));
}

#[test]
fn pan_distance_shrinks_with_zoom() {
    // At zoom 1 on the reference height a pan is 10 pixels of 0.01 each;
    // at zoom 5 the same 10 pixels cover a fifth of the plane distance.
    let s = state();
    let panned = s.apply(Command::PanRight, HEIGHT);
    assert!((panned.center_re - s.center_re - 0.1).abs() < 1e-9);

    let mut zoomed = s;
    zoomed.zoom = 5;
    let panned = zoomed.apply(Command::PanRight, HEIGHT);
    assert!((panned.center_re - s.center_re - 0.02).abs() < 1e-9);
}

#[test]
fn pan_directions_match_the_plane_axes() {
    let s = state();
    assert!(s.apply(Command::PanLeft, HEIGHT).center_re < s.center_re);
    assert!(s.apply(Command::PanRight, HEIGHT).center_re > s.center_re);
    // Panning up moves toward larger imaginary parts.
    assert!(s.apply(Command::PanUp, HEIGHT).center_im > s.center_im);
    assert!(s.apply(Command::PanDown, HEIGHT).center_im < s.center_im);
}

#[test]
fn viewport_snapshot_carries_the_current_step() {
    let mut s = state();
    s.zoom = 2;
    let vp = s.viewport(640, 500);
    assert_eq!((vp.width, vp.height), (640, 500));
    assert_eq!((vp.center_re, vp.center_im), (s.center_re, s.center_im));
    assert!((vp.step_size - BASE_STEP / 2.0).abs() < 1e-12);
    vp.validate().expect("snapshot should be valid");
}
