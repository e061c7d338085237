use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(80, 40).unwrap();
    assert_eq!(c.center(), Point::new(40.0, 20.0));
}

#[test]
fn frame_counter_phase_wraps_with_period() {
    let mut f = FrameCounter(178);
    assert_eq!(f.phase(180), 178);
    f.advance();
    f.advance();
    assert_eq!(f.phase(180), 0);
    assert_eq!(FrameCounter(5).phase(0), 0);
}

#[test]
fn frame_counter_advance_wraps_at_max() {
    let mut f = FrameCounter(u64::MAX);
    f.advance();
    assert_eq!(f.get(), 0);
}

#[test]
fn hex_and_alpha_match_css() {
    let c = Rgba8::hex(0x10b981);
    assert_eq!(c, Rgba8::rgb(16, 185, 129));
    assert_eq!(Rgba8::WHITE.with_alpha(0.3).a, 77);
    assert_eq!(Rgba8::WHITE.with_alpha(2.0).a, 255);
}

#[test]
fn premul_scales_channels() {
    assert_eq!(Rgba8::rgba(255, 128, 0, 255).to_premul(), [255, 128, 0, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(200, 100, 50, 128).to_premul(), [100, 50, 25, 128]);
}
