use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};

fn spec() -> TemplateSpec {
    TemplateSpec {
        id: "Test".to_owned(),
        duration: FrameIndex(300),
        fps: Fps { num: 30, den: 1 },
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
    }
}

#[test]
fn frame_ctx_respects_half_open_duration() {
    let s = spec();
    assert!(s.frame_ctx(FrameIndex(0)).is_ok());
    assert!(s.frame_ctx(FrameIndex(299)).is_ok());
    // The final frame index is duration - 1.
    assert!(s.frame_ctx(FrameIndex(300)).is_err());
}

#[test]
fn validate_rejects_degenerate_specs() {
    let mut s = spec();
    s.id = "  ".to_owned();
    assert!(s.validate().is_err());

    let mut s = spec();
    s.duration = FrameIndex(0);
    assert!(s.validate().is_err());

    let mut s = spec();
    s.canvas.width = 0;
    assert!(s.validate().is_err());

    assert!(spec().validate().is_ok());
}

#[test]
fn ctx_helpers() {
    let ctx = spec().frame_ctx(FrameIndex(50)).unwrap();
    assert_eq!(ctx.frame_f64(), 50.0);
    assert_eq!(ctx.elapsed_since(60.0), -10.0);

    let rebased = ctx.rebased(FrameIndex(5));
    assert_eq!(rebased.frame, FrameIndex(5));
    assert_eq!(rebased.duration, FrameIndex(300));
}
