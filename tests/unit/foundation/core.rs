use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_from_start_len() {
    let r = FrameRange::from_start_len(FrameIndex(90), 120);
    assert_eq!(r.start, FrameIndex(90));
    assert_eq!(r.end, FrameIndex(210));
    assert_eq!(r.len_frames(), 120);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_clamp_stays_inside() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(10));
    assert_eq!(r.clamp(FrameIndex(15)), FrameIndex(15));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(19));
}

#[test]
fn fps_conversions() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.as_f64(), 30.0);
    assert_eq!(fps.frames_to_secs(30.0), 1.0);
    assert_eq!(fps.frame_duration_secs(), 1.0 / 30.0);
}

#[test]
fn fps_rejects_zero_components() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn canvas_center() {
    let c = Canvas {
        width: 1920,
        height: 1080,
    };
    assert_eq!(c.center(), Point::new(960.0, 540.0));
}
