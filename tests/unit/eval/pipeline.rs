use super::*;
use crate::composition::registry::find_template;
use crate::foundation::core::{FrameIndex, FrameRange};

#[test]
fn sequential_range_preserves_timeline_order() {
    let template = find_template("QuoteCard").unwrap();
    let range = FrameRange::new(FrameIndex(10), FrameIndex(13)).unwrap();
    let scenes =
        render_frames(template.as_ref(), range, None, &RenderThreading::default()).unwrap();
    let frames: Vec<u64> = scenes.iter().map(|s| s.frame.0).collect();
    assert_eq!(frames, [10, 11, 12]);
}

#[test]
fn empty_range_is_rejected() {
    let template = find_template("QuoteCard").unwrap();
    let range = FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap();
    assert!(render_frames(template.as_ref(), range, None, &RenderThreading::default()).is_err());
}

#[test]
fn range_beyond_duration_is_rejected() {
    let template = find_template("QuoteCard").unwrap();
    let range = FrameRange::new(FrameIndex(0), FrameIndex(181)).unwrap();
    assert!(render_frames(template.as_ref(), range, None, &RenderThreading::default()).is_err());
}

#[test]
fn parallel_matches_sequential() {
    let template = find_template("UserStatsVideo").unwrap();
    let range = FrameRange::new(FrameIndex(80), FrameIndex(100)).unwrap();

    let sequential =
        render_frames(template.as_ref(), range, None, &RenderThreading::default()).unwrap();
    let parallel = render_frames(
        template.as_ref(),
        range,
        None,
        &RenderThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn single_frame_helper_uses_default_props() {
    let template = find_template("ProductAd").unwrap();
    let scene = render_frame(template.as_ref(), FrameIndex(0), None).unwrap();
    assert_eq!(scene.frame, FrameIndex(0));
}
