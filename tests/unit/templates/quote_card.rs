use super::*;
use crate::composition::registry::Template as _;
use crate::foundation::core::FrameIndex;
use crate::scene::model::{Fill, NodeKind};

fn render_at(frame: u64, props: &QuoteCardProps) -> crate::scene::model::SceneFrame {
    let ctx = QuoteCard.spec().frame_ctx(FrameIndex(frame)).unwrap();
    QuoteCard.render(ctx, props).unwrap()
}

#[test]
fn quote_fades_in_over_thirty_frames() {
    let props = QuoteCard.default_props();
    assert_eq!(render_at(0, &props).root.find("quote").unwrap().opacity, 0.0);
    let mid = render_at(15, &props).root.find("quote").unwrap().opacity;
    assert!((mid - 0.5).abs() < 1e-12);
    // Right-clamped: fully opaque for the rest of the timeline.
    assert_eq!(render_at(30, &props).root.find("quote").unwrap().opacity, 1.0);
    assert_eq!(render_at(179, &props).root.find("quote").unwrap().opacity, 1.0);
}

#[test]
fn author_holds_pre_spring_offset_then_settles() {
    let props = QuoteCard.default_props();

    // Spring delayed by 60 frames: before that the offset stays at 50px.
    let before = render_at(40, &props);
    let ty = before.root.find("author").unwrap().transform.translation().y;
    assert_eq!(ty, 670.0); // 620 baseline + 50 offset

    // Two seconds into the spring the author has settled near baseline.
    let after = render_at(120, &props);
    let ty = after.root.find("author").unwrap().transform.translation().y;
    assert!((ty - 620.0).abs() < 5.0, "author at y={ty}");
}

#[test]
fn decorative_circles_ramp_independently() {
    let props = QuoteCard.default_props();
    let scene = render_at(30, &props);
    let top = scene.root.find("deco-top-left").unwrap().opacity;
    let bottom = scene.root.find("deco-bottom-right").unwrap().opacity;
    assert!((top - 0.35).abs() < 1e-12);
    assert_eq!(bottom, 0.0);
}

#[test]
fn themes_swap_background_and_text_color() {
    let mut props = QuoteCard.default_props();

    props.theme = QuoteTheme::Dark;
    let scene = render_at(0, &props);
    match &scene.root.find("background").unwrap().kind {
        NodeKind::Shape {
            fill: Fill::Solid(_),
            ..
        } => {}
        other => panic!("dark theme should use a solid fill, got {other:?}"),
    }

    props.theme = QuoteTheme::Gradient;
    let scene = render_at(0, &props);
    match &scene.root.find("background").unwrap().kind {
        NodeKind::Shape {
            fill: Fill::LinearGradient { angle_deg, .. },
            ..
        } => assert_eq!(*angle_deg, 135.0),
        other => panic!("gradient theme should use a gradient fill, got {other:?}"),
    }

    props.theme = QuoteTheme::Minimal;
    let scene = render_at(0, &props);
    match &scene.root.find("quote").unwrap().kind {
        NodeKind::Text { color, .. } => {
            assert_eq!(*color, crate::scene::color::Color::from_rgb8(0x2c, 0x3e, 0x50));
        }
        other => panic!("expected text node, got {other:?}"),
    }
}

#[test]
fn quote_text_is_wrapped_in_quotation_marks() {
    let props = QuoteCard.default_props();
    let scene = render_at(0, &props);
    match &scene.root.find("quote").unwrap().kind {
        NodeKind::Text { content, .. } => {
            assert!(content.starts_with('"') && content.ends_with('"'));
        }
        other => panic!("expected text node, got {other:?}"),
    }
}

#[test]
fn props_validation_helper() {
    let mut props = QuoteCard.default_props();
    props.validate().unwrap();
    props.quote = "   ".to_owned();
    assert!(props.validate().is_err());
}
