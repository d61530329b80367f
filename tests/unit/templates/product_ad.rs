use super::*;
use crate::composition::registry::Template as _;
use crate::foundation::core::FrameIndex;
use crate::scene::model::{NodeKind, SceneFrame};
use kurbo::Affine;

fn render_at(frame: u64, props: &ProductAdProps) -> SceneFrame {
    let ctx = ProductAd.spec().frame_ctx(FrameIndex(frame)).unwrap();
    ProductAd.render(ctx, props).unwrap()
}

fn text_content<'a>(scene: &'a SceneFrame, id: &str) -> &'a str {
    match &scene.root.find(id).unwrap_or_else(|| panic!("missing node '{id}'")).kind {
        NodeKind::Text { content, .. } => content,
        other => panic!("'{id}' is not a text node: {other:?}"),
    }
}

#[test]
fn discount_prices_format_to_two_decimals() {
    let props = ProductAd.default_props(); // price 299, discount 0.2
    let scene = render_at(120, &props);
    assert_eq!(text_content(&scene, "price-current"), "$239.20");
    assert_eq!(text_content(&scene, "price-original"), "$299");
    assert_eq!(text_content(&scene, "price-savings"), "Save 20%!");
}

#[test]
fn no_discount_drops_comparison_price() {
    let mut props = ProductAd.default_props();
    props.discount = None;
    let scene = render_at(120, &props);
    assert_eq!(text_content(&scene, "price-current"), "$299.00");
    assert!(scene.root.find("price-original").is_none());
    assert!(scene.root.find("price-savings").is_none());
}

#[test]
fn original_price_is_struck_through() {
    let props = ProductAd.default_props();
    let scene = render_at(120, &props);
    match &scene.root.find("price-original").unwrap().kind {
        NodeKind::Text { strikethrough, .. } => assert!(strikethrough),
        other => panic!("expected text node, got {other:?}"),
    }
}

#[test]
fn exit_scale_is_confined_to_trailing_window() {
    let props = ProductAd.default_props();

    // Identity until the trailing 30 frames (left-clamped ramp).
    assert_eq!(render_at(0, &props).root.transform, Affine::IDENTITY);
    assert_eq!(render_at(180, &props).root.transform, Affine::IDENTITY);
    assert_eq!(render_at(210, &props).root.transform, Affine::IDENTITY);

    // Scaling up inside the window.
    let scale = render_at(239, &props).root.transform.as_coeffs()[0];
    assert!(scale > 1.09, "scale was {scale}");
}

#[test]
fn cta_fades_in_late() {
    let props = ProductAd.default_props();
    assert_eq!(render_at(100, &props).root.find("cta").unwrap().opacity, 0.0);
    let mid = render_at(165, &props).root.find("cta").unwrap().opacity;
    assert!((mid - 0.5).abs() < 1e-12);
    assert_eq!(render_at(200, &props).root.find("cta").unwrap().opacity, 1.0);
}

#[test]
fn title_slides_to_rest() {
    let props = ProductAd.default_props();
    let early = render_at(30, &props);
    assert_eq!(early.root.find("title").unwrap().transform.translation().y, 660.0);
    let rest = render_at(60, &props);
    assert_eq!(rest.root.find("title").unwrap().transform.translation().y, 560.0);
}

#[test]
fn showcase_spring_starts_after_delay() {
    let props = ProductAd.default_props();
    // Before the 15-frame delay the showcase has zero scale.
    let scene = render_at(10, &props);
    assert_eq!(scene.root.find("showcase").unwrap().transform.as_coeffs()[0], 0.0);
    // Well after the delay it has settled near full size.
    let scene = render_at(120, &props);
    let scale = scene.root.find("showcase").unwrap().transform.as_coeffs()[0];
    assert!((scale - 1.0).abs() < 0.05, "scale was {scale}");
}

#[test]
fn showcase_is_present_for_the_whole_timeline() {
    let props = ProductAd.default_props();
    for frame in [0, 120, 239] {
        assert!(render_at(frame, &props).root.find("showcase").is_some());
    }
}

#[test]
fn props_validation_helper() {
    let mut props = ProductAd.default_props();
    props.validate().unwrap();
    props.discount = Some(1.5);
    assert!(props.validate().is_err());
    props.discount = None;
    props.price = -1.0;
    assert!(props.validate().is_err());
}
