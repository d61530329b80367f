use super::*;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::FramecardError;

#[test]
fn builtin_ids_are_stable_and_unique() {
    let ids: Vec<String> = builtin_templates().iter().map(|t| t.spec().id).collect();
    assert_eq!(ids, ["QuoteCard", "ProductAd", "UserStatsVideo"]);
}

#[test]
fn specs_validate() {
    for template in builtin_templates() {
        template.spec().validate().unwrap();
    }
}

#[test]
fn default_props_render_every_template_at_frame_zero() {
    for template in builtin_templates() {
        let scene = template.render_json(FrameIndex(0), None).unwrap();
        assert_eq!(scene.frame, FrameIndex(0));
        assert_eq!(scene.canvas, template.spec().canvas);
    }
}

#[test]
fn render_rejects_out_of_bounds_frames() {
    for template in builtin_templates() {
        let duration = template.spec().duration;
        let err = template.render_json(duration, None).unwrap_err();
        assert!(matches!(err, FramecardError::Evaluation(_)));
        // Last valid frame still renders.
        template
            .render_json(FrameIndex(duration.0 - 1), None)
            .unwrap();
    }
}

#[test]
fn render_rejects_malformed_props() {
    let template = find_template("QuoteCard").unwrap();
    let bad = serde_json::json!({"quote": 42});
    let err = template.render_json(FrameIndex(0), Some(&bad)).unwrap_err();
    assert!(matches!(err, FramecardError::Serde(_)));
}

#[test]
fn find_template_by_id() {
    assert!(find_template("ProductAd").is_ok());
    assert!(matches!(
        find_template("Nope"),
        Err(FramecardError::Validation(_))
    ));
}
