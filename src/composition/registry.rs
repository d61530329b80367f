use crate::composition::spec::TemplateSpec;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramecardError, FramecardResult};
use crate::scene::model::SceneFrame;
use crate::templates::product_ad::ProductAd;
use crate::templates::quote_card::QuoteCard;
use crate::templates::user_stats::UserStatsVideo;

/// A parametrized, frame-driven template with typed props.
///
/// Rendering must be a pure function of `(ctx, props)`: no state outside the
/// arguments is read or mutated, so frames may be evaluated out of order,
/// repeatedly, or in parallel.
pub trait Template {
    /// Prop bundle accepted by this template.
    type Props: serde::Serialize + serde::de::DeserializeOwned;

    /// Invocation contract (id, duration, fps, canvas).
    fn spec(&self) -> TemplateSpec;

    /// Default prop payload registered with the host.
    fn default_props(&self) -> Self::Props;

    /// Evaluate one frame into a scene tree.
    fn render(
        &self,
        ctx: crate::composition::spec::FrameCtx,
        props: &Self::Props,
    ) -> FramecardResult<SceneFrame>;
}

/// Object-safe boundary over [`Template`] with props carried as JSON.
///
/// This is the host-facing surface: prop schemas are validated by the host
/// before invocation, the core only decodes them.
pub trait DynTemplate: Send + Sync {
    /// Invocation contract (id, duration, fps, canvas).
    fn spec(&self) -> TemplateSpec;

    /// Default prop payload as a JSON value.
    fn default_props_json(&self) -> FramecardResult<serde_json::Value>;

    /// Evaluate one frame; `props: None` renders with the default payload.
    fn render_json(
        &self,
        frame: FrameIndex,
        props: Option<&serde_json::Value>,
    ) -> FramecardResult<SceneFrame>;
}

impl<T: Template + Send + Sync> DynTemplate for T {
    fn spec(&self) -> TemplateSpec {
        Template::spec(self)
    }

    fn default_props_json(&self) -> FramecardResult<serde_json::Value> {
        serde_json::to_value(self.default_props())
            .map_err(|e| FramecardError::serde(format!("encode default props: {e}")))
    }

    fn render_json(
        &self,
        frame: FrameIndex,
        props: Option<&serde_json::Value>,
    ) -> FramecardResult<SceneFrame> {
        let ctx = Template::spec(self).frame_ctx(frame)?;
        let props = match props {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| FramecardError::serde(format!("decode props: {e}")))?,
            None => self.default_props(),
        };
        self.render(ctx, &props)
    }
}

/// All builtin templates, in registration order.
pub fn builtin_templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(QuoteCard),
        Box::new(ProductAd),
        Box::new(UserStatsVideo),
    ]
}

/// Look up a builtin template by its stable identifier.
pub fn find_template(id: &str) -> FramecardResult<Box<dyn DynTemplate>> {
    builtin_templates()
        .into_iter()
        .find(|t| t.spec().id == id)
        .ok_or_else(|| FramecardError::validation(format!("unknown template id '{id}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
