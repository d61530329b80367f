//! Framecard renders parametrized, time-driven visual templates frame by frame.
//!
//! Every template is a pure function of a frame index and a prop bundle:
//! animation state is derived from [`interpolate`]/[`spring`] over the frame
//! clock, sub-templates are gated by half-open [`Sequence`] windows, and the
//! output is a serializable scene tree consumed by an external renderer.
//!
//! # Pipeline overview
//!
//! 1. Pick a template from [`builtin_templates`] (or implement [`Template`])
//! 2. Build a [`FrameCtx`] via [`TemplateSpec::frame_ctx`]
//! 3. Render single frames, or stream a range with [`render_frames`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: evaluation is pure and stable for a given input; no
//!   state survives between frames, so out-of-order and parallel evaluation
//!   are safe by construction.
//! - **No IO**: the host drives the frame clock and encodes the output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod eval;
mod foundation;
mod scene;
mod templates;
mod timeline;

pub use animation::interp::{Ease, Extrapolate, InterpolateOptions, interpolate};
pub use animation::spring::{SpringConfig, spring};
pub use composition::registry::{DynTemplate, Template, builtin_templates, find_template};
pub use composition::spec::{FrameCtx, TemplateSpec};
pub use eval::pipeline::{RenderThreading, render_frame, render_frames};
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use foundation::error::{FramecardError, FramecardResult};
pub use foundation::format::{
    discounted_price, format_counter, format_grouped, format_money, format_percent, format_price,
};
pub use scene::color::Color;
pub use scene::model::{Fill, FontWeight, NodeKind, SceneFrame, SceneNode, Shape, TextAlign};
pub use templates::product_ad::{BrandColors, ProductAd, ProductAdProps};
pub use templates::quote_card::{QuoteCard, QuoteCardProps, QuoteTheme};
pub use templates::user_stats::{UserStats, UserStatsProps, UserStatsVideo};
pub use timeline::sequence::Sequence;
