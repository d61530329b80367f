use rayon::prelude::*;

use crate::composition::registry::DynTemplate;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{FramecardError, FramecardResult};
use crate::scene::model::SceneFrame;

/// Threading controls for multi-frame evaluation.
///
/// Template evaluation is pure per frame, so parallel and sequential runs
/// produce identical scenes.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Evaluate frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Evaluate a single frame of `template`.
///
/// `props: None` renders the template's default payload.
pub fn render_frame(
    template: &dyn DynTemplate,
    frame: FrameIndex,
    props: Option<&serde_json::Value>,
) -> FramecardResult<SceneFrame> {
    template.render_json(frame, props)
}

/// Evaluate a frame range (inclusive start, exclusive end) in timeline order.
#[tracing::instrument(skip(template, props), fields(template = %template.spec().id))]
pub fn render_frames(
    template: &dyn DynTemplate,
    range: FrameRange,
    props: Option<&serde_json::Value>,
    threading: &RenderThreading,
) -> FramecardResult<Vec<SceneFrame>> {
    if range.is_empty() {
        return Err(FramecardError::validation("render range must be non-empty"));
    }
    let spec = template.spec();
    if range.end.0 > spec.duration.0 {
        return Err(FramecardError::evaluation(
            "render range exceeds template duration",
        ));
    }

    if !threading.parallel {
        let mut out = Vec::with_capacity(range.len_frames() as usize);
        for f in range.start.0..range.end.0 {
            out.push(template.render_json(FrameIndex(f), props)?);
        }
        return Ok(out);
    }

    tracing::debug!(
        frames = range.len_frames(),
        threads = ?threading.threads,
        "parallel frame evaluation"
    );
    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| template.render_json(FrameIndex(f), props))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> FramecardResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FramecardError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/pipeline.rs"]
mod tests;
