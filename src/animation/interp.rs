use crate::foundation::error::{FramecardError, FramecardResult};

/// Easing applied to segment-local progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// No easing.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
}

impl Ease {
    /// Apply the easing curve to `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Behavior outside the defined breakpoint span, applied independently per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Return the nearest boundary output.
    Clamp,
    /// Continue the linear slope of the nearest segment.
    #[default]
    Extend,
}

/// Options controlling [`interpolate`] edge behavior and easing.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOptions {
    /// Policy below the first breakpoint.
    pub extrapolate_left: Extrapolate,
    /// Policy above the last breakpoint.
    pub extrapolate_right: Extrapolate,
    /// Easing applied to segment-local progress inside the span.
    pub ease: Ease,
}

impl InterpolateOptions {
    /// Clamp on the right edge only (the most common entrance-ramp shape).
    pub fn clamp_right() -> Self {
        Self {
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Clamp on the left edge only (exit ramps keyed off the final frames).
    pub fn clamp_left() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Clamp on both edges.
    pub fn clamp() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Replace the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Map `input` through piecewise-linear breakpoints.
///
/// `input_range` must be strictly increasing with at least two entries and
/// `output_range` must have the same arity; violations are programming-contract
/// errors and fail fast with [`FramecardError::InvalidRange`].
///
/// At the first/last breakpoint the first/last output is returned exactly.
/// Outside the span, each side applies its own [`Extrapolate`] policy;
/// extrapolation is always linear (easing only shapes in-span progress).
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: &InterpolateOptions,
) -> FramecardResult<f64> {
    validate_ranges(input_range, output_range)?;
    if !input.is_finite() {
        return Err(FramecardError::invalid_range("input must be finite"));
    }

    let last = input_range.len() - 1;

    if input <= input_range[0] {
        if input == input_range[0] {
            return Ok(output_range[0]);
        }
        return Ok(match opts.extrapolate_left {
            Extrapolate::Clamp => output_range[0],
            Extrapolate::Extend => segment_at(input, input_range, output_range, 0, Ease::Linear),
        });
    }
    if input >= input_range[last] {
        if input == input_range[last] {
            return Ok(output_range[last]);
        }
        return Ok(match opts.extrapolate_right {
            Extrapolate::Clamp => output_range[last],
            Extrapolate::Extend => {
                segment_at(input, input_range, output_range, last - 1, Ease::Linear)
            }
        });
    }

    // Bracketing segment: first breakpoint strictly greater than `input`.
    let idx = input_range.partition_point(|b| *b <= input);
    Ok(segment_at(input, input_range, output_range, idx - 1, opts.ease))
}

fn segment_at(input: f64, input_range: &[f64], output_range: &[f64], seg: usize, ease: Ease) -> f64 {
    let (x0, x1) = (input_range[seg], input_range[seg + 1]);
    let (y0, y1) = (output_range[seg], output_range[seg + 1]);
    let t = (input - x0) / (x1 - x0);
    let te = match ease {
        Ease::Linear => t, // keeps extrapolated slopes linear
        other => other.apply(t),
    };
    y0 + (y1 - y0) * te
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> FramecardResult<()> {
    if input_range.len() < 2 {
        return Err(FramecardError::invalid_range(
            "input range must have at least 2 breakpoints",
        ));
    }
    if input_range.len() != output_range.len() {
        return Err(FramecardError::invalid_range(format!(
            "input range has {} breakpoints but output range has {} values",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.iter().any(|v| !v.is_finite()) || output_range.iter().any(|v| !v.is_finite()) {
        return Err(FramecardError::invalid_range(
            "breakpoints and outputs must be finite",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(FramecardError::invalid_range(
            "input range must be strictly increasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
