use crate::foundation::core::Fps;
use crate::foundation::error::{FramecardError, FramecardResult};

/// Damped harmonic oscillator parameters.
///
/// The damping ratio is `damping / (2 * sqrt(stiffness * mass))`: below 1 the
/// spring overshoots, at 1 it is critically damped, above 1 it creeps in
/// monotonically.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Oscillator mass `m`.
    pub mass: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring stiffness `k`.
    pub stiffness: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
        }
    }
}

impl SpringConfig {
    /// Create a validated unit-mass config.
    pub fn new(damping: f64, stiffness: f64) -> FramecardResult<Self> {
        let cfg = Self {
            mass: 1.0,
            damping,
            stiffness,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate that all parameters are finite and positive.
    pub fn validate(&self) -> FramecardResult<()> {
        for (name, value) in [
            ("mass", self.mass),
            ("damping", self.damping),
            ("stiffness", self.stiffness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FramecardError::animation(format!(
                    "spring {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Natural frequency `omega0 = sqrt(k / m)` in rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `zeta = c / (2 * sqrt(k * m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Settle progress of a spring released at `elapsed_frames == 0`.
///
/// Returns the closed-form position of a damped oscillator moving from 0
/// toward 1 with zero initial velocity, sampled `elapsed_frames / fps` seconds
/// in. Negative `elapsed_frames` means the spring has not been triggered and
/// yields exactly 0. Pure function of its arguments: no integration state is
/// carried between frames.
pub fn spring(elapsed_frames: f64, fps: Fps, config: &SpringConfig) -> f64 {
    if !elapsed_frames.is_finite() || elapsed_frames < 0.0 {
        return 0.0;
    }

    let t = fps.frames_to_secs(elapsed_frames);
    let omega0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    if zeta < 1.0 - ZETA_CRITICAL_EPS {
        underdamped(t, omega0, zeta)
    } else if zeta <= 1.0 + ZETA_CRITICAL_EPS {
        critically_damped(t, omega0)
    } else {
        overdamped(t, omega0, zeta)
    }
}

/// Tolerance around `zeta == 1` where the critically damped branch is used.
const ZETA_CRITICAL_EPS: f64 = 1e-4;

/// `x(t) = 1 - e^(-zeta*omega0*t) * [cos(omega_d*t) + zeta/sqrt(1-zeta^2) * sin(omega_d*t)]`
fn underdamped(t: f64, omega0: f64, zeta: f64) -> f64 {
    let root = (1.0 - zeta * zeta).sqrt();
    let omega_d = omega0 * root;
    let decay = (-zeta * omega0 * t).exp();
    1.0 - decay * ((omega_d * t).cos() + (zeta / root) * (omega_d * t).sin())
}

/// `x(t) = 1 - e^(-omega0*t) * (1 + omega0*t)`
fn critically_damped(t: f64, omega0: f64) -> f64 {
    1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t)
}

/// Overdamped solution expressed through its two decaying exponentials.
///
/// `x(t) = 1 - [r2*e^(r1*t) - r1*e^(r2*t)] / (r2 - r1)` with both roots
/// negative, so neither term can overflow at large `t`.
fn overdamped(t: f64, omega0: f64, zeta: f64) -> f64 {
    let root = (zeta * zeta - 1.0).sqrt();
    let r1 = -omega0 * (zeta - root); // slow root
    let r2 = -omega0 * (zeta + root); // fast root
    1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
