use crate::errors::AnimationError;
use keyframe::EasingFunction;
use serde::{Deserialize, Serialize};

/// Supported easing functions for curve segments.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingFunction for EasingType {
    fn y(&self, x: f64) -> f64 {
        match self {
            EasingType::Linear => keyframe::functions::Linear.y(x),
            EasingType::EaseIn => keyframe::functions::EaseIn.y(x),
            EasingType::EaseOut => keyframe::functions::EaseOut.y(x),
            EasingType::EaseInOut => keyframe::functions::EaseInOut.y(x),
        }
    }
}

impl EasingType {
    /// Evaluates the easing curve at `x` (0.0 to 1.0).
    ///
    /// The end points are pinned so that eased curves still hit their breakpoints exactly.
    pub fn eval(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            self.y(x)
        }
    }
}

/// Configuration for physics-based spring animations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Tension of the spring (controls speed).
    pub stiffness: f64,
    /// Friction (controls oscillation decay).
    pub damping: f64,
    /// Mass of the object (controls inertia).
    pub mass: f64,
    /// Initial velocity, in progress units per second.
    pub velocity: f64,
    /// Never let the value pass the target.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            velocity: 0.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default spring with a different damping coefficient.
    pub fn with_damping(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Damping ratio `zeta`: below 1 overshoots, 1 is critical, above 1 is sluggish.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        let finite = [self.stiffness, self.damping, self.mass, self.velocity]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(AnimationError::InvalidSpring(
                "all parameters must be finite".to_string(),
            ));
        }
        if self.stiffness <= 0.0 {
            return Err(AnimationError::InvalidSpring(format!(
                "stiffness must be positive, got {}",
                self.stiffness
            )));
        }
        if self.mass <= 0.0 {
            return Err(AnimationError::InvalidSpring(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        // Without damping the oscillation never settles on the target.
        if self.damping <= 0.0 {
            return Err(AnimationError::InvalidSpring(format!(
                "damping must be positive, got {}",
                self.damping
            )));
        }
        Ok(())
    }
}

/// What a spring animates and when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringOptions {
    pub config: SpringConfig,
    /// Rest value before the spring is triggered.
    pub from: f64,
    /// Value the spring settles on.
    pub to: f64,
    /// Frame at which the spring is triggered.
    pub delay: i64,
}

impl Default for SpringOptions {
    fn default() -> Self {
        Self {
            config: SpringConfig::default(),
            from: 0.0,
            to: 1.0,
            delay: 0,
        }
    }
}

impl SpringOptions {
    pub fn damped(damping: f64) -> Self {
        Self {
            config: SpringConfig::with_damping(damping),
            ..Self::default()
        }
    }

    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn delayed(mut self, delay: i64) -> Self {
        self.delay = delay;
        self
    }
}

/// A validated spring bound to a frame rate.
///
/// Evaluation is closed-form: the damped harmonic oscillator is solved analytically at
/// `t = (frame - delay) / fps` seconds, so any frame can be queried in any order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    fps: f64,
    options: SpringOptions,
}

impl Spring {
    pub fn new(fps: u32, options: SpringOptions) -> Result<Self, AnimationError> {
        if fps == 0 {
            return Err(AnimationError::InvalidSpring(
                "fps must be positive".to_string(),
            ));
        }
        options.config.validate()?;
        if !options.from.is_finite() || !options.to.is_finite() {
            return Err(AnimationError::InvalidSpring(
                "from/to must be finite".to_string(),
            ));
        }
        Ok(Self {
            fps: fps as f64,
            options,
        })
    }

    pub fn options(&self) -> &SpringOptions {
        &self.options
    }

    /// Normalized progress (0 at rest, converging to 1) at `frame`.
    pub fn progress_at(&self, frame: i64) -> f64 {
        let elapsed = frame - self.options.delay;
        if elapsed <= 0 {
            return 0.0;
        }
        let t = elapsed as f64 / self.fps;
        let progress = 1.0 + oscillate(&self.options.config, t);

        if self.options.config.overshoot_clamping {
            progress.min(1.0)
        } else {
            progress
        }
    }

    /// Spring value at `frame`, mapped onto `from..to`.
    pub fn value_at(&self, frame: i64) -> f64 {
        let SpringOptions { from, to, .. } = self.options;
        if frame - self.options.delay <= 0 {
            return from;
        }
        from + (to - from) * self.progress_at(frame)
    }

    /// First frame (relative to the trigger) from which the spring stays within
    /// `threshold` of its target. `None` when it has not settled after a minute of footage.
    pub fn settle_frames(&self, threshold: f64) -> Option<u32> {
        let limit = (self.fps * 60.0) as u32;
        let mut last_outside = None;
        for elapsed in 0..=limit {
            let p = self.progress_at(self.options.delay + elapsed as i64);
            if (1.0 - p).abs() > threshold {
                last_outside = Some(elapsed);
            }
        }
        match last_outside {
            None => Some(0),
            Some(frame) if frame >= limit => None,
            Some(frame) => Some(frame + 1),
        }
    }
}

/// Displacement from the target at `t` seconds for a unit step (start at -1, rest at 0).
fn oscillate(config: &SpringConfig, t: f64) -> f64 {
    let x0 = -1.0;
    let v0 = config.velocity;
    let beta = config.damping / (2.0 * config.mass);
    let omega0 = (config.stiffness / config.mass).sqrt();
    let envelope = (-beta * t).exp();

    if (beta - omega0).abs() <= f64::from(f32::EPSILON) {
        envelope * (x0 + (beta * x0 + v0) * t)
    } else if beta < omega0 {
        let omega1 = (omega0 * omega0 - beta * beta).sqrt();
        envelope * (x0 * (omega1 * t).cos() + ((beta * x0 + v0) / omega1) * (omega1 * t).sin())
    } else {
        // Sum of two decaying exponentials; cosh/sinh overflow for long springs.
        let omega2 = (beta * beta - omega0 * omega0).sqrt();
        let r1 = -beta + omega2;
        let r2 = -beta - omega2;
        let c2 = (r1 * x0 - v0) / (r1 - r2);
        let c1 = x0 - c2;
        c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
    }
}

/// One-shot spring evaluation: validates `options` and returns the value at `frame`.
pub fn spring(frame: i64, fps: u32, options: SpringOptions) -> Result<f64, AnimationError> {
    Ok(Spring::new(fps, options)?.value_at(frame))
}
