use super::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_DT_SEC, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA,
    SPRING_REST_SPEED, SPRING_STIFFNESS,
};
use super::error::ConfigError;

/// Normalized scroll position inside a bounded extent.
///
/// `offset` and `extent` are pixels. A zero, negative or non-finite extent
/// (container not measured yet) yields 0 instead of dividing by zero.
#[inline]
pub fn raw_progress(offset: f64, extent: f64) -> f32 {
    if !(extent.is_finite() && extent > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0) as f32
}

/// Layout measurements of a scroll container, mapped "start start" to
/// "end end": progress is 0 when the container top meets the viewport top
/// and 1 when its bottom meets the viewport bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Container top relative to the viewport top (negative once scrolled past).
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn scrolled(&self) -> f64 {
        (-self.container_top).max(0.0)
    }

    pub fn scrollable_extent(&self) -> f64 {
        (self.container_height - self.viewport_height).max(0.0)
    }

    pub fn progress(&self) -> f32 {
        raw_progress(self.scrolled(), self.scrollable_extent())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

impl SpringParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_delta,
            self.rest_speed,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::Spring("non-finite constant"));
        }
        if self.stiffness <= 0.0 {
            return Err(ConfigError::Spring("stiffness must be positive"));
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::Spring("mass must be positive"));
        }
        if self.damping < 0.0 {
            return Err(ConfigError::Spring("damping must not be negative"));
        }
        if self.rest_delta < 0.0 || self.rest_speed < 0.0 {
            return Err(ConfigError::Spring("rest tolerances must not be negative"));
        }
        Ok(())
    }

    /// Damping ratio; >= 1 means the response never overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Mass-spring-damper follower integrated with semi-implicit Euler in fixed
/// sized sub-steps, so the trajectory is independent of the frame rate.
#[derive(Clone, Debug)]
pub struct Spring {
    params: SpringParams,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f32) -> Self {
        Self {
            params,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` with no motion.
    pub fn snap(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_sec` and return the new position.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() {
            return self.position;
        }
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, SPRING_MAX_DT_SEC)
        } else {
            0.0
        };
        if dt <= 0.0 {
            return self.position;
        }
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringParams {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.params;
        for _ in 0..steps {
            let force = stiffness * (self.target - self.position) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            if (self.target - self.position).abs() <= rest_delta && self.velocity.abs() <= rest_speed
            {
                self.snap(self.target);
                break;
            }
        }
        self.position
    }
}

/// Single writer of the slider's progress.
///
/// Scroll and resize handlers call [`ProgressTracker::record`], which only
/// keeps the newest raw value; the frame callback calls
/// [`ProgressTracker::advance`] to move the smoothed value toward it.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    raw: f32,
    spring: Spring,
}

impl ProgressTracker {
    pub fn new(params: SpringParams) -> Self {
        Self {
            raw: 0.0,
            spring: Spring::new(params, 0.0),
        }
    }

    /// Start from `metrics` without animating (mount-time measurement).
    pub fn prime(&mut self, metrics: ScrollMetrics) {
        self.raw = metrics.progress();
        self.spring.snap(self.raw);
    }

    pub fn record(&mut self, metrics: ScrollMetrics) {
        self.record_raw(metrics.progress());
    }

    pub(crate) fn record_raw(&mut self, raw: f32) {
        self.raw = if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        self.spring.set_target(self.raw);
        self.spring.step(dt_sec);
        self.smoothed()
    }

    pub fn smoothed(&self) -> f32 {
        self.spring.position().clamp(0.0, 1.0)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest() && self.spring.position() == self.raw
    }
}
