// SPDX-License-Identifier: MPL-2.0
//! Damped spring used to smooth pointer-driven motion.

use std::time::Duration;

/// Default stiffness (force per unit of displacement).
pub const DEFAULT_STIFFNESS: f32 = 150.0;

/// Default damping (force per unit of velocity).
pub const DEFAULT_DAMPING: f32 = 25.0;

/// Largest integration step; longer frames are split to stay stable.
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Below this displacement and velocity the spring snaps to its target.
const REST_EPSILON: f32 = 0.01;

/// Spring physical parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Builds a config, replacing non-positive or NaN values with the defaults.
    #[must_use]
    pub fn new(stiffness: f32, damping: f32) -> Self {
        let positive_or = |value: f32, fallback: f32| if value > 0.0 { value } else { fallback };
        Self {
            stiffness: positive_or(stiffness, DEFAULT_STIFFNESS),
            damping: positive_or(damping, DEFAULT_DAMPING),
            mass: 1.0,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STIFFNESS, DEFAULT_DAMPING)
    }
}

/// A single animated value pulled toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    #[must_use]
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jumps to `value` with no velocity.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advances the simulation by `elapsed`.
    ///
    /// Returns `true` while the spring is still moving.
    pub fn step(&mut self, elapsed: Duration) -> bool {
        if self.is_at_rest() {
            return false;
        }

        let mut remaining = elapsed.as_secs_f32();
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECS);
            remaining -= dt;

            // Semi-implicit Euler.
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * dt;
            self.value += self.velocity * dt;
        }

        if (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
            self.value = self.target;
            self.velocity = 0.0;
        }

        !self.is_at_rest()
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringConfig::default(), 0.0)
    }
}
