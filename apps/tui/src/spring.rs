//! Damped spring used to smooth animated values toward a target.
//!
//! The spring is advanced once per rendered frame and knows nothing about
//! the events that move its target.

use std::time::Duration;

/// Largest frame gap the integrator will simulate in one call.
const MAX_FRAME_DELTA: f64 = 0.25;
/// Fixed sub-step keeping stiff springs stable at low frame rates.
const MAX_STEP: f64 = 1.0 / 240.0;
const REST_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const ROTATION: Self = Self::new(150.0, 40.0, 1.0);
    pub const SCALE: Self = Self::new(200.0, 40.0, 1.0);
    pub const CARD: Self = Self::new(250.0, 20.0, 0.5);

    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(170.0, 26.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub const fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    pub const fn value(&self) -> f64 {
        self.position
    }

    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Moves the target; current velocity is kept so motion bends smoothly.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        let offset = (self.position - self.target).abs();
        offset < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    pub fn step(&mut self, delta: Duration) {
        let mut remaining = delta.as_secs_f64().clamp(0.0, MAX_FRAME_DELTA);
        if self.is_settled() {
            self.snap_to_target();
            return;
        }

        let mass = self.config.mass.max(f64::EPSILON);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP);
            let displacement = self.position - self.target;
            let damping = -self.config.damping * self.velocity;
            let force = (-self.config.stiffness).mul_add(displacement, damping);
            self.velocity += force / mass * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }
    }
}
