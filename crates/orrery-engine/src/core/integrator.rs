//! Fixed-step orbital integration. Bodies are independent, so the order only
//! matters for reproducibility: registry order, every time.

use std::f32::consts::TAU;

use crate::core::body::{normalize_angle, Body};
use crate::core::registry::BodyRegistry;

/// Advance one body's phase by `delta_phase` and its self rotation by one tick.
pub fn advance(body: &mut Body, delta_phase: f64) {
    body.angle = normalize_angle(body.angle + delta_phase);
    body.spin = (body.spin + body.spin_rate).rem_euclid(TAU);
}

/// One integration step for every body: `delta_phase = current_speed * time_step`.
pub fn step(registry: &mut BodyRegistry, time_step: f64) {
    for body in registry.iter_mut() {
        let delta = body.current_speed * time_step;
        advance(body, delta);
    }
}
