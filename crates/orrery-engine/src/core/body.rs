use std::f64::consts::TAU;

use glam::Vec3;

use crate::api::types::BodyId;
use crate::renderer::color::Color;

/// Whether a body orbits or sits at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Planet,
    Star,
}

/// One orbiting entity (or the degenerate star at the origin).
///
/// `orbit_distance` and `base_speed` are fixed at creation; only the phase,
/// the current speed and the decorative spin change afterwards.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    /// Visual radius, also the pick radius.
    pub radius: f32,
    orbit_distance: f32,
    base_speed: f64,
    /// Angular velocity; user-adjustable, independent of `base_speed` until reset.
    pub current_speed: f64,
    /// Orbital phase in radians, kept in [0, 2π).
    pub angle: f64,
    /// Self rotation about Y in radians.
    pub spin: f32,
    /// Self rotation per unpaused tick.
    pub spin_rate: f32,
    pub color: Color,
    /// Tooltip text when hovered.
    pub description: String,
}

impl Body {
    pub fn planet(
        id: BodyId,
        name: impl Into<String>,
        radius: f32,
        orbit_distance: f32,
        base_speed: f64,
        angle: f64,
    ) -> Self {
        let name = name.into();
        let description = format!("{} - Distance: {} AU", name, orbit_distance);
        Self {
            id,
            name,
            kind: BodyKind::Planet,
            radius,
            orbit_distance: orbit_distance.max(0.0),
            base_speed,
            current_speed: base_speed,
            angle: normalize_angle(angle),
            spin: 0.0,
            spin_rate: 0.0,
            color: Color::WHITE,
            description,
        }
    }

    pub fn star(id: BodyId, name: impl Into<String>, radius: f32, angle: f64) -> Self {
        let mut star = Self::planet(id, name, radius, 0.0, 0.0, angle);
        star.kind = BodyKind::Star;
        star.description = String::new();
        star
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    pub fn base_speed(&self) -> f64 {
        self.base_speed
    }

    /// Cartesian position derived from the phase: `(cos·d, 0, sin·d)`.
    pub fn position(&self) -> Vec3 {
        let d = self.orbit_distance as f64;
        Vec3::new((self.angle.cos() * d) as f32, 0.0, (self.angle.sin() * d) as f32)
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }
}

/// Wrap a phase into [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}
