use crate::api::config::SimulationConfig;
use crate::api::types::BodyId;
use crate::core::body::Body;
use crate::core::rng::Rng;
use crate::error::{OrreryError, OrreryResult};
use crate::renderer::color::Color;

/// Owns every body record: the planets in config order, then the star.
/// A flat Vec indexed by `BodyId`; body counts are tiny.
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    /// Build one body per `BodySpec` plus the star, each with a uniformly random phase.
    pub fn create(config: &SimulationConfig, rng: &mut Rng) -> Self {
        let mut bodies = Vec::with_capacity(config.bodies.len() + 1);

        for (i, spec) in config.bodies.iter().enumerate() {
            let body = Body::planet(
                BodyId(i as u32),
                spec.name.clone(),
                spec.size,
                spec.distance,
                spec.speed,
                rng.next_angle(),
            )
            .with_color(Color::parse_or_white(&spec.color))
            .with_spin_rate(config.body_spin);
            bodies.push(body);
        }

        let star = &config.star;
        let star_id = BodyId(bodies.len() as u32);
        bodies.push(
            Body::star(star_id, star.name.clone(), star.size, rng.next_angle())
                .with_color(Color::parse_or_white(&star.color))
                .with_spin_rate(config.star_spin)
                .with_description(star.description.clone()),
        );

        log::info!("registry: {} bodies + star {:?}", config.bodies.len(), star.name);
        Self { bodies }
    }

    /// Restore every body's speed to its default and re-randomize its phase.
    pub fn reset_speeds(&mut self, rng: &mut Rng) {
        for body in &mut self.bodies {
            body.current_speed = body.base_speed();
            body.angle = rng.next_angle();
        }
    }

    /// Set a body's angular speed. No range check: the slider domain is the host's concern.
    pub fn set_speed(&mut self, id: BodyId, speed: f64) -> OrreryResult<()> {
        let body = self.get_mut(id).ok_or(OrreryError::InvalidBody(id))?;
        body.current_speed = speed;
        Ok(())
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    /// Look a body up by name.
    pub fn lookup(&self, name: &str) -> OrreryResult<&Body> {
        self.bodies
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| OrreryError::UnknownBodyName(name.to_string()))
    }

    pub fn star(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_star())
    }

    /// Orbiting bodies only, in config order.
    pub fn planets(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| !b.is_star())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
