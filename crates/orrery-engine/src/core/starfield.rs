use std::f32::consts::TAU;

use glam::Vec3;

use crate::api::config::StarfieldConfig;
use crate::core::rng::Rng;

/// Background point field that slowly drifts about the Y axis.
pub struct Starfield {
    positions: Vec<Vec3>,
    /// Current Y rotation.
    pub rotation: f32,
    drift: f32,
}

impl Starfield {
    /// Scatter `count` points uniformly in a cube of side `extent` centred on the origin.
    pub fn generate(config: &StarfieldConfig, rng: &mut Rng) -> Self {
        let half = config.extent / 2.0;
        let positions = (0..config.count)
            .map(|_| Vec3::new(rng.next_centered(half), rng.next_centered(half), rng.next_centered(half)))
            .collect();
        Self {
            positions,
            rotation: 0.0,
            drift: config.drift,
        }
    }

    pub fn tick(&mut self) {
        self.rotation = (self.rotation + self.drift).rem_euclid(TAU);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_fill_the_cube() {
        let mut rng = Rng::new(1);
        let field = Starfield::generate(&StarfieldConfig::default(), &mut rng);
        assert_eq!(field.positions().len(), 1000);
        for p in field.positions() {
            assert!(p.abs().max_element() <= 200.0, "{p:?} outside cube");
        }
    }

    #[test]
    fn drifts_each_tick() {
        let mut rng = Rng::new(1);
        let config = StarfieldConfig { count: 3, ..StarfieldConfig::default() };
        let mut field = Starfield::generate(&config, &mut rng);
        field.tick();
        field.tick();
        assert!((field.rotation - 0.0004).abs() < 1e-7);
    }
}
