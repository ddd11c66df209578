//! Pointer picking: screen point → camera ray → nearest body hit.

use glam::{Vec2, Vec3};

use crate::api::types::BodyId;
use crate::core::body::Body;
use crate::renderer::camera::OrbitCamera;

/// A half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the front surface of a sphere, if hit.
    /// Rays starting inside the sphere see no front face and miss.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let t = -b - disc.sqrt();
        (t >= 0.0).then_some(t)
    }
}

/// Ray from the camera through a point given in normalized device coordinates.
pub fn ray_from_ndc(camera: &OrbitCamera, ndc: Vec2) -> Ray {
    let inv = camera.view_projection().inverse();
    let far = inv.project_point3(ndc.extend(1.0));
    let origin = camera.position();
    Ray::new(origin, far - origin)
}

/// Ray from the camera through a screen pixel.
pub fn ray_from_screen(camera: &OrbitCamera, screen: Vec2) -> Ray {
    ray_from_ndc(camera, camera.viewport().to_ndc(screen))
}

/// The body under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct PickResult {
    pub id: BodyId,
    pub name: String,
    pub descriptive_text: String,
    /// Ray parameter of the hit.
    pub distance: f32,
}

/// Cast a ray through `screen` and return the nearest intersected candidate.
/// Any front-face hit counts, however far along the ray.
pub fn pick<'a>(
    camera: &OrbitCamera,
    screen: Vec2,
    candidates: impl IntoIterator<Item = &'a Body>,
) -> Option<PickResult> {
    let ray = ray_from_screen(camera, screen);

    let mut best: Option<(&Body, f32)> = None;
    for body in candidates {
        let Some(t) = ray.intersect_sphere(body.position(), body.radius) else {
            continue;
        };
        if best.map_or(true, |(_, best_t)| t < best_t) {
            best = Some((body, t));
        }
    }

    best.map(|(body, t)| PickResult {
        id: body.id,
        name: body.name.clone(),
        descriptive_text: body.description.clone(),
        distance: t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::CameraConfig;
    use crate::renderer::camera::Viewport;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(&CameraConfig::default(), Viewport::new(800.0, 600.0))
    }

    #[test]
    fn sphere_hit_and_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
        // Sphere behind the origin.
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
    }

    #[test]
    fn centre_ray_points_at_origin() {
        let cam = camera();
        let ray = ray_from_screen(&cam, Vec2::new(400.0, 300.0));
        let to_origin = (-cam.position()).normalize();
        assert!(ray.direction.dot(to_origin) > 0.9999);
    }

    #[test]
    fn picks_body_under_pointer() {
        let cam = camera();
        let earth = Body::planet(BodyId(2), "Earth", 1.0, 16.0, 1.0, 0.0);
        let screen = cam.world_to_screen(earth.position()).unwrap();
        let hit = pick(&cam, screen, [&earth]).unwrap();
        assert_eq!(hit.name, "Earth");
        assert_eq!(hit.descriptive_text, "Earth - Distance: 16 AU");
    }

    #[test]
    fn empty_space_picks_nothing() {
        let cam = camera();
        let earth = Body::planet(BodyId(2), "Earth", 1.0, 16.0, 1.0, 0.0);
        assert!(pick(&cam, Vec2::new(5.0, 5.0), [&earth]).is_none());
    }

    #[test]
    fn nearest_along_ray_wins() {
        let mut cam = camera();
        // Camera in the orbital plane so the star and a planet line up.
        cam.set_position(Vec3::new(0.0, 0.0, 60.0));
        let star = Body::star(BodyId(1), "Sun", 3.0, 0.0);
        let blocker = Body::planet(BodyId(0), "Blocker", 2.0, 20.0, 0.0, std::f64::consts::FRAC_PI_2);
        let centre = Vec2::new(400.0, 300.0);

        let hit = pick(&cam, centre, [&star, &blocker]).unwrap();
        assert_eq!(hit.name, "Blocker");
        assert!((hit.distance - 38.0).abs() < 1e-3);

        let hit = pick(&cam, centre, [&star]).unwrap();
        assert_eq!(hit.name, "Sun");
        assert!((hit.distance - 57.0).abs() < 1e-3);
    }

    #[test]
    fn hits_past_the_far_plane_still_count() {
        let config = CameraConfig {
            position: [0.0, 0.0, 60.0],
            far: 40.0,
            ..CameraConfig::default()
        };
        let cam = OrbitCamera::new(&config, Viewport::new(800.0, 600.0));
        let star = Body::star(BodyId(0), "Sun", 3.0, 0.0);

        let hit = pick(&cam, Vec2::new(400.0, 300.0), [&star]).unwrap();
        assert!(hit.distance > cam.far());
        assert_eq!(hit.name, "Sun");
    }
}
