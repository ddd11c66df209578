use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

use crate::api::config::CameraConfig;
use crate::renderer::traits::CameraView;

/// Render surface size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Screen pixels to normalized device coordinates. Screen Y grows down, NDC Y grows up.
    pub fn to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * screen.x / self.width - 1.0,
            1.0 - 2.0 * screen.y / self.height,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Perspective camera on a sphere around the origin, always looking at the origin.
///
/// Spherical convention: `phi` is the polar angle from +Y, `theta` the azimuth
/// from +Z toward +X.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    min_radius: f32,
    max_radius: f32,
    min_phi: f32,
    max_phi: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    viewport: Viewport,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig, viewport: Viewport) -> Self {
        let mut camera = Self {
            radius: 0.0,
            theta: 0.0,
            phi: 0.0,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            min_phi: config.pole_margin,
            max_phi: PI - config.pole_margin,
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
            viewport,
        };
        camera.set_position(Vec3::from(config.position));
        camera
    }

    /// Place the camera at a Cartesian position, clamping into the allowed shell.
    pub fn set_position(&mut self, pos: Vec3) {
        self.radius = pos.length();
        if self.radius > 0.0 {
            self.theta = pos.x.atan2(pos.z);
            self.phi = (pos.y / self.radius).clamp(-1.0, 1.0).acos();
        } else {
            self.theta = 0.0;
            self.phi = 0.0;
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        self.radius = self.radius.clamp(self.min_radius, self.max_radius);
        self.phi = self.phi.clamp(self.min_phi, self.max_phi);
    }

    /// Rotate around the origin.
    pub fn orbit(&mut self, d_theta: f32, d_phi: f32) {
        self.theta += d_theta;
        self.phi += d_phi;
        self.clamp();
    }

    /// Scale the distance to the origin.
    pub fn dolly(&mut self, factor: f32) {
        self.radius *= factor;
        self.clamp();
    }

    /// Cartesian position derived from `(radius, theta, phi)`.
    pub fn position(&self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }

    /// Right-handed perspective, depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.viewport.aspect(), self.near, self.far)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to screen pixels. `None` if it is behind the camera.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - ndc.y) * 0.5 * self.viewport.height,
        ))
    }

    /// Snapshot handed to the renderer each frame.
    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position(),
            target: Vec3::ZERO,
            fov_y_degrees: self.fov_y.to_degrees(),
            aspect: self.viewport.aspect(),
            near: self.near,
            far: self.far,
        }
    }
}

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last: Vec2 },
}

/// Pointer-driven orbit/zoom controller. Owns the camera.
pub struct CameraController {
    camera: OrbitCamera,
    drag: DragState,
    gain: Vec2,
    zoom_out_factor: f32,
    zoom_in_factor: f32,
}

impl CameraController {
    pub fn new(config: &CameraConfig, viewport: Viewport) -> Self {
        Self {
            camera: OrbitCamera::new(config, viewport),
            drag: DragState::Idle,
            gain: Vec2::new(config.orbit_gain_x, config.orbit_gain_y),
            zoom_out_factor: config.zoom_out_factor,
            zoom_in_factor: config.zoom_in_factor,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Pointer pressed over the render surface.
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag = DragState::Dragging { last: pos };
    }

    /// Pointer moved. Orbits while dragging; returns whether the camera moved.
    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        let DragState::Dragging { last } = self.drag else {
            return false;
        };
        let delta = pos - last;
        self.camera.orbit(-delta.x * self.gain.x, delta.y * self.gain.y);
        self.drag = DragState::Dragging { last: pos };
        true
    }

    /// Pointer released anywhere, on or off the surface.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Wheel input, independent of drag state. Positive `delta_y` scrolls out.
    pub fn wheel(&mut self, delta_y: f32) {
        let factor = if delta_y > 0.0 {
            self.zoom_out_factor
        } else {
            self.zoom_in_factor
        };
        self.camera.dolly(factor);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraConfig::default(), Viewport::new(800.0, 600.0))
    }

    #[test]
    fn initial_position_round_trips() {
        let cam = OrbitCamera::new(&CameraConfig::default(), Viewport::default());
        let p = cam.position();
        assert!((p - Vec3::new(0.0, 30.0, 60.0)).length() < 1e-3, "{p:?}");
    }

    #[test]
    fn wheel_out_scales_by_factor() {
        let mut ctl = controller();
        ctl.camera.set_position(Vec3::new(0.0, 0.0, 60.0));
        ctl.wheel(120.0);
        assert!((ctl.camera().radius - 66.0).abs() < 1e-4);
        ctl.wheel(-120.0);
        assert!((ctl.camera().radius - 59.4).abs() < 1e-3);
    }

    #[test]
    fn radius_stays_clamped() {
        let mut ctl = controller();
        for _ in 0..100 {
            ctl.wheel(120.0);
        }
        assert_eq!(ctl.camera().radius, 200.0);
        for _ in 0..100 {
            ctl.wheel(-120.0);
        }
        assert_eq!(ctl.camera().radius, 20.0);
    }

    #[test]
    fn drag_orbits_and_clamps_phi() {
        let mut ctl = controller();
        let theta0 = ctl.camera().theta;
        ctl.pointer_down(Vec2::new(100.0, 100.0));
        assert!(ctl.pointer_move(Vec2::new(110.0, 100.0)));
        assert!((ctl.camera().theta - (theta0 - 0.1)).abs() < 1e-6);

        ctl.pointer_move(Vec2::new(110.0, 10_000.0));
        assert!((ctl.camera().phi - (PI - 0.1)).abs() < 1e-6);
        ctl.pointer_move(Vec2::new(110.0, -10_000.0));
        assert!((ctl.camera().phi - 0.1).abs() < 1e-6);
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut ctl = controller();
        let before = ctl.camera().position();
        assert!(!ctl.pointer_move(Vec2::new(500.0, 500.0)));
        assert_eq!(ctl.camera().position(), before);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut ctl = controller();
        ctl.pointer_down(Vec2::ZERO);
        assert!(ctl.is_dragging());
        ctl.pointer_up();
        assert_eq!(ctl.drag_state(), DragState::Idle);
        assert!(!ctl.pointer_move(Vec2::new(50.0, 0.0)));
    }

    #[test]
    fn ndc_flips_vertical_axis() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn view_matrix_centres_origin() {
        let cam = OrbitCamera::new(&CameraConfig::default(), Viewport::default());
        let ndc = cam.view_projection().project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let cam = OrbitCamera::new(&CameraConfig::default(), Viewport::new(800.0, 600.0));
        let s = cam.world_to_screen(Vec3::ZERO).unwrap();
        assert!((s - Vec2::new(400.0, 300.0)).length() < 1e-3, "{s:?}");
    }

    #[test]
    fn points_behind_camera_do_not_project() {
        let cam = OrbitCamera::new(&CameraConfig::default(), Viewport::default());
        let behind = cam.position() * 2.0;
        assert!(cam.world_to_screen(behind).is_none());
    }
}
