//! Narrow interfaces to the external collaborators.
//!
//! The host owns the actual 3D engine (meshes, lights, GPU) and the DOM. The
//! simulation only talks to it through these traits, so the whole core runs
//! natively in tests against a recording backend.

use glam::Vec3;
use serde::Serialize;

use crate::api::types::MeshHandle;
use crate::renderer::color::Color;

/// Mesh geometry the renderer must build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Sphere { radius: f32, segments: u32 },
    /// Flat annulus in the XY plane; rotate by -π/2 about X to lay it in XZ.
    Ring { inner: f32, outer: f32, segments: u32 },
    Points { positions: Vec<Vec3> },
}

/// Shading model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialKind {
    /// Unlit.
    Basic,
    Phong { shininess: f32 },
    Points { size: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub kind: MaterialKind,
    /// Self-illumination (0.0 = none).
    pub emissive: f32,
    /// 1.0 = opaque.
    pub opacity: f32,
}

impl Material {
    pub fn new(color: Color, kind: MaterialKind) -> Self {
        Self {
            color,
            kind,
            emissive: 0.0,
            opacity: 1.0,
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Camera parameters for one rendered frame. The camera looks at `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// The rendering collaborator.
pub trait RenderBackend {
    /// Build a mesh once at startup.
    fn create_mesh(&mut self, geometry: &Geometry, material: &Material) -> MeshHandle;

    fn set_position(&mut self, mesh: MeshHandle, position: Vec3);

    /// Euler rotation (XYZ, radians).
    fn set_rotation(&mut self, mesh: MeshHandle, rotation: Vec3);

    /// Ask the host to call the frame callback again on the next display refresh.
    fn request_animation_frame(&mut self);

    fn render_frame(&mut self, camera: &CameraView);
}

/// The UI collaborator's tooltip element.
pub trait TooltipSink {
    fn show_tooltip(&mut self, text: &str, x: f32, y: f32, visible: bool);
}
