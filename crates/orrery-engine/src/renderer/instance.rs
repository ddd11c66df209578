use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::Serialize;

use crate::api::types::MeshHandle;
use crate::renderer::traits::{CameraView, Geometry, Material, RenderBackend};

/// Per-mesh transform written to shared memory for the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation in radians.
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Mesh handle, so the host can sanity-check ordering.
    pub mesh: f32,
    pub _pad: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.rot_x, self.rot_y, self.rot_z)
    }
}

/// Mesh built once at startup; sent to the host as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MeshDescriptor {
    pub handle: MeshHandle,
    pub geometry: Geometry,
    pub material: Material,
}

/// `RenderBackend` that records into flat buffers the host reads after each tick.
/// Instance `i` always belongs to `MeshHandle(i)`.
pub struct InstanceBuffer {
    meshes: Vec<MeshDescriptor>,
    instances: Vec<MeshInstance>,
    camera: Option<CameraView>,
    frame_requested: bool,
    frames_rendered: u32,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            meshes: Vec::with_capacity(32),
            instances: Vec::with_capacity(32),
            camera: None,
            frame_requested: false,
            frames_rendered: 0,
        }
    }

    pub fn meshes(&self) -> &[MeshDescriptor] {
        &self.meshes
    }

    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }

    pub fn instance(&self, mesh: MeshHandle) -> Option<&MeshInstance> {
        self.instances.get(mesh.0 as usize)
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn camera(&self) -> Option<&CameraView> {
        self.camera.as_ref()
    }

    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    /// Returns and clears the pending frame request.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Mesh descriptors as JSON for the host to build its scene graph.
    pub fn scene_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.meshes)
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for InstanceBuffer {
    fn create_mesh(&mut self, geometry: &Geometry, material: &Material) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len() as u32);
        self.meshes.push(MeshDescriptor {
            handle,
            geometry: geometry.clone(),
            material: material.clone(),
        });
        self.instances.push(MeshInstance {
            mesh: handle.0 as f32,
            ..MeshInstance::default()
        });
        handle
    }

    fn set_position(&mut self, mesh: MeshHandle, position: Vec3) {
        if let Some(inst) = self.instances.get_mut(mesh.0 as usize) {
            inst.x = position.x;
            inst.y = position.y;
            inst.z = position.z;
        }
    }

    fn set_rotation(&mut self, mesh: MeshHandle, rotation: Vec3) {
        if let Some(inst) = self.instances.get_mut(mesh.0 as usize) {
            inst.rot_x = rotation.x;
            inst.rot_y = rotation.y;
            inst.rot_z = rotation.z;
        }
    }

    fn request_animation_frame(&mut self) {
        self.frame_requested = true;
    }

    fn render_frame(&mut self, camera: &CameraView) {
        self.camera = Some(*camera);
        self.frames_rendered = self.frames_rendered.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::Color;
    use crate::renderer::traits::MaterialKind;

    fn sphere() -> (Geometry, Material) {
        (
            Geometry::Sphere { radius: 1.0, segments: 32 },
            Material::new(Color::WHITE, MaterialKind::Basic),
        )
    }

    #[test]
    fn mesh_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
    }

    #[test]
    fn handles_index_instances() {
        let mut buf = InstanceBuffer::new();
        let (g, m) = sphere();
        let a = buf.create_mesh(&g, &m);
        let b = buf.create_mesh(&g, &m);
        assert_eq!((a, b), (MeshHandle(0), MeshHandle(1)));

        buf.set_position(b, Vec3::new(1.0, 2.0, 3.0));
        buf.set_rotation(b, Vec3::new(0.0, 0.5, 0.0));
        let inst = buf.instance(b).unwrap();
        assert_eq!(inst.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(inst.rot_y, 0.5);
        assert_eq!(inst.mesh, 1.0);
        assert_eq!(buf.instance(a).unwrap().position(), Vec3::ZERO);
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let mut buf = InstanceBuffer::new();
        buf.set_position(MeshHandle(7), Vec3::ONE);
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn frame_request_is_consumed() {
        let mut buf = InstanceBuffer::new();
        assert!(!buf.take_frame_request());
        buf.request_animation_frame();
        assert!(buf.take_frame_request());
        assert!(!buf.take_frame_request());
    }

    #[test]
    fn scene_json_lists_meshes() {
        let mut buf = InstanceBuffer::new();
        let (g, m) = sphere();
        buf.create_mesh(&g, &m);
        let json = buf.scene_json().unwrap();
        assert!(json.starts_with(r#"[{"handle":0,"geometry":{"type":"sphere""#), "{json}");
    }
}
