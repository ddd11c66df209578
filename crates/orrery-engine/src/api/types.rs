use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Identifier of a body in the registry (its index in registry order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a mesh owned by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u32);

/// A UI event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct UiEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl UiEvent {
    pub const FLOATS: usize = 4;

    /// Slider resync: `a` = body id, `b` = current speed.
    pub const SPEED: f32 = 1.0;
    /// Pause state changed: `a` = 1.0 when paused.
    pub const PAUSED: f32 = 2.0;
    /// Theme changed: `a` = 1.0 when dark.
    pub const THEME: f32 = 3.0;

    pub fn speed(id: BodyId, speed: f64) -> Self {
        Self { kind: Self::SPEED, a: id.0 as f32, b: speed as f32, c: 0.0 }
    }

    pub fn paused(paused: bool) -> Self {
        Self { kind: Self::PAUSED, a: flag(paused), ..Self::default() }
    }

    pub fn theme(dark: bool) -> Self {
        Self { kind: Self::THEME, a: flag(dark), ..Self::default() }
    }
}

/// Encode a boolean for the float buffers the host reads.
pub(crate) fn flag(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}
