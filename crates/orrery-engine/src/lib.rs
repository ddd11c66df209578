pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::config::{BodySpec, CameraConfig, SimulationConfig, StarSpec, StarfieldConfig, StepMode};
pub use crate::api::simulation::Simulation;
pub use crate::api::types::{BodyId, MeshHandle, UiEvent};
pub use crate::core::body::{Body, BodyKind};
pub use crate::core::context::{SimulationContext, Theme};
pub use crate::core::registry::BodyRegistry;
pub use crate::core::rng::Rng;
pub use crate::core::time::{FixedTimestep, FrameClock};
pub use crate::error::{OrreryError, OrreryResult};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::renderer::camera::{CameraController, DragState, OrbitCamera, Viewport};
pub use crate::renderer::color::Color;
pub use crate::renderer::instance::{InstanceBuffer, MeshDescriptor, MeshInstance};
pub use crate::renderer::traits::{CameraView, Geometry, Material, MaterialKind, RenderBackend, TooltipSink};
pub use crate::systems::picking::{pick, PickResult, Ray};
pub use crate::systems::tooltip::TooltipState;
pub use crate::bridge::protocol::HEADER_FLOATS;
