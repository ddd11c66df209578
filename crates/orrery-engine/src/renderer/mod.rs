pub mod camera;
pub mod color;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use traits::{CameraView, Geometry, Material, MaterialKind, RenderBackend, TooltipSink};
