//! Per-frame header the host reads after each tick.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values f32):
//! ```text
//! [Header: 16 floats]
//! [Instances: instance_count × 8 floats]   (separate buffer, see InstanceBuffer)
//! [Events: event_count × 4 floats]          (separate buffer, see UiEvent)
//! ```

use crate::api::simulation::Simulation;
use crate::api::types::flag;
use crate::renderer::traits::RenderBackend;
use crate::systems::tooltip::TooltipState;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_INSTANCE_COUNT: usize = 1;
pub const HEADER_BODY_COUNT: usize = 2;
pub const HEADER_CAMERA_X: usize = 3;
pub const HEADER_CAMERA_Y: usize = 4;
pub const HEADER_CAMERA_Z: usize = 5;
pub const HEADER_FOV_Y: usize = 6;
pub const HEADER_ASPECT: usize = 7;
pub const HEADER_PAUSED: usize = 8;
pub const HEADER_DARK_THEME: usize = 9;
pub const HEADER_TOOLTIP_VISIBLE: usize = 10;
pub const HEADER_TOOLTIP_X: usize = 11;
pub const HEADER_TOOLTIP_Y: usize = 12;
pub const HEADER_PROTOCOL_VERSION: usize = 13;
pub const HEADER_EVENT_COUNT: usize = 14;
/// Hovered body id, or -1.
pub const HEADER_HOVERED_BODY: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Pack the header for the frame just ticked.
pub fn pack_header<R: RenderBackend>(
    sim: &Simulation<R, TooltipState>,
    instance_count: u32,
) -> [f32; HEADER_FLOATS] {
    let mut h = [0.0; HEADER_FLOATS];
    let view = sim.camera().camera().view();
    let tip = sim.tooltip();

    // Frame counter wraps well before f32 loses integer precision.
    h[HEADER_FRAME_COUNTER] = (sim.frame() % (1 << 24)) as f32;
    h[HEADER_INSTANCE_COUNT] = instance_count as f32;
    h[HEADER_BODY_COUNT] = sim.registry().len() as f32;
    h[HEADER_CAMERA_X] = view.position.x;
    h[HEADER_CAMERA_Y] = view.position.y;
    h[HEADER_CAMERA_Z] = view.position.z;
    h[HEADER_FOV_Y] = view.fov_y_degrees;
    h[HEADER_ASPECT] = view.aspect;
    h[HEADER_PAUSED] = flag(sim.context().paused);
    h[HEADER_DARK_THEME] = flag(sim.context().theme.is_dark());
    h[HEADER_TOOLTIP_VISIBLE] = flag(tip.visible);
    h[HEADER_TOOLTIP_X] = tip.x;
    h[HEADER_TOOLTIP_Y] = tip.y;
    h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    h[HEADER_EVENT_COUNT] = sim.events().len() as f32;
    h[HEADER_HOVERED_BODY] = sim.hovered().map_or(-1.0, |hit| hit.id.0 as f32);
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SimulationConfig;
    use crate::input::queue::InputEvent;
    use crate::renderer::camera::Viewport;
    use crate::renderer::instance::InstanceBuffer;

    #[test]
    fn header_reflects_frame_state() {
        let mut sim = Simulation::new(
            SimulationConfig::default(),
            Viewport::new(800.0, 600.0),
            InstanceBuffer::new(),
            TooltipState::default(),
        )
        .unwrap();
        sim.push_input(InputEvent::TogglePause);
        sim.push_input(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        sim.tick(0.016);

        let count = sim.renderer().instance_count();
        let h = pack_header(&sim, count);
        assert_eq!(h[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(h[HEADER_INSTANCE_COUNT], 18.0);
        assert_eq!(h[HEADER_BODY_COUNT], 9.0);
        assert_eq!(h[HEADER_PAUSED], 1.0);
        assert_eq!(h[HEADER_DARK_THEME], 1.0);
        assert_eq!(h[HEADER_TOOLTIP_VISIBLE], 1.0);
        assert_eq!(h[HEADER_HOVERED_BODY], 8.0);
        assert_eq!(h[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(h[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert!((h[HEADER_ASPECT] - 800.0 / 600.0).abs() < 1e-6);
    }
}
