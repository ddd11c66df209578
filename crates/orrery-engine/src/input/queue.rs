use crate::api::types::BodyId;

/// Events the host delivers from DOM listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed over the render surface, in screen pixels.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved over the render surface.
    PointerMove { x: f32, y: f32 },
    /// Pointer released, anywhere on the page.
    PointerUp { x: f32, y: f32 },
    /// Pointer left the render surface; hover stops until the next move.
    PointerLeave,
    /// Wheel scrolled; positive `delta_y` scrolls out.
    Wheel { delta_y: f32 },
    /// Speed slider moved.
    SetSpeed { body: BodyId, speed: f64 },
    TogglePause,
    /// Restore default speeds, re-randomize phases and resume.
    Reset,
    ToggleTheme,
    /// Render surface resized.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// The host pushes events as they arrive; the run-loop drains them at the start of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta_y: 120.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_keeps_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::TogglePause);
        q.push(InputEvent::SetSpeed { body: BodyId(1), speed: 2.5 });
        q.push(InputEvent::Reset);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::TogglePause);
        assert_eq!(events[1], InputEvent::SetSpeed { body: BodyId(1), speed: 2.5 });
        assert_eq!(events[2], InputEvent::Reset);
    }
}
