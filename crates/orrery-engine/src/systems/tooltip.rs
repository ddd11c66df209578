use glam::Vec2;

use crate::renderer::traits::TooltipSink;
use crate::systems::picking::PickResult;

/// Tooltip placement relative to the pointer, in screen pixels.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, -30.0);

/// Show the hovered body's text next to the pointer, or hide the tooltip.
pub fn present(sink: &mut impl TooltipSink, hit: Option<&PickResult>, pointer: Vec2) {
    let at = pointer + TOOLTIP_OFFSET;
    match hit {
        Some(hit) => sink.show_tooltip(&hit.descriptive_text, at.x, at.y, true),
        None => sink.show_tooltip("", at.x, at.y, false),
    }
}

/// `TooltipSink` that keeps the latest tooltip for the host to poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

impl TooltipSink for TooltipState {
    fn show_tooltip(&mut self, text: &str, x: f32, y: f32, visible: bool) {
        // A hidden tooltip keeps its last text, like a faded-out DOM element.
        if visible {
            self.text.clear();
            self.text.push_str(text);
            self.x = x;
            self.y = y;
        }
        self.visible = visible;
    }
}
