/// Tooltip distance from the pointer, in CSS pixels on both axes.
pub const TOOLTIP_OFFSET: f64 = 5.0;

/// Enter/leave edges produced by one pointer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTransition {
    pub left: Option<usize>,
    pub entered: Option<usize>,
}

impl HoverTransition {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.entered.is_none()
    }
}

/// Turns raw pointer hit results into region enter/move/leave events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    /// Record the region under the pointer (or none).
    pub fn pointer_at(&mut self, hit: Option<usize>) -> HoverTransition {
        if hit == self.current {
            return HoverTransition::default();
        }
        let left = self.current;
        self.current = hit;
        HoverTransition { left, entered: hit }
    }

    /// The pointer left the surface entirely.
    pub fn pointer_left(&mut self) -> HoverTransition {
        self.pointer_at(None)
    }
}

/// Tooltip position for a pointer at client coordinates.
pub fn tooltip_position(client_x: f64, client_y: f64) -> (f64, f64) {
    (client_x + TOOLTIP_OFFSET, client_y + TOOLTIP_OFFSET)
}
