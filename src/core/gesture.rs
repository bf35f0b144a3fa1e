/// Horizontal distance (in points) a card must travel before release counts
/// as a decision. Changing this changes observable behavior, not just looks.
pub const SWIPE_THRESHOLD: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    Accept,
    Reject,
}

/// Interprets a pointer drag as a swipe. One decision at most per completed
/// drag; movement alone never decides anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    origin: (f32, f32),
    offset: (f32, f32),
    active: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag at the given point. First-wins: a second pointer-down
    /// while a drag is active is ignored.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.active {
            return;
        }
        self.origin = (x, y);
        self.offset = (0.0, 0.0);
        self.active = true;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.active {
            return;
        }
        self.offset = (x - self.origin.0, y - self.origin.1);
    }

    /// Ends the drag and classifies it. The offset is consumed either way, so
    /// the card snaps back when no decision was reached.
    pub fn pointer_up(&mut self) -> Option<SwipeDecision> {
        if !self.active {
            return None;
        }

        let decision = if self.offset.0 > SWIPE_THRESHOLD {
            Some(SwipeDecision::Accept)
        } else if self.offset.0 < -SWIPE_THRESHOLD {
            Some(SwipeDecision::Reject)
        } else {
            None
        };

        self.offset = (0.0, 0.0);
        self.active = false;
        decision
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_to(dx: f32, dy: f32) -> DragState {
        let mut drag = DragState::new();
        drag.pointer_down(200.0, 300.0);
        drag.pointer_move(200.0 + dx, 300.0 + dy);
        drag
    }

    #[test]
    fn right_swipe_past_threshold_accepts() {
        let mut drag = drag_to(150.0, 10.0);
        assert_eq!(drag.pointer_up(), Some(SwipeDecision::Accept));
        assert_eq!(drag.offset(), (0.0, 0.0));
        assert!(!drag.is_active());
    }

    #[test]
    fn left_swipe_past_threshold_rejects() {
        let mut drag = drag_to(-150.0, -5.0);
        assert_eq!(drag.pointer_up(), Some(SwipeDecision::Reject));
    }

    #[test]
    fn short_drag_snaps_back_without_decision() {
        let mut drag = drag_to(50.0, 0.0);
        assert_eq!(drag.pointer_up(), None);
        assert_eq!(drag.offset(), (0.0, 0.0));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut drag = drag_to(SWIPE_THRESHOLD, 0.0);
        assert_eq!(drag.pointer_up(), None);
    }

    #[test]
    fn vertical_travel_never_decides() {
        let mut drag = drag_to(0.0, 400.0);
        assert_eq!(drag.pointer_up(), None);
    }

    #[test]
    fn second_pointer_down_is_ignored_while_active() {
        let mut drag = DragState::new();
        drag.pointer_down(0.0, 0.0);
        drag.pointer_move(150.0, 0.0);
        drag.pointer_down(1000.0, 1000.0);

        assert_eq!(drag.offset(), (150.0, 0.0));
        assert_eq!(drag.pointer_up(), Some(SwipeDecision::Accept));
    }

    #[test]
    fn move_and_up_without_down_are_no_ops() {
        let mut drag = DragState::new();
        drag.pointer_move(500.0, 0.0);
        assert_eq!(drag.offset(), (0.0, 0.0));
        assert_eq!(drag.pointer_up(), None);
    }
}
