use crate::geom::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Engaged { origin: Option<Rect>, last: Point },
}

/// One reading taken while a drag is engaged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    pub pointer: Point,
    pub delta: Point,
    pub origin: Option<Rect>,
}

/// Press/move/release tracking shared by every draggable widget.
///
/// A widget owns exactly one session. Moves that arrive while idle are
/// ignored, so listeners installed on the whole document can forward every
/// event without checking who started the drag.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    phase: DragPhase,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub const fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    pub fn begin(&mut self, pointer: Point, origin: Option<Rect>) {
        self.phase = DragPhase::Engaged {
            origin,
            last: pointer,
        };
    }

    pub fn drag_to(&mut self, pointer: Point) -> Option<DragStep> {
        let DragPhase::Engaged { origin, last } = &mut self.phase else {
            return None;
        };
        let delta = pointer.delta_from(*last);
        *last = pointer;
        Some(DragStep {
            pointer,
            delta,
            origin: *origin,
        })
    }

    pub fn end(&mut self) -> bool {
        let was_engaged = self.is_engaged();
        self.phase = DragPhase::Idle;
        was_engaged
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self.phase, DragPhase::Engaged { .. })
    }

    pub fn origin(&self) -> Option<Rect> {
        match self.phase {
            DragPhase::Engaged { origin, .. } => origin,
            DragPhase::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_moves_are_ignored() {
        let mut session = DragSession::new();
        assert!(session.drag_to(Point::new(10.0, 10.0)).is_none());
        assert!(!session.is_engaged());
        assert!(!session.end());
    }

    #[test]
    fn delta_is_measured_from_previous_reading() {
        let mut session = DragSession::new();
        session.begin(Point::new(5.0, 5.0), None);
        let first = session.drag_to(Point::new(8.0, 1.0)).unwrap();
        assert_eq!(first.delta, Point::new(3.0, -4.0));
        let second = session.drag_to(Point::new(10.0, 1.0)).unwrap();
        assert_eq!(second.delta, Point::new(2.0, 0.0));
    }

    #[test]
    fn release_clears_origin() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        let mut session = DragSession::new();
        session.begin(Point::new(50.0, 50.0), Some(rect));
        assert_eq!(session.origin(), Some(rect));
        assert_eq!(session.drag_to(Point::new(60.0, 50.0)).unwrap().origin, Some(rect));
        assert!(session.end());
        assert_eq!(session.origin(), None);
        assert!(session.drag_to(Point::new(70.0, 50.0)).is_none());
    }
}
