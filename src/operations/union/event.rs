use std::cmp::Ordering;

use crate::math::{sign, Point2};

/// Whether an event opens or closes a covering arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Open,
    Close,
}

impl EventKind {
    /// Change in coverage count when the sweep passes the event.
    #[must_use]
    pub fn delta(self) -> i32 {
        match self {
            Self::Open => 1,
            Self::Close => -1,
        }
    }
}

/// A point on a circle's boundary where coverage by another circle changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEvent {
    /// Polar angle of the event around the swept circle's center.
    pub angle: f64,
    pub kind: EventKind,
    /// Boundary point at `angle`.
    pub point: Point2,
}

impl SweepEvent {
    #[must_use]
    pub fn open(angle: f64, point: Point2) -> Self {
        Self {
            angle,
            kind: EventKind::Open,
            point,
        }
    }

    #[must_use]
    pub fn close(angle: f64, point: Point2) -> Self {
        Self {
            angle,
            kind: EventKind::Close,
            point,
        }
    }

    /// Tolerant sweep order: by angle, opens before closes on ties.
    ///
    /// Not transitive across chains of near-equal angles, so it is never
    /// handed to a sort directly; see [`sort_events`].
    #[must_use]
    pub fn sweep_cmp(&self, other: &Self) -> Ordering {
        match sign(self.angle - other.angle) {
            Ordering::Equal => match (self.kind, other.kind) {
                (EventKind::Open, EventKind::Close) => Ordering::Less,
                (EventKind::Close, EventKind::Open) => Ordering::Greater,
                _ => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

/// Sorts events into sweep order.
///
/// Events are ordered by exact angle first. Then every run of events whose
/// neighbouring angles are within tolerance of each other is treated as a
/// tie and stably reordered so that opens come before closes.
pub fn sort_events(events: &mut [SweepEvent]) {
    events.sort_by(|a, b| a.angle.total_cmp(&b.angle));

    let mut run_start = 0;
    for i in 1..=events.len() {
        let run_ends = i == events.len()
            || sign(events[i].angle - events[i - 1].angle) != Ordering::Equal;
        if run_ends {
            events[run_start..i].sort_by_key(|e| e.kind == EventKind::Close);
            run_start = i;
        }
    }
}
