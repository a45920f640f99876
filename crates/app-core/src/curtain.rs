use crate::constants::*;
use std::time::Duration;

/// Phases of the intro overlay, in presentation order. `Done` is
/// terminal: the overlay is gone and nothing runs after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CurtainPhase {
    Hold,
    Opening,
    Fading,
    Done,
}

#[derive(Clone, Debug)]
pub struct CurtainTimeline {
    pub hold: Duration,
    pub open: Duration,
    pub fade: Duration,
    pub linger: Duration,
}

impl Default for CurtainTimeline {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(CURTAIN_HOLD_MS),
            open: Duration::from_millis(CURTAIN_OPEN_MS),
            fade: Duration::from_millis(CURTAIN_FADE_MS),
            linger: Duration::from_millis(CURTAIN_LINGER_MS),
        }
    }
}

impl CurtainTimeline {
    pub fn total(&self) -> Duration {
        self.hold + self.open + self.fade + self.linger
    }

    pub fn phase_at(&self, elapsed: Duration) -> CurtainPhase {
        if elapsed < self.hold {
            CurtainPhase::Hold
        } else if elapsed < self.hold + self.open {
            CurtainPhase::Opening
        } else if elapsed < self.total() {
            CurtainPhase::Fading
        } else {
            CurtainPhase::Done
        }
    }
}

/// Elapsed-time state machine for the intro overlay: Hold -> Opening ->
/// Fading, then the overlay is removed. No timers involved; the caller
/// feeds in elapsed time and reacts to phase changes.
pub struct IntroCurtain {
    timeline: CurtainTimeline,
    elapsed: Duration,
    phase: CurtainPhase,
}

impl IntroCurtain {
    pub fn new(timeline: CurtainTimeline) -> Self {
        Self {
            timeline,
            elapsed: Duration::ZERO,
            phase: CurtainPhase::Hold,
        }
    }

    pub fn phase(&self) -> CurtainPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == CurtainPhase::Done
    }

    /// Advance by `dt`. Returns the phase newly entered, if any; a
    /// large step that crosses several boundaries reports only the
    /// final phase. Never reports the same phase twice and never moves
    /// backwards.
    pub fn advance(&mut self, dt: Duration) -> Option<CurtainPhase> {
        if self.phase == CurtainPhase::Done {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        let next = self.timeline.phase_at(self.elapsed);
        if next != self.phase {
            self.phase = next;
            Some(next)
        } else {
            None
        }
    }
}
