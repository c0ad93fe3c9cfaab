//! Directional zone-crossing state machine.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use super::Point;
use super::layout::ZoneLayout;
use super::track_state::TrackState;

/// What a single observation did to the transition state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossingOutcome {
    /// Transitions whose condition holds this frame (seen in `from`, now in `to`)
    pub active: Vec<usize>,
    /// Transitions that counted this identity for the first time
    pub newly_counted: Vec<usize>,
}

impl CrossingOutcome {
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    #[inline]
    pub fn counted(&self, transition: usize) -> bool {
        self.newly_counted.contains(&transition)
    }
}

/// Tracks which zones each identity has visited and which identities each
/// transition has already counted.
///
/// Counted sets outlive per-identity state: forgetting or evicting an
/// identity never lowers a total.
#[derive(Debug, Clone)]
pub struct ZoneCrossingTracker {
    layout: ZoneLayout,
    states: HashMap<u64, TrackState>,
    counted: Vec<HashSet<u64>>,
}

impl ZoneCrossingTracker {
    pub fn new(layout: ZoneLayout) -> Self {
        let counted = vec![HashSet::new(); layout.transitions().len()];
        Self {
            layout,
            states: HashMap::new(),
            counted,
        }
    }

    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Feed one observation of `identity` with its anchor point.
    pub fn observe(&mut self, identity: u64, anchor: Point, frame: u64) -> CrossingOutcome {
        let zones = self.layout.zones();
        let zone_count = zones.len();
        let inside: Vec<bool> = zones
            .iter()
            .map(|z| z.contains(anchor).is_contained())
            .collect();

        let state = self
            .states
            .entry(identity)
            .or_insert_with(|| TrackState::new(zone_count, frame));
        state.last_seen = frame;

        let mut outcome = CrossingOutcome::default();
        for (idx, transition) in self.layout.transitions().iter().enumerate() {
            if inside[transition.from] {
                state.mark_entered(transition.from);
            }
            if !state.ever_entered(transition.from) || !inside[transition.to] {
                continue;
            }

            outcome.active.push(idx);
            if self.counted[idx].insert(identity) {
                info!(
                    track_id = identity,
                    transition = %transition.name,
                    total = self.counted[idx].len(),
                    "identity counted"
                );
                outcome.newly_counted.push(idx);
            }
        }

        outcome
    }

    /// Number of identities counted by `transition`.
    pub fn total(&self, transition: usize) -> usize {
        self.counted.get(transition).map_or(0, HashSet::len)
    }

    pub fn has_counted(&self, transition: usize, identity: u64) -> bool {
        self.counted
            .get(transition)
            .is_some_and(|set| set.contains(&identity))
    }

    pub fn state(&self, identity: u64) -> Option<&TrackState> {
        self.states.get(&identity)
    }

    /// Drop the visit memory of `identity`; counted sets are kept.
    pub fn forget(&mut self, identity: u64) -> bool {
        self.states.remove(&identity).is_some()
    }

    /// Remove identities not observed for more than `max_idle` frames.
    pub fn evict_idle(&mut self, current_frame: u64, max_idle: u64) -> Vec<u64> {
        let mut evicted = Vec::new();
        self.states.retain(|&id, state| {
            let keep = state.idle_frames(current_frame) <= max_idle;
            if !keep {
                evicted.push(id);
            }
            keep
        });
        if !evicted.is_empty() {
            debug!(count = evicted.len(), current_frame, "evicted idle identities");
        }
        evicted
    }

    /// Forget every identity and zero all totals.
    pub fn reset(&mut self) {
        self.states.clear();
        for set in &mut self.counted {
            set.clear();
        }
    }

    /// Number of identities with live state.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
