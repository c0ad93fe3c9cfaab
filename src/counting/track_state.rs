/// Per-identity crossing memory.
///
/// One "ever seen inside" flag per zone of the layout. Flags only ever go
/// from `false` to `true` for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackState {
    ever_entered: Vec<bool>,
    /// Frame index of the most recent observation
    pub last_seen: u64,
}

impl TrackState {
    pub fn new(zone_count: usize, frame: u64) -> Self {
        Self {
            ever_entered: vec![false; zone_count],
            last_seen: frame,
        }
    }

    #[inline]
    pub fn ever_entered(&self, zone: usize) -> bool {
        self.ever_entered.get(zone).copied().unwrap_or(false)
    }

    #[inline]
    pub fn mark_entered(&mut self, zone: usize) {
        if let Some(flag) = self.ever_entered.get_mut(zone) {
            *flag = true;
        }
    }

    /// Frames elapsed since the identity was last observed.
    #[inline]
    pub fn idle_frames(&self, current_frame: u64) -> u64 {
        current_frame.saturating_sub(self.last_seen)
    }
}
