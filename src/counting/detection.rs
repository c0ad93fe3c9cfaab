use super::rect::Rect;

/// One tracked observation handed over by the external detector/tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Tracker identity; detections without one are skipped
    pub track_id: Option<u64>,
    /// Bounding box in working-resolution pixels
    pub bbox: Rect,
    /// Class name as reported by the detector
    pub class_label: String,
}

impl Detection {
    pub fn new(
        track_id: Option<u64>,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        class_label: impl Into<String>,
    ) -> Self {
        Self {
            track_id,
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
            class_label: class_label.into(),
        }
    }

    pub fn from_rect(track_id: Option<u64>, bbox: Rect, class_label: impl Into<String>) -> Self {
        Self {
            track_id,
            bbox,
            class_label: class_label.into(),
        }
    }

    /// Whether this detection belongs to `tracked_class` (substring match on the label).
    #[inline]
    pub fn is_class(&self, tracked_class: &str) -> bool {
        self.class_label.contains(tracked_class)
    }
}
