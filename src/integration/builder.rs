//! Builder for creating Detection objects from various input formats.

use crate::counting::Detection;

/// Builder for creating `Detection` objects from various input formats.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    track_id: Option<u64>,
    class_label: String,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Scale the box from source frame coordinates into the working resolution.
    pub fn rescale(mut self, sx: f32, sy: f32) -> Self {
        self.x1 *= sx;
        self.x2 *= sx;
        self.y1 *= sy;
        self.y2 *= sy;
        self
    }

    /// Set the tracker identity.
    pub fn track_id(mut self, id: u64) -> Self {
        self.track_id = Some(id);
        self
    }

    /// Set the class label.
    pub fn class_label(mut self, label: impl Into<String>) -> Self {
        self.class_label = label.into();
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        Detection::new(
            self.track_id,
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            self.class_label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_builder() {
        let det = DetectionBuilder::new()
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .track_id(4)
            .class_label("person")
            .build();

        assert_eq!(det.track_id, Some(4));
        assert_eq!(det.class_label, "person");
        assert_eq!(det.bbox.to_tlbr(), [10.0, 20.0, 50.0, 80.0]);
    }

    #[test]
    fn test_builder_without_id() {
        let det = DetectionBuilder::new().xywh(50.0, 50.0, 20.0, 40.0).build();
        assert_eq!(det.track_id, None);
        assert_eq!(det.bbox.to_tlbr(), [40.0, 30.0, 60.0, 70.0]);
    }

    #[test]
    fn test_rescale_to_working_resolution() {
        let det = DetectionBuilder::new()
            .tlbr(100.0, 100.0, 200.0, 300.0)
            .rescale(0.5, 0.5)
            .build();
        assert_eq!(det.bbox.to_tlbr(), [50.0, 50.0, 100.0, 150.0]);
    }
}
