//! Trait for detection + tracking backends.

use crate::counting::Detection;

/// Trait for object detection backends that also assign track identities.
///
/// Implement this trait to connect any detector/tracker to a counting session.
///
/// # Example
///
/// ```ignore
/// use footfall_rs::{DetectionSource, Detection};
///
/// struct MyTracker {
///     // Your model and tracker here
/// }
///
/// impl DetectionSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference, associate tracks and return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return tracked detections.
    ///
    /// Coordinates must already be in the session's working resolution.
    /// An empty vector is a valid result.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

/// Parallel `(boxes, class labels, track ids)` columns as produced by
/// YOLO-style trackers. Rows are zipped, so the shortest column wins.
impl IntoDetections for (Vec<[f32; 4]>, Vec<String>, Vec<Option<u64>>) {
    fn into_detections(self) -> Vec<Detection> {
        let (boxes, labels, ids) = self;
        boxes
            .into_iter()
            .zip(labels)
            .zip(ids)
            .map(|(([x1, y1, x2, y2], label), id)| Detection::new(id, x1, y1, x2, y2, label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_into_detections() {
        let columns = (
            vec![[0.0, 0.0, 10.0, 20.0], [5.0, 5.0, 15.0, 25.0]],
            vec!["person".to_string(), "dog".to_string()],
            vec![Some(3), None],
        );
        let dets = columns.into_detections();
        assert_eq!(dets.len(), 2);
        assert_eq!(dets[0].track_id, Some(3));
        assert_eq!(dets[0].bbox.to_tlbr(), [0.0, 0.0, 10.0, 20.0]);
        assert_eq!(dets[1].class_label, "dog");
        assert_eq!(dets[1].track_id, None);
    }
}
