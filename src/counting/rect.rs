use super::Point;

/// Axis-aligned bounding box in working-resolution pixel coordinates.
///
/// Stored as top-left corner plus size (TLWH); detectors usually hand over
/// corner pairs, see [`Rect::from_tlbr`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the bounding box
    pub width: f32,
    /// Height of the bounding box
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// Bottom-left corner `(x1, y2)`, the point tested against zones.
    #[inline]
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y + self.height)
    }

    /// Geometric center, used for trails and the density grid.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Where the identity label sits: just above the top-left corner.
    #[inline]
    pub fn label_origin(&self) -> Point {
        Point::new(self.x, self.y - 10.0)
    }
}
