//! Bounding boxes and the overlap primitives used for assignment.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An axis-aligned box in page coordinates (y grows downward).
///
/// Serialized as `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BBox {
    /// Create a new box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box width (zero for inverted boxes).
    pub fn width(&self) -> f32 {
        (self.x1 - self.x0).max(0.0)
    }

    /// Box height (zero for inverted boxes).
    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).max(0.0)
    }

    /// Box area.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Smallest box covering both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Area of the intersection with another box, zero when disjoint.
    pub fn intersection_area(&self, other: &Self) -> f32 {
        let x_left = self.x0.max(other.x0);
        let y_top = self.y0.max(other.y0);
        let x_right = self.x1.min(other.x1);
        let y_bottom = self.y1.min(other.y1);

        if x_right < x_left || y_bottom < y_top {
            return 0.0;
        }

        (x_right - x_left) * (y_bottom - y_top)
    }

    /// Fraction of this box's area that lies inside `other`.
    pub fn overlap_ratio(&self, other: &Self) -> f32 {
        area_overlap_ratio(self, other)
    }

    /// Check that coordinates are finite and not inverted.
    pub fn is_valid(&self) -> bool {
        [self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|v| v.is_finite())
            && self.x0 <= self.x1
            && self.y0 <= self.y1
    }

    /// Validate the box, naming the owner in the error.
    pub fn validate(&self, what: impl FnOnce() -> String) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidBBox {
                what: what(),
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
            })
        }
    }
}

impl From<[f32; 4]> for BBox {
    fn from([x0, y0, x1, y1]: [f32; 4]) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl From<BBox> for [f32; 4] {
    fn from(b: BBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}

/// Intersection area divided by the area of `a`.
///
/// Asymmetric: answers "how much of `a` lies inside `b`". Returns 0 when `a`
/// has no area or the boxes do not touch.
pub fn area_overlap_ratio(a: &BBox, b: &BBox) -> f32 {
    let area = a.area();
    if area == 0.0 {
        return 0.0;
    }
    a.intersection_area(b) / area
}

/// Whether the vertical overlap of two boxes, relative to the shorter box,
/// exceeds `threshold`.
///
/// Zero-height boxes never overlap.
pub fn y_overlap_exceeds_threshold(a: &BBox, b: &BBox, threshold: f32) -> bool {
    let overlap = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
    let min_height = (a.y1 - a.y0).min(b.y1 - b.y0);
    if min_height <= 0.0 {
        return false;
    }
    overlap / min_height > threshold
}

/// Minimal box enclosing every input box, `None` for an empty input.
pub fn enclosing_box<'a, I>(boxes: I) -> Option<BBox>
where
    I: IntoIterator<Item = &'a BBox>,
{
    boxes.into_iter().fold(None, |acc, b| match acc {
        Some(u) => Some(b.union(&u)),
        None => Some(*b),
    })
}
