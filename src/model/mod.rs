//! Page content model for reading-order reconstruction.
//!
//! These types carry detections from the upstream layout/OCR stage through
//! line building, region partitioning, block ordering and span filling.
//! All of them serialize with serde so pages can be fed in and read out as
//! JSON.

mod block;
mod geometry;
mod line;
mod page;
mod region;
mod span;

pub use block::{BlockType, DetectedBlock, FilledBlock, LineBlock};
pub use geometry::{area_overlap_ratio, enclosing_box, y_overlap_exceeds_threshold, BBox};
pub use line::Line;
pub use page::{PageInput, PageOutput, PageStats};
pub use region::{validate_region_order, LayoutRegion, RegionKind};
pub use span::{ContentType, DropTag, Span};
