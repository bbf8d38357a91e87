//! Geometric layout engine: lines, regions, reading order.

mod filling;
mod lines;
mod options;
mod ordering;
mod partition;
mod repair;

pub use lines::{line_sort_spans_by_left_to_right, merge_lines_to_block, LayoutAnalyzer};
pub use options::{
    LayoutConfig, BLOCK_IN_REGION_RATIO, DEFAULT_ATOMIC_TYPES, LINE_Y_OVERLAP_RATIO,
    SPAN_IN_BLOCK_RATIO, SPAN_IN_REGION_RATIO,
};
pub use repair::{fix_block_spans, BlockRepair, PassthroughRepair};
