//! Thresholds and policies for line building and block ordering.

use crate::error::{Error, Result};
use crate::model::ContentType;

/// Minimum share of a span's area inside a region for the span to belong to
/// it. Looser than the block thresholds: majority containment is enough.
pub const SPAN_IN_REGION_RATIO: f32 = 0.6;

/// Minimum share of a block's area inside a region for the block to belong
/// to it.
pub const BLOCK_IN_REGION_RATIO: f32 = 0.8;

/// Minimum share of a span's area inside a block for the block to own it.
pub const SPAN_IN_BLOCK_RATIO: f32 = 0.8;

/// Minimum vertical overlap, relative to the shorter span, for two spans to
/// share a line.
pub const LINE_Y_OVERLAP_RATIO: f32 = 0.8;

/// Content types that never share a line with anything else.
pub const DEFAULT_ATOMIC_TYPES: [ContentType; 3] = [
    ContentType::InterlineEquation,
    ContentType::Image,
    ContentType::Table,
];

/// Layout engine configuration.
///
/// All ratio comparisons are strict (`>`), so a value of exactly the
/// threshold does not qualify.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Span-to-region overlap ratio
    pub span_region_ratio: f32,

    /// Block-to-region overlap ratio
    pub block_region_ratio: f32,

    /// Span-to-block overlap ratio
    pub span_block_ratio: f32,

    /// Vertical overlap ratio for joining a line
    pub y_overlap_ratio: f32,

    /// Types forced onto a line of their own
    pub atomic_types: Vec<ContentType>,

    /// Whether to process multiple pages in parallel
    pub parallel: bool,
}

impl LayoutConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the span-to-region ratio.
    pub fn with_span_region_ratio(mut self, ratio: f32) -> Self {
        self.span_region_ratio = ratio;
        self
    }

    /// Set the block-to-region ratio.
    pub fn with_block_region_ratio(mut self, ratio: f32) -> Self {
        self.block_region_ratio = ratio;
        self
    }

    /// Set the span-to-block ratio.
    pub fn with_span_block_ratio(mut self, ratio: f32) -> Self {
        self.span_block_ratio = ratio;
        self
    }

    /// Set the vertical overlap ratio for line joining.
    pub fn with_y_overlap_ratio(mut self, ratio: f32) -> Self {
        self.y_overlap_ratio = ratio;
        self
    }

    /// Replace the atomic type set.
    pub fn with_atomic_types(mut self, types: impl IntoIterator<Item = ContentType>) -> Self {
        self.atomic_types = types.into_iter().collect();
        self
    }

    /// Enable or disable parallel page processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check if a content type must sit on a line alone.
    pub fn is_atomic(&self, content_type: ContentType) -> bool {
        self.atomic_types.contains(&content_type)
    }

    /// Reject ratios outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("span_region_ratio", self.span_region_ratio),
            ("block_region_ratio", self.block_region_ratio),
            ("span_block_ratio", self.span_block_ratio),
            ("y_overlap_ratio", self.y_overlap_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            span_region_ratio: SPAN_IN_REGION_RATIO,
            block_region_ratio: BLOCK_IN_REGION_RATIO,
            span_block_ratio: SPAN_IN_BLOCK_RATIO,
            y_overlap_ratio: LINE_Y_OVERLAP_RATIO,
            atomic_types: DEFAULT_ATOMIC_TYPES.to_vec(),
            parallel: true,
        }
    }
}
