//! Page-level types.

use serde::{Deserialize, Serialize};

use super::{validate_region_order, BBox, DetectedBlock, FilledBlock, LayoutRegion, Span};
use crate::error::Result;

/// Everything the upstream stages detected on one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInput {
    /// Page number (1-indexed)
    #[serde(default = "default_page_no")]
    pub page_no: u32,

    /// Detected spans, in no particular order
    #[serde(default)]
    pub spans: Vec<Span>,

    /// Layout regions, in reading order
    #[serde(default)]
    pub regions: Vec<LayoutRegion>,

    /// Pre-detected blocks; empty means "use the line skeleton"
    #[serde(default)]
    pub blocks: Vec<DetectedBlock>,

    /// Candidate boxes handed to the image repair collaborator
    #[serde(default)]
    pub image_candidates: Vec<BBox>,

    /// Candidate boxes handed to the table repair collaborator
    #[serde(default)]
    pub table_candidates: Vec<BBox>,
}

fn default_page_no() -> u32 {
    1
}

impl PageInput {
    /// Create an empty page input.
    pub fn new(page_no: u32) -> Self {
        Self {
            page_no,
            ..Default::default()
        }
    }

    /// Set the spans.
    pub fn with_spans(mut self, spans: Vec<Span>) -> Self {
        self.spans = spans;
        self
    }

    /// Set the layout regions.
    pub fn with_regions(mut self, regions: Vec<LayoutRegion>) -> Self {
        self.regions = regions;
        self
    }

    /// Set the detected blocks.
    pub fn with_blocks(mut self, blocks: Vec<DetectedBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Set the image and table candidate boxes.
    pub fn with_candidates(mut self, images: Vec<BBox>, tables: Vec<BBox>) -> Self {
        self.image_candidates = images;
        self.table_candidates = tables;
        self
    }

    /// Validate every box and the region order.
    pub fn validate(&self) -> Result<()> {
        let page = self.page_no;
        for (i, span) in self.spans.iter().enumerate() {
            span.bbox.validate(|| format!("page {} span {}", page, i))?;
        }
        for (i, region) in self.regions.iter().enumerate() {
            region.bbox.validate(|| format!("page {} region {}", page, i))?;
        }
        for (i, block) in self.blocks.iter().enumerate() {
            block.bbox.validate(|| format!("page {} block {}", page, i))?;
        }
        for (i, bbox) in self.image_candidates.iter().enumerate() {
            bbox.validate(|| format!("page {} image candidate {}", page, i))?;
        }
        for (i, bbox) in self.table_candidates.iter().enumerate() {
            bbox.validate(|| format!("page {} table candidate {}", page, i))?;
        }
        validate_region_order(&self.regions)
    }
}

/// Reading-order result for one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageOutput {
    /// Page number (1-indexed)
    pub page_no: u32,

    /// Blocks in final reading order, with their spans
    pub blocks: Vec<FilledBlock>,

    /// Spans outside every layout region, each tagged
    pub dropped_spans: Vec<Span>,

    /// Spans inside a region but claimed by no block
    pub unassigned_spans: Vec<Span>,

    /// Footnote blocks and blocks matching no region
    pub excluded_blocks: Vec<DetectedBlock>,

    /// Per-stage counts
    pub stats: PageStats,
}

impl PageOutput {
    /// Plain text of the page in reading order, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| {
                b.spans
                    .iter()
                    .filter_map(|s| s.content.as_deref())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Counts collected while processing a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStats {
    /// Spans received
    pub input_spans: usize,
    /// Lines built inside regions
    pub lines: usize,
    /// Spans dropped as outside every region
    pub dropped_spans: usize,
    /// Blocks entering the orderer
    pub input_blocks: usize,
    /// Blocks placed in reading order
    pub ordered_blocks: usize,
    /// Blocks excluded from reading order
    pub excluded_blocks: usize,
    /// Blocks emitted after type fixing
    pub output_blocks: usize,
    /// Spans claimed by no block
    pub unassigned_spans: usize,
}
