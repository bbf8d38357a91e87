//! Span-to-block attachment.

use crate::model::{area_overlap_ratio, DetectedBlock, FilledBlock, Span};

use super::LayoutAnalyzer;

impl LayoutAnalyzer {
    /// Attach spans to the blocks that own them.
    ///
    /// Blocks are visited in the given (reading) order and each claims every
    /// span still in the pool whose area lies inside it by more than
    /// `span_block_ratio`. A span that would fit several blocks goes to the
    /// first one. Blocks that claim nothing are still returned, with no spans.
    ///
    /// Returns the filled blocks and the spans nobody claimed.
    pub fn fill_spans_in_blocks(
        &self,
        blocks: Vec<DetectedBlock>,
        spans: Vec<Span>,
    ) -> (Vec<FilledBlock>, Vec<Span>) {
        let ratio = self.config.span_block_ratio;
        let mut pool = spans;
        let mut filled = Vec::with_capacity(blocks.len());

        for block in blocks {
            let (owned, rest): (Vec<Span>, Vec<Span>) = pool
                .into_iter()
                .partition(|span| area_overlap_ratio(&span.bbox, &block.bbox) > ratio);
            pool = rest;
            filled.push(FilledBlock::new(block.block_type, block.bbox, owned));
        }

        log::debug!(
            "LayoutAnalyzer: filled {} blocks, {} spans unclaimed",
            filled.len(),
            pool.len()
        );

        (filled, pool)
    }
}
