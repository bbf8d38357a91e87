//! Layout-driven block ordering.

use std::cmp::Ordering;

use crate::error::Result;
use crate::model::{area_overlap_ratio, validate_region_order, DetectedBlock, LayoutRegion};

use super::LayoutAnalyzer;

impl LayoutAnalyzer {
    /// Put detected blocks into reading order.
    ///
    /// `regions` must already be in reading order (multi-column pages list
    /// their columns in the order they are read); this is checked against
    /// each region's `order` and never corrected. For each region, every
    /// non-footnote block still in the pool whose area lies inside the region
    /// by more than `block_region_ratio` is taken, sorted top to bottom and
    /// appended.
    ///
    /// Returns the ordered blocks and the excluded rest: footnotes and blocks
    /// no region claimed, in their original order.
    pub fn sort_blocks_by_layout(
        &self,
        blocks: Vec<DetectedBlock>,
        regions: &[LayoutRegion],
    ) -> Result<(Vec<DetectedBlock>, Vec<DetectedBlock>)> {
        validate_region_order(regions)?;

        let ratio = self.config.block_region_ratio;
        let mut pool = blocks;
        let mut ordered: Vec<DetectedBlock> = Vec::with_capacity(pool.len());

        for region in regions {
            let (mut inside, rest): (Vec<DetectedBlock>, Vec<DetectedBlock>) =
                pool.into_iter().partition(|block| {
                    !block.is_footnote() && area_overlap_ratio(&block.bbox, &region.bbox) > ratio
                });
            pool = rest;

            if inside.is_empty() {
                continue;
            }

            log::debug!(
                "LayoutAnalyzer: region {} holds {} blocks",
                region.order,
                inside.len()
            );

            // Top to bottom within a region
            inside.sort_by(|a, b| {
                a.bbox
                    .y0
                    .partial_cmp(&b.bbox.y0)
                    .unwrap_or(Ordering::Equal)
            });
            ordered.extend(inside);
        }

        if !pool.is_empty() {
            log::debug!(
                "LayoutAnalyzer: {} blocks excluded from reading order ({} footnotes)",
                pool.len(),
                pool.iter().filter(|b| b.is_footnote()).count()
            );
        }

        Ok((ordered, pool))
    }
}
