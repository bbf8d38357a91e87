//! Page pipeline: wires the layout stages together for whole pages.

use std::sync::Arc;

use rayon::prelude::*;

use crate::error::Result;
use crate::layout::{
    fix_block_spans, merge_lines_to_block, BlockRepair, LayoutAnalyzer, LayoutConfig,
    PassthroughRepair,
};
use crate::model::{FilledBlock, LayoutRegion, LineBlock, PageInput, PageOutput, PageStats, Span};

/// Runs reading-order reconstruction for pages.
///
/// # Example
///
/// ```
/// use readorder::{BBox, LayoutRegion, PageInput, PagePipeline, Span};
///
/// let page = PageInput::new(1)
///     .with_regions(LayoutRegion::sequence([BBox::new(0.0, 0.0, 600.0, 800.0)]))
///     .with_spans(vec![
///         Span::text(BBox::new(10.0, 40.0, 90.0, 50.0), "second"),
///         Span::text(BBox::new(10.0, 10.0, 90.0, 20.0), "first"),
///     ]);
///
/// let output = PagePipeline::new().process(page)?;
/// assert_eq!(output.plain_text(), "first\nsecond");
/// # Ok::<(), readorder::Error>(())
/// ```
#[derive(Clone)]
pub struct PagePipeline {
    analyzer: LayoutAnalyzer,
    repair: Arc<dyn BlockRepair>,
}

impl PagePipeline {
    /// Create a pipeline with default configuration and no block repair.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            analyzer: LayoutAnalyzer::with_config(config),
            repair: Arc::new(PassthroughRepair),
        }
    }

    /// Set the image/table repair collaborator.
    pub fn with_repair(mut self, repair: impl BlockRepair + 'static) -> Self {
        self.repair = Arc::new(repair);
        self
    }

    /// Get the underlying analyzer.
    pub fn analyzer(&self) -> &LayoutAnalyzer {
        &self.analyzer
    }

    /// Build one skeleton block per line, region by region.
    ///
    /// Returns the blocks in region order and the spans outside every
    /// region.
    pub fn build_line_blocks(
        &self,
        spans: Vec<Span>,
        regions: &[LayoutRegion],
    ) -> (Vec<LineBlock>, Vec<Span>) {
        let (lines, dropped) = self.analyzer.merge_spans_to_line_by_layout(spans, regions);
        (merge_lines_to_block(lines), dropped)
    }

    /// Reconstruct the reading order of one page.
    ///
    /// Spans are first partitioned into region-scoped lines; spans outside
    /// every region are dropped. Detected blocks are then ordered by layout
    /// and filled with the in-region spans. A page without detected blocks
    /// uses one block per line instead, already in reading order. Either way
    /// the blocks finish with type-specific repair.
    pub fn process(&self, input: PageInput) -> Result<PageOutput> {
        self.analyzer.config().validate()?;
        input.validate()?;

        let PageInput {
            page_no,
            spans,
            regions,
            blocks,
            image_candidates,
            table_candidates,
        } = input;

        let mut stats = PageStats {
            input_spans: spans.len(),
            ..Default::default()
        };

        let (line_blocks, dropped_spans) = self.build_line_blocks(spans, &regions);
        stats.lines = line_blocks.len();
        stats.dropped_spans = dropped_spans.len();

        let (filled, excluded_blocks, unassigned_spans) = if blocks.is_empty() {
            // Line blocks already run region by region, top to bottom
            stats.input_blocks = line_blocks.len();
            stats.ordered_blocks = line_blocks.len();
            let filled: Vec<FilledBlock> =
                line_blocks.into_iter().map(FilledBlock::from).collect();
            (filled, Vec::new(), Vec::new())
        } else {
            stats.input_blocks = blocks.len();
            let (ordered, excluded) = self.analyzer.sort_blocks_by_layout(blocks, &regions)?;
            stats.ordered_blocks = ordered.len();
            stats.excluded_blocks = excluded.len();

            let pool: Vec<Span> = line_blocks
                .into_iter()
                .flat_map(LineBlock::into_spans)
                .collect();
            let (filled, unassigned) = self.analyzer.fill_spans_in_blocks(ordered, pool);
            (filled, excluded, unassigned)
        };
        stats.unassigned_spans = unassigned_spans.len();

        let blocks = fix_block_spans(
            filled,
            &image_candidates,
            &table_candidates,
            self.repair.as_ref(),
        );
        stats.output_blocks = blocks.len();

        log::debug!("Page {}: {:?}", page_no, stats);

        Ok(PageOutput {
            page_no,
            blocks,
            dropped_spans,
            unassigned_spans,
            excluded_blocks,
            stats,
        })
    }

    /// Reconstruct the reading order of many pages.
    ///
    /// Each page owns its own pools, so pages run in parallel when the
    /// configuration allows it. Output order matches input order; the first
    /// failing page aborts the batch.
    pub fn process_pages(&self, pages: Vec<PageInput>) -> Result<Vec<PageOutput>> {
        if self.analyzer.config().parallel {
            pages
                .into_par_iter()
                .map(|page| self.process(page))
                .collect()
        } else {
            pages.into_iter().map(|page| self.process(page)).collect()
        }
    }
}

impl Default for PagePipeline {
    fn default() -> Self {
        Self::new()
    }
}
