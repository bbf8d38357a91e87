//! Type-specific block repair dispatch.

use crate::model::{BBox, BlockType, FilledBlock};

/// Repairs image and table blocks against candidate boxes from the detector.
///
/// Implementations must return a block of the same shape: the result always
/// keeps a `bbox` and a `block_type`.
pub trait BlockRepair: Send + Sync {
    /// Repair an image block using the detected image candidates.
    fn fix_image_block(&self, block: FilledBlock, candidates: &[BBox]) -> FilledBlock;

    /// Repair a table block using the detected table candidates.
    fn fix_table_block(&self, block: FilledBlock, candidates: &[BBox]) -> FilledBlock;
}

/// Repair collaborator that leaves every block as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRepair;

impl BlockRepair for PassthroughRepair {
    fn fix_image_block(&self, block: FilledBlock, _candidates: &[BBox]) -> FilledBlock {
        block
    }

    fn fix_table_block(&self, block: FilledBlock, _candidates: &[BBox]) -> FilledBlock {
        block
    }
}

/// Run type-specific repair over filled blocks.
///
/// Image and table blocks go to `repair`; text, title and display-equation
/// blocks pass through; every other type is left out of the result. The
/// relative order of the kept blocks is unchanged.
pub fn fix_block_spans(
    blocks: Vec<FilledBlock>,
    image_candidates: &[BBox],
    table_candidates: &[BBox],
    repair: &dyn BlockRepair,
) -> Vec<FilledBlock> {
    let mut fixed = Vec::with_capacity(blocks.len());

    for block in blocks {
        let block = match block.block_type {
            BlockType::Image => repair.fix_image_block(block, image_candidates),
            BlockType::Table => repair.fix_table_block(block, table_candidates),
            BlockType::Text | BlockType::Title | BlockType::InterlineEquation => block,
            BlockType::Footnote | BlockType::Other(_) => {
                log::debug!("Skipping block of type {}", block.block_type);
                continue;
            }
        };
        fixed.push(block);
    }

    fixed
}
