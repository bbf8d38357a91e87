//! # readorder
//!
//! Reading-order reconstruction for page detections.
//!
//! Upstream layout/OCR models produce an unordered bag of spans (text runs,
//! images, tables, equations) plus layout regions. This library groups the
//! spans into lines, partitions them by region, orders blocks into a single
//! reading sequence per page and attaches every span to the block that owns
//! it.
//!
//! ## Quick Start
//!
//! ```
//! use readorder::{BBox, LayoutRegion, PageInput, Span};
//!
//! fn main() -> readorder::Result<()> {
//!     let page = PageInput::new(1)
//!         .with_regions(LayoutRegion::sequence([
//!             BBox::new(0.0, 0.0, 300.0, 800.0),   // left column
//!             BBox::new(300.0, 0.0, 600.0, 800.0), // right column
//!         ]))
//!         .with_spans(vec![
//!             Span::text(BBox::new(310.0, 10.0, 400.0, 20.0), "three"),
//!             Span::text(BBox::new(10.0, 40.0, 100.0, 50.0), "two"),
//!             Span::text(BBox::new(10.0, 10.0, 100.0, 20.0), "one"),
//!         ]);
//!
//!     let output = readorder::process_page(page)?;
//!     assert_eq!(output.plain_text(), "one\ntwo\nthree");
//!     Ok(())
//! }
//! ```
//!
//! ## Stages
//!
//! - **Line building**: spans sharing a vertical band form a line; images,
//!   tables and display equations always stand alone
//! - **Region partitioning**: each region claims the spans mostly inside it;
//!   the rest are dropped with a tag
//! - **Block ordering**: regions in their given order, blocks top to bottom
//!   inside each region, footnotes left out
//! - **Span filling**: each block claims the spans it contains
//! - **Block fixing**: image and table blocks go through a pluggable
//!   [`BlockRepair`]; unknown block types are filtered out

pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{
    fix_block_spans, line_sort_spans_by_left_to_right, merge_lines_to_block, BlockRepair,
    LayoutAnalyzer, LayoutConfig, PassthroughRepair,
};
pub use model::{
    area_overlap_ratio, enclosing_box, y_overlap_exceeds_threshold, BBox, BlockType,
    ContentType, DetectedBlock, DropTag, FilledBlock, LayoutRegion, Line, LineBlock, PageInput,
    PageOutput, PageStats, RegionKind, Span,
};
pub use pipeline::PagePipeline;
pub use render::{to_json, to_text, JsonFormat};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

/// Reconstruct the reading order of one page with default settings.
pub fn process_page(input: PageInput) -> Result<PageOutput> {
    PagePipeline::new().process(input)
}

/// Reconstruct the reading order of several pages with default settings.
pub fn process_pages(pages: Vec<PageInput>) -> Result<Vec<PageOutput>> {
    PagePipeline::new().process_pages(pages)
}

/// Page input as found on disk: one page object or an array of pages.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageDocument {
    Many(Vec<PageInput>),
    One(Box<PageInput>),
}

impl From<PageDocument> for Vec<PageInput> {
    fn from(doc: PageDocument) -> Self {
        match doc {
            PageDocument::Many(pages) => pages,
            PageDocument::One(page) => vec![*page],
        }
    }
}

/// Load page input from a JSON string.
///
/// # Example
///
/// ```
/// let pages = readorder::load_pages_from_str(
///     r#"{"page_no": 2, "spans": [{"bbox": [0, 0, 10, 10], "type": "text"}]}"#,
/// )
/// .unwrap();
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].page_no, 2);
/// ```
pub fn load_pages_from_str(json: &str) -> Result<Vec<PageInput>> {
    let doc: PageDocument = serde_json::from_str(json)?;
    Ok(doc.into())
}

/// Load page input from a reader.
pub fn load_pages_from_reader<R: Read>(reader: R) -> Result<Vec<PageInput>> {
    let doc: PageDocument = serde_json::from_reader(reader)?;
    Ok(doc.into())
}

/// Load page input from a JSON file.
///
/// ```no_run
/// let pages = readorder::load_pages("pages.json")?;
/// let outputs = readorder::process_pages(pages)?;
/// # Ok::<(), readorder::Error>(())
/// ```
pub fn load_pages<P: AsRef<Path>>(path: P) -> Result<Vec<PageInput>> {
    let file = File::open(path)?;
    load_pages_from_reader(BufReader::new(file))
}
