//! Block-level types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BBox, ContentType, Line, Span};

/// Type of a page block.
///
/// Serialized as its string name; unrecognized names survive as
/// [`BlockType::Other`] so they can be filtered later instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    /// Body text
    Text,
    /// A title or heading
    Title,
    /// A display equation
    InterlineEquation,
    /// An image with its caption area
    Image,
    /// A table with its caption area
    Table,
    /// A footnote; never part of the main reading order
    Footnote,
    /// Any other detector label
    Other(String),
}

impl BlockType {
    /// Get the wire name of the block type.
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Text => "text_block",
            BlockType::Title => "title_block",
            BlockType::InterlineEquation => "interline_equation_block",
            BlockType::Image => "image_block",
            BlockType::Table => "table_block",
            BlockType::Footnote => "footnote",
            BlockType::Other(name) => name,
        }
    }

    /// Block type for a skeleton block made of a single span type.
    pub fn for_content(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Image => BlockType::Image,
            ContentType::Table => BlockType::Table,
            ContentType::InterlineEquation => BlockType::InterlineEquation,
            ContentType::Text | ContentType::InlineEquation => BlockType::Text,
        }
    }
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        match name {
            "text_block" => BlockType::Text,
            "title_block" => BlockType::Title,
            "interline_equation_block" => BlockType::InterlineEquation,
            "image_block" => BlockType::Image,
            "table_block" => BlockType::Table,
            "footnote" => BlockType::Footnote,
            other => BlockType::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockType {
    fn from(name: String) -> Self {
        match BlockType::from(name.as_str()) {
            BlockType::Other(_) => BlockType::Other(name),
            known => known,
        }
    }
}

impl From<BlockType> for String {
    fn from(t: BlockType) -> Self {
        match t {
            BlockType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skeleton block wrapping exactly one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBlock {
    /// The line's box
    pub bbox: BBox,
    /// The wrapped lines (one, for now)
    pub lines: Vec<Line>,
}

impl LineBlock {
    /// Wrap a single line.
    pub fn from_line(line: Line) -> Self {
        Self {
            bbox: line.bbox,
            lines: vec![line],
        }
    }

    /// Block type implied by the content: a lone image/table/equation span
    /// maps to its block type, anything else is text.
    pub fn block_type(&self) -> BlockType {
        match self.lines.as_slice() {
            [line] => line
                .sole_type()
                .map(BlockType::for_content)
                .unwrap_or(BlockType::Text),
            _ => BlockType::Text,
        }
    }

    /// All spans of the block in line order.
    pub fn into_spans(self) -> impl Iterator<Item = Span> {
        self.lines.into_iter().flat_map(|l| l.spans)
    }
}

/// A block detected upstream, before span filling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedBlock {
    /// Bounding box
    pub bbox: BBox,
    /// Block type
    #[serde(rename = "type")]
    pub block_type: BlockType,
}

impl DetectedBlock {
    /// Create a detected block.
    pub fn new(bbox: BBox, block_type: BlockType) -> Self {
        Self { bbox, block_type }
    }

    /// Check if the block is a footnote.
    pub fn is_footnote(&self) -> bool {
        self.block_type == BlockType::Footnote
    }
}

/// A block with the spans it owns attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilledBlock {
    /// Block type
    pub block_type: BlockType,
    /// Bounding box
    pub bbox: BBox,
    /// Owned spans, in pool order
    pub spans: Vec<Span>,
}

impl FilledBlock {
    /// Create a filled block.
    pub fn new(block_type: BlockType, bbox: BBox, spans: Vec<Span>) -> Self {
        Self {
            block_type,
            bbox,
            spans,
        }
    }

    /// Check if no spans were attached.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl From<LineBlock> for FilledBlock {
    fn from(block: LineBlock) -> Self {
        let block_type = block.block_type();
        let bbox = block.bbox;
        Self::new(block_type, bbox, block.into_spans().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_type_names_roundtrip() {
        for name in [
            "text_block",
            "title_block",
            "interline_equation_block",
            "image_block",
            "table_block",
            "footnote",
        ] {
            assert_eq!(BlockType::from(name).as_str(), name);
        }
        assert_eq!(
            BlockType::from("discarded"),
            BlockType::Other("discarded".to_string())
        );
    }

    #[test]
    fn test_detected_block_wire_format() {
        let block: DetectedBlock =
            serde_json::from_str(r#"{"bbox": [0, 0, 10, 10], "type": "header_block"}"#).unwrap();
        assert_eq!(block.block_type, BlockType::Other("header_block".into()));

        let json = serde_json::to_value(DetectedBlock::new(
            BBox::new(0.0, 0.0, 1.0, 1.0),
            BlockType::Footnote,
        ))
        .unwrap();
        assert_eq!(json["type"], "footnote");
    }

    #[test]
    fn test_line_block_type_from_content() {
        let image = Line::from_spans(vec![Span::new(
            BBox::new(0.0, 0.0, 50.0, 50.0),
            ContentType::Image,
        )])
        .unwrap();
        let block = LineBlock::from_line(image);
        assert_eq!(block.block_type(), BlockType::Image);

        let filled = FilledBlock::from(block.clone());
        assert_eq!(filled.block_type, BlockType::Image);
        assert_eq!(filled.bbox, block.bbox);
        assert_eq!(filled.spans.len(), 1);

        let text = Line::from_spans(vec![
            Span::text(BBox::new(0.0, 0.0, 10.0, 10.0), "a"),
            Span::new(BBox::new(12.0, 0.0, 20.0, 10.0), ContentType::InlineEquation),
        ])
        .unwrap();
        assert_eq!(LineBlock::from_line(text).block_type(), BlockType::Text);
    }
}
