//! Span-level types.

use serde::{Deserialize, Serialize};

use super::BBox;

/// Content type of a detected span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// A run of text
    Text,
    /// An equation embedded inside a text line
    InlineEquation,
    /// A display equation on its own line
    InterlineEquation,
    /// An image
    Image,
    /// A table
    Table,
}

impl ContentType {
    /// Get the wire name of the content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::InlineEquation => "inline_equation",
            ContentType::InterlineEquation => "interline_equation",
            ContentType::Image => "image",
            ContentType::Table => "table",
        }
    }
}

/// Why a span was excluded from further processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropTag {
    /// The span lies in no layout region
    NotInLayout,
}

/// A single detected fragment on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Bounding box
    pub bbox: BBox,

    /// Content type
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Recognized text, or a reference to the image/table resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Drop reason, set only when the span was excluded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<DropTag>,
}

impl Span {
    /// Create a new span.
    pub fn new(bbox: BBox, content_type: ContentType) -> Self {
        Self {
            bbox,
            content_type,
            content: None,
            tag: None,
        }
    }

    /// Create a text span with content.
    pub fn text(bbox: BBox, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::new(bbox, ContentType::Text)
        }
    }

    /// Set the span content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Mark the span as dropped.
    pub fn dropped(mut self, tag: DropTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Check if the span carries a drop tag.
    pub fn is_dropped(&self) -> bool {
        self.tag.is_some()
    }
}
