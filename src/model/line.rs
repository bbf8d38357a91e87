//! Line-level types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{enclosing_box, BBox, ContentType, Span};

/// A text line: spans sharing a vertical band, ordered left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Union of the span boxes
    pub bbox: BBox,
    /// Spans sorted by ascending x0
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from spans, sorting them by X and computing the box.
    ///
    /// Returns `None` for an empty span list, since an empty line has no box.
    pub fn from_spans(mut spans: Vec<Span>) -> Option<Self> {
        spans.sort_by(|a, b| a.bbox.x0.partial_cmp(&b.bbox.x0).unwrap_or(Ordering::Equal));
        let bbox = enclosing_box(spans.iter().map(|s| &s.bbox))?;
        Some(Self { bbox, spans })
    }

    /// Number of spans in the line.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Content type shared by a single-span line, if any.
    pub fn sole_type(&self) -> Option<ContentType> {
        match self.spans.as_slice() {
            [only] => Some(only.content_type),
            _ => None,
        }
    }

    /// Concatenated span contents separated by single spaces.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .filter_map(|s| s.content.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
