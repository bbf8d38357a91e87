//! Plain text rendering for page results.

use crate::model::PageOutput;

/// Join the text of every page in reading order, pages separated by a
/// blank line.
pub fn to_text(pages: &[PageOutput]) -> String {
    pages
        .iter()
        .map(PageOutput::plain_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
