//! Span-to-line clustering and line-to-block wrapping.

use std::cmp::Ordering;

use crate::model::{y_overlap_exceeds_threshold, Line, LineBlock, Span};

use super::LayoutConfig;

/// Geometric layout engine for one page at a time.
///
/// Every stage takes ownership of the pool it consumes and hands back what
/// it did not use, so no span or block is ever counted twice.
#[derive(Debug, Clone, Default)]
pub struct LayoutAnalyzer {
    pub(crate) config: LayoutConfig,
}

impl LayoutAnalyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Group spans into raw lines.
    ///
    /// Spans are sorted by y0 and scanned once, top to bottom. A span joins
    /// the current line when it overlaps the line's last span vertically
    /// beyond the configured ratio. Atomic types (images, tables, display
    /// equations) always get a line of their own. There is no backtracking:
    /// a short span wedged between two tall ones can split a line.
    pub fn merge_spans_to_line(&self, mut spans: Vec<Span>) -> Vec<Vec<Span>> {
        if spans.is_empty() {
            return vec![];
        }

        spans.sort_by(|a, b| {
            a.bbox
                .y0
                .partial_cmp(&b.bbox.y0)
                .unwrap_or(Ordering::Equal)
        });

        let mut lines: Vec<Vec<Span>> = Vec::new();
        let mut current_line: Vec<Span> = Vec::new();

        for span in spans {
            let forced_break = self.config.is_atomic(span.content_type)
                || current_line
                    .iter()
                    .any(|s| self.config.is_atomic(s.content_type));

            let joins = match current_line.last() {
                None => true,
                Some(last) => {
                    !forced_break
                        && y_overlap_exceeds_threshold(
                            &span.bbox,
                            &last.bbox,
                            self.config.y_overlap_ratio,
                        )
                }
            };

            if !joins {
                lines.push(std::mem::take(&mut current_line));
            }
            current_line.push(span);
        }

        // Don't forget the last line
        if !current_line.is_empty() {
            lines.push(current_line);
        }

        lines
    }
}

/// Sort each raw line left to right and compute its box.
pub fn line_sort_spans_by_left_to_right(lines: Vec<Vec<Span>>) -> Vec<Line> {
    lines.into_iter().filter_map(Line::from_spans).collect()
}

/// Wrap every line in a block of its own.
///
/// Paragraph grouping is not done here; callers get exactly one block per
/// line, with the block box equal to the line box.
pub fn merge_lines_to_block(lines: Vec<Line>) -> Vec<LineBlock> {
    lines.into_iter().map(LineBlock::from_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, ContentType};

    fn text(x0: f32, y0: f32, x1: f32, y1: f32, content: &str) -> Span {
        Span::text(BBox::new(x0, y0, x1, y1), content)
    }

    fn typed(x0: f32, y0: f32, x1: f32, y1: f32, content_type: ContentType) -> Span {
        Span::new(BBox::new(x0, y0, x1, y1), content_type)
    }

    fn contents(line: &[Span]) -> Vec<&str> {
        line.iter().filter_map(|s| s.content.as_deref()).collect()
    }

    #[test]
    fn test_merge_empty_and_single() {
        let analyzer = LayoutAnalyzer::new();
        assert!(analyzer.merge_spans_to_line(vec![]).is_empty());

        let lines = analyzer.merge_spans_to_line(vec![text(0.0, 0.0, 10.0, 10.0, "a")]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 1);
    }

    #[test]
    fn test_merge_groups_by_vertical_band() {
        let analyzer = LayoutAnalyzer::new();
        let lines = analyzer.merge_spans_to_line(vec![
            text(60.0, 21.0, 90.0, 31.0, "d"),
            text(0.0, 0.0, 50.0, 10.0, "a"),
            text(0.0, 20.0, 50.0, 30.0, "c"),
            text(60.0, 1.0, 90.0, 11.0, "b"),
        ]);

        assert_eq!(lines.len(), 2);
        assert_eq!(contents(&lines[0]), vec!["a", "b"]);
        assert_eq!(contents(&lines[1]), vec!["c", "d"]);
    }

    #[test]
    fn test_atomic_types_get_own_line() {
        let analyzer = LayoutAnalyzer::new();
        let lines = analyzer.merge_spans_to_line(vec![
            text(0.0, 0.0, 40.0, 10.0, "before"),
            typed(50.0, 0.0, 90.0, 10.0, ContentType::InterlineEquation),
            typed(0.0, 0.5, 40.0, 10.0, ContentType::Image),
            typed(50.0, 1.0, 90.0, 10.0, ContentType::Table),
            text(100.0, 1.5, 140.0, 10.0, "after"),
        ]);

        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(line.len(), 1);
        }
    }

    #[test]
    fn test_inline_equation_shares_line() {
        let analyzer = LayoutAnalyzer::new();
        let lines = analyzer.merge_spans_to_line(vec![
            text(0.0, 0.0, 40.0, 10.0, "x"),
            typed(45.0, 0.0, 60.0, 10.0, ContentType::InlineEquation),
        ]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 2);
    }

    #[test]
    fn test_atomic_set_is_configurable() {
        let analyzer =
            LayoutAnalyzer::with_config(LayoutConfig::new().with_atomic_types([ContentType::Image]));
        let lines = analyzer.merge_spans_to_line(vec![
            text(0.0, 0.0, 40.0, 10.0, "cell"),
            typed(50.0, 0.0, 90.0, 10.0, ContentType::Table),
        ]);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_merge_compares_with_last_span_only() {
        // The tall span joins the first line; the third span overlaps the
        // tall one but not the first, and still joins because only the
        // last span of the line is compared.
        let analyzer = LayoutAnalyzer::new();
        let lines = analyzer.merge_spans_to_line(vec![
            text(0.0, 0.0, 10.0, 10.0, "a"),
            text(20.0, 1.0, 30.0, 40.0, "tall"),
            text(40.0, 25.0, 50.0, 35.0, "low"),
        ]);
        assert_eq!(lines.len(), 1);
        assert_eq!(contents(&lines[0]), vec!["a", "tall", "low"]);
    }

    #[test]
    fn test_merge_conserves_spans() {
        let analyzer = LayoutAnalyzer::new();
        let spans: Vec<Span> = (0..20)
            .map(|i| {
                let row = (i / 4) as f32;
                let col = (i % 4) as f32;
                text(
                    col * 30.0,
                    row * 15.0,
                    col * 30.0 + 25.0,
                    row * 15.0 + 10.0,
                    &i.to_string(),
                )
            })
            .collect();

        let lines = analyzer.merge_spans_to_line(spans.clone());
        assert_eq!(lines.len(), 5);

        let mut seen: Vec<String> = lines
            .into_iter()
            .flatten()
            .filter_map(|s| s.content)
            .collect();
        seen.sort();
        let mut expected: Vec<String> = spans.into_iter().filter_map(|s| s.content).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_line_sort_left_to_right() {
        let lines = line_sort_spans_by_left_to_right(vec![vec![
            text(60.0, 1.0, 90.0, 12.0, "b"),
            text(0.0, 0.0, 50.0, 10.0, "a"),
        ]]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].bbox, BBox::new(0.0, 0.0, 90.0, 12.0));
        assert_eq!(contents(&lines[0].spans), vec!["a", "b"]);
    }

    #[test]
    fn test_line_sort_is_idempotent() {
        let once = line_sort_spans_by_left_to_right(vec![vec![
            text(60.0, 1.0, 90.0, 12.0, "b"),
            text(30.0, 0.0, 50.0, 10.0, "a2"),
            text(30.0, 0.0, 45.0, 10.0, "a1"),
        ]]);
        let twice = line_sort_spans_by_left_to_right(
            once.iter().map(|l| l.spans.clone()).collect(),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_lines_to_block_wraps_one_to_one() {
        let lines = line_sort_spans_by_left_to_right(vec![
            vec![text(0.0, 0.0, 50.0, 10.0, "a")],
            vec![text(0.0, 20.0, 70.0, 30.0, "b")],
        ]);
        let blocks = merge_lines_to_block(lines.clone());

        assert_eq!(blocks.len(), 2);
        for (block, line) in blocks.iter().zip(&lines) {
            assert_eq!(block.bbox, line.bbox);
            assert_eq!(block.lines, vec![line.clone()]);
        }
    }
}
