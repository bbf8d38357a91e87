//! Region-scoped line building.

use crate::model::{area_overlap_ratio, DropTag, LayoutRegion, Line, Span};

use super::{line_sort_spans_by_left_to_right, LayoutAnalyzer};

impl LayoutAnalyzer {
    /// Build lines region by region.
    ///
    /// Regions are visited in the given order. Each one claims every span
    /// still in the pool whose area lies inside it by more than
    /// `span_region_ratio`; claimed spans leave the pool and are grouped into
    /// lines with [`LayoutAnalyzer::merge_spans_to_line`]. Spans no region
    /// claims come back tagged [`DropTag::NotInLayout`].
    ///
    /// Returns the lines (sorted left to right, in region order) and the
    /// dropped spans.
    pub fn merge_spans_to_line_by_layout(
        &self,
        spans: Vec<Span>,
        regions: &[LayoutRegion],
    ) -> (Vec<Line>, Vec<Span>) {
        let ratio = self.config.span_region_ratio;
        let mut pool = spans;
        let mut region_spans: Vec<Vec<Span>> = Vec::new();

        for region in regions {
            let (inside, rest): (Vec<Span>, Vec<Span>) = pool
                .into_iter()
                .partition(|span| area_overlap_ratio(&span.bbox, &region.bbox) > ratio);
            pool = rest;

            log::debug!(
                "LayoutAnalyzer: region {} claimed {} spans, {} left in pool",
                region.order,
                inside.len(),
                pool.len()
            );

            if !inside.is_empty() {
                region_spans.push(inside);
            }
        }

        let raw_lines: Vec<Vec<Span>> = region_spans
            .into_iter()
            .flat_map(|spans| self.merge_spans_to_line(spans))
            .collect();
        let lines = line_sort_spans_by_left_to_right(raw_lines);

        let dropped: Vec<Span> = pool
            .into_iter()
            .map(|span| span.dropped(DropTag::NotInLayout))
            .collect();

        log::debug!(
            "LayoutAnalyzer: built {} lines, dropped {} spans outside layout",
            lines.len(),
            dropped.len()
        );

        (lines, dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConfig;
    use crate::model::{BBox, ContentType};

    fn text(x0: f32, y0: f32, x1: f32, y1: f32, content: &str) -> Span {
        Span::text(BBox::new(x0, y0, x1, y1), content)
    }

    fn line_texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.text()).collect()
    }

    #[test]
    fn test_partition_follows_region_order() {
        // Right column listed first: its lines come first.
        let regions = LayoutRegion::sequence([
            BBox::new(300.0, 0.0, 600.0, 800.0),
            BBox::new(0.0, 0.0, 300.0, 800.0),
        ]);
        let spans = vec![
            text(10.0, 10.0, 100.0, 20.0, "left-1"),
            text(310.0, 10.0, 400.0, 20.0, "right-1"),
            text(10.0, 30.0, 100.0, 40.0, "left-2"),
            text(310.0, 30.0, 400.0, 40.0, "right-2"),
        ];

        let (lines, dropped) = LayoutAnalyzer::new().merge_spans_to_line_by_layout(spans, &regions);
        assert!(dropped.is_empty());
        assert_eq!(
            line_texts(&lines),
            vec!["right-1", "right-2", "left-1", "left-2"]
        );
    }

    #[test]
    fn test_partition_same_band_split_by_region() {
        let regions = LayoutRegion::sequence([
            BBox::new(0.0, 0.0, 300.0, 800.0),
            BBox::new(300.0, 0.0, 600.0, 800.0),
        ]);
        let spans = vec![
            text(310.0, 10.0, 400.0, 20.0, "right"),
            text(10.0, 10.0, 100.0, 20.0, "left"),
        ];
        let (lines, _) = LayoutAnalyzer::new().merge_spans_to_line_by_layout(spans, &regions);
        assert_eq!(line_texts(&lines), vec!["left", "right"]);
    }

    #[test]
    fn test_partition_drops_spans_outside_layout() {
        let regions = LayoutRegion::sequence([BBox::new(0.0, 0.0, 100.0, 100.0)]);
        let spans = vec![
            text(10.0, 10.0, 50.0, 20.0, "in"),
            text(10.0, 200.0, 50.0, 210.0, "out"),
        ];

        let (lines, dropped) = LayoutAnalyzer::new().merge_spans_to_line_by_layout(spans, &regions);
        assert_eq!(line_texts(&lines), vec!["in"]);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].content.as_deref(), Some("out"));
        assert_eq!(dropped[0].tag, Some(DropTag::NotInLayout));
        assert!(lines.iter().flat_map(|l| &l.spans).all(|s| s.tag.is_none()));
    }

    #[test]
    fn test_partition_threshold_is_strict() {
        // Span is 100 wide; the region covers exactly 60% of it.
        let span = || text(0.0, 0.0, 100.0, 10.0, "edge");
        let at_threshold = LayoutRegion::sequence([BBox::new(40.0, -10.0, 200.0, 20.0)]);
        let above_threshold = LayoutRegion::sequence([BBox::new(39.999, -10.0, 200.0, 20.0)]);
        let analyzer = LayoutAnalyzer::new();

        let (lines, dropped) = analyzer.merge_spans_to_line_by_layout(vec![span()], &at_threshold);
        assert!(lines.is_empty());
        assert_eq!(dropped.len(), 1);

        let (lines, dropped) =
            analyzer.merge_spans_to_line_by_layout(vec![span()], &above_threshold);
        assert_eq!(lines.len(), 1);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_partition_first_region_wins() {
        let regions = LayoutRegion::sequence([
            BBox::new(0.0, 0.0, 100.0, 100.0),
            BBox::new(0.0, 0.0, 200.0, 200.0),
        ]);
        let spans = vec![
            text(10.0, 10.0, 50.0, 20.0, "shared"),
            text(110.0, 150.0, 150.0, 160.0, "second"),
        ];
        let (lines, dropped) = LayoutAnalyzer::new().merge_spans_to_line_by_layout(spans, &regions);
        assert!(dropped.is_empty());
        assert_eq!(line_texts(&lines), vec!["shared", "second"]);
    }

    #[test]
    fn test_partition_totality() {
        let regions = LayoutRegion::sequence([
            BBox::new(0.0, 0.0, 100.0, 100.0),
            BBox::new(0.0, 100.0, 100.0, 200.0),
        ]);
        let spans: Vec<Span> = (0..30)
            .map(|i| {
                let y = i as f32 * 9.0;
                text(5.0, y, 60.0, y + 8.0, &format!("s{}", i))
            })
            .chain(std::iter::once(Span::new(
                BBox::new(5.0, 20.0, 95.0, 60.0),
                ContentType::Image,
            )))
            .collect();
        let total = spans.len();

        let (lines, dropped) = LayoutAnalyzer::new().merge_spans_to_line_by_layout(spans, &regions);
        let in_lines = lines.iter().map(|l| l.len()).sum::<usize>();
        assert_eq!(in_lines + dropped.len(), total);
        assert!(dropped.iter().all(|s| s.tag == Some(DropTag::NotInLayout)));
    }

    #[test]
    fn test_partition_no_regions_drops_everything() {
        let spans = vec![text(0.0, 0.0, 10.0, 10.0, "a")];
        let (lines, dropped) = LayoutAnalyzer::new().merge_spans_to_line_by_layout(spans, &[]);
        assert!(lines.is_empty());
        assert_eq!(dropped.len(), 1);
    }

    #[test]
    fn test_partition_custom_ratio() {
        let regions = LayoutRegion::sequence([BBox::new(50.0, 0.0, 200.0, 20.0)]);
        let analyzer =
            LayoutAnalyzer::with_config(LayoutConfig::new().with_span_region_ratio(0.4));
        let (lines, _) = analyzer
            .merge_spans_to_line_by_layout(vec![text(0.0, 0.0, 100.0, 10.0, "half")], &regions);
        assert_eq!(lines.len(), 1);
    }
}
