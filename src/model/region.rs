//! Layout regions.

use serde::{Deserialize, Serialize};

use super::BBox;
use crate::error::{Error, Result};

/// Coarse type of a layout region.
///
/// Carried through for callers only: ordering never looks at it. Footnotes
/// are left out of the reading order by their block type, so spans in a
/// `Footnote` region are still partitioned into lines like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// A main content zone
    #[default]
    Text,
    /// A footnote zone
    Footnote,
    /// Any other zone label
    #[serde(other)]
    Other,
}

/// One structural zone of a page, in reading-order position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRegion {
    /// Reading-order index of this region on its page
    pub order: usize,
    /// Region rectangle
    #[serde(alias = "layout_bbox")]
    pub bbox: BBox,
    /// Region type
    #[serde(default, rename = "type")]
    pub kind: RegionKind,
}

impl LayoutRegion {
    /// Create a content region.
    pub fn new(order: usize, bbox: BBox) -> Self {
        Self {
            order,
            bbox,
            kind: RegionKind::Text,
        }
    }

    /// Set the region kind.
    pub fn with_kind(mut self, kind: RegionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Build regions from boxes already in reading order.
    pub fn sequence<I>(boxes: I) -> Vec<Self>
    where
        I: IntoIterator<Item = BBox>,
    {
        boxes
            .into_iter()
            .enumerate()
            .map(|(order, bbox)| Self::new(order, bbox))
            .collect()
    }
}

/// Check that regions are listed in reading order.
///
/// The input sequence is the reading order; the `order` field must agree
/// with it by strictly increasing. Regions are never re-sorted.
pub fn validate_region_order(regions: &[LayoutRegion]) -> Result<()> {
    for (position, pair) in regions.windows(2).enumerate() {
        if pair[1].order <= pair[0].order {
            return Err(Error::RegionOrder {
                position: position + 1,
                order: pair[1].order,
                previous: pair[0].order,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_sequence_is_ordered() {
        let regions = LayoutRegion::sequence([
            BBox::new(0.0, 0.0, 100.0, 100.0),
            BBox::new(0.0, 100.0, 100.0, 200.0),
        ]);
        assert_eq!(regions[0].order, 0);
        assert_eq!(regions[1].order, 1);
        assert!(validate_region_order(&regions).is_ok());
        assert!(validate_region_order(&[]).is_ok());
    }

    #[test]
    fn test_region_order_violation() {
        let regions = vec![
            LayoutRegion::new(0, BBox::new(0.0, 0.0, 10.0, 10.0)),
            LayoutRegion::new(2, BBox::new(0.0, 10.0, 10.0, 20.0)),
            LayoutRegion::new(1, BBox::new(0.0, 20.0, 10.0, 30.0)),
        ];
        let err = validate_region_order(&regions).unwrap_err();
        assert!(matches!(
            err,
            Error::RegionOrder {
                position: 2,
                order: 1,
                previous: 2
            }
        ));
    }

    #[test]
    fn test_region_from_json() {
        let region: LayoutRegion = serde_json::from_str(
            r#"{"order": 3, "layout_bbox": [0, 0, 5, 5], "type": "sidebar"}"#,
        )
        .unwrap();
        assert_eq!(region.order, 3);
        assert_eq!(region.kind, RegionKind::Other);

        let region: LayoutRegion =
            serde_json::from_str(r#"{"order": 0, "bbox": [0, 0, 5, 5]}"#).unwrap();
        assert_eq!(region.kind, RegionKind::Text);
    }
}
