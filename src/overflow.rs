//! Compute where a row of items stops fitting its container.
use std::ops::Range;

/// The margin reserved for the menu button when no other value is given.
pub const DEFAULT_PADDING_SIZE: f32 = 32.0;

/// Returns the index of the first item that does not fit in `available`
/// width, or `None` if every item fits.
///
/// Items are walked left to right. Each item adds its width, plus `spacing`
/// when it is not the first one. The first item whose running total plus
/// `padding_size` exceeds `available` is the overflow index.
///
/// The menu button is never part of the running total; `padding_size` is
/// the room kept for it.
///
/// An unbounded `available` width never overflows. Non-finite item widths
/// are counted as zero.
pub fn overflowing_index(
    widths: &[f32],
    available: f32,
    spacing: f32,
    padding_size: f32,
) -> Option<usize> {
    if !available.is_finite() {
        return None;
    }

    let mut total = 0.0;

    for (index, width) in widths.iter().copied().enumerate() {
        let width = if width.is_finite() {
            width
        } else {
            log::warn!(
                "responsive list item {index} has a non-finite width ({width}); \
                 items should not fill horizontally"
            );
            0.0
        };

        if index > 0 {
            total += spacing;
        }

        total += width;

        if total + padding_size > available {
            return Some(index);
        }
    }

    None
}

/// How the items of a list are split between the row and the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// The items laid out in the row.
    pub visible: Range<usize>,
    /// The items collapsed into the menu.
    pub menu: Range<usize>,
}

impl Partition {
    /// Splits `len` items at the given overflow `index`.
    ///
    /// `None`, or an index past the last item, keeps every item visible.
    pub fn new(len: usize, index: Option<usize>) -> Self {
        let cut = match index {
            Some(index) if index < len => index,
            _ => len,
        };

        Self {
            visible: 0..cut,
            menu: cut..len,
        }
    }

    /// Returns whether any item is collapsed into the menu.
    pub fn has_menu(&self) -> bool {
        !self.menu.is_empty()
    }

    /// The number of items laid out in the row.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }
}

impl Default for Partition {
    fn default() -> Self {
        Self::new(0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(overflowing_index(&[40.0, 40.0, 40.0], 200.0, 0.0, 32.0), None);
        assert_eq!(overflowing_index(&[40.0, 40.0], 112.0, 0.0, 32.0), None); // exact fit
    }

    #[test]
    fn test_first_crossing_item() {
        // 50 + 50 + 32 = 132 > 120
        assert_eq!(
            overflowing_index(&[50.0, 50.0, 50.0], 120.0, 0.0, 32.0),
            Some(1)
        );
        assert_eq!(overflowing_index(&[100.0, 10.0], 90.0, 0.0, 0.0), Some(0));
    }

    #[test]
    fn test_spacing_counts_between_items() {
        // Without spacing: 30 + 30 + 30 = 90 fits in 100
        assert_eq!(overflowing_index(&[30.0; 3], 100.0, 0.0, 0.0), None);
        // With 10 spacing: 30 + 10 + 30 + 10 + 30 = 110
        assert_eq!(overflowing_index(&[30.0; 3], 100.0, 10.0, 0.0), Some(2));
    }

    #[test]
    fn test_padding_size_reserves_room() {
        assert_eq!(overflowing_index(&[50.0, 50.0], 100.0, 0.0, 0.0), None);
        assert_eq!(overflowing_index(&[50.0, 50.0], 100.0, 0.0, 1.0), Some(1));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(overflowing_index(&[], 0.0, 0.0, 32.0), None);
        assert_eq!(overflowing_index(&[500.0], f32::INFINITY, 0.0, 32.0), None);
        assert_eq!(
            overflowing_index(&[f32::INFINITY, 10.0], 50.0, 0.0, 0.0),
            None
        );
    }

    #[test]
    fn test_partition() {
        let all = Partition::new(4, None);
        assert_eq!(all.visible, 0..4);
        assert!(!all.has_menu());

        let split = Partition::new(4, Some(1));
        assert_eq!(split.visible, 0..1);
        assert_eq!(split.menu, 1..4);
        assert_eq!(split.visible_len(), 1);
        assert!(split.has_menu());

        let only_menu = Partition::new(3, Some(0));
        assert!(only_menu.visible.is_empty());
        assert_eq!(only_menu.menu, 0..3);

        // Stale indices from a longer list keep everything visible
        assert_eq!(Partition::new(2, Some(5)), Partition::new(2, None));
    }
}
