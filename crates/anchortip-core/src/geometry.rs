//! Integer screen geometry: `Point`, `Size`, `ScreenRect`, `Insets`.
//!
//! All values are device pixels. Popups are positioned in absolute screen
//! coordinates, so nothing here carries a parent-relative offset.

use serde::{Deserialize, Serialize};

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned rectangle in screen pixels, stored as edges.
///
/// `right` and `bottom` are exclusive, matching a view at `(x, y)` with a
/// `width × height` footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge (exclusive)
    pub right: i32,
    /// Bottom edge (exclusive)
    pub bottom: i32,
}

impl ScreenRect {
    /// Create a rectangle from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create from an on-screen location and a size.
    ///
    /// Returns `None` if the far edges fall outside the `i32` range.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Option<Self> {
        let Some(right) = origin.x.checked_add(size.width) else {
            return None;
        };
        let Some(bottom) = origin.y.checked_add(size.height) else {
            return None;
        };
        Some(Self::new(origin.x, origin.y, right, bottom))
    }

    /// Width (`right - left`), saturating.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Height (`bottom - top`), saturating.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Horizontal center, floored.
    #[must_use]
    pub const fn center_x(&self) -> i32 {
        midpoint(self.left, self.right)
    }

    /// Vertical center, floored.
    #[must_use]
    pub const fn center_y(&self) -> i32 {
        midpoint(self.top, self.bottom)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Size of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// True when the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size().is_empty()
    }
}

/// `(a + b) >> 1` without overflow. The mean of two `i32`s is an `i32`.
#[allow(clippy::cast_lossless)]
const fn midpoint(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64) >> 1) as i32
}

/// Per-edge margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Left margin
    pub left: i32,
    /// Top margin
    pub top: i32,
    /// Right margin
    pub right: i32,
    /// Bottom margin
    pub bottom: i32,
}

impl Insets {
    /// Create insets with explicit edges (left, top, right, bottom).
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Only a top margin.
    #[must_use]
    pub const fn top(value: i32) -> Self {
        Self::new(0, value, 0, 0)
    }

    /// Only a left margin.
    #[must_use]
    pub const fn left(value: i32) -> Self {
        Self::new(value, 0, 0, 0)
    }

    /// Only a right margin.
    #[must_use]
    pub const fn right(value: i32) -> Self {
        Self::new(0, 0, value, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_from_origin_size() {
        let r = ScreenRect::from_origin_size(Point::new(300, 100), Size::new(40, 30)).unwrap();
        assert_eq!(r, ScreenRect::new(300, 100, 340, 130));
        assert_eq!(r.width(), 40);
        assert_eq!(r.height(), 30);
    }

    #[test]
    fn test_rect_center() {
        let r = ScreenRect::new(300, 100, 340, 130);
        assert_eq!(r.center_x(), 320);
        assert_eq!(r.center_y(), 115);
    }

    #[test]
    fn test_rect_center_floors_odd_spans() {
        let r = ScreenRect::new(0, 0, 5, 5);
        assert_eq!(r.center_x(), 2);

        // floor, not truncation toward zero
        let neg = ScreenRect::new(-5, -5, 0, 0);
        assert_eq!(neg.center_x(), -3);
    }

    #[test]
    fn test_rect_empty() {
        assert!(ScreenRect::new(10, 10, 10, 40).is_empty());
        assert!(ScreenRect::new(10, 10, 40, 10).is_empty());
        assert!(!ScreenRect::new(10, 10, 11, 11).is_empty());
    }

    #[test]
    fn test_rect_from_origin_size_rejects_overflow() {
        let near_max = Point::new(i32::MAX - 10, 100);
        assert!(ScreenRect::from_origin_size(near_max, Size::new(40, 30)).is_none());
        assert!(ScreenRect::from_origin_size(Point::new(0, i32::MAX), Size::new(1, 1)).is_none());
        assert!(ScreenRect::from_origin_size(near_max, Size::new(10, 30)).is_some());
    }

    #[test]
    fn test_rect_extremes_do_not_overflow() {
        let r = ScreenRect::new(i32::MAX - 1, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(r.center_x(), i32::MAX - 1);
        assert_eq!(r.center_y(), -1);
        assert_eq!(r.height(), i32::MAX);
        assert!(!r.is_empty());

        let inverted = ScreenRect::new(i32::MAX, 0, i32::MIN, 10);
        assert_eq!(inverted.width(), i32::MIN);
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_insets_helpers() {
        assert_eq!(Insets::top(40), Insets::new(0, 40, 0, 0));
        assert_eq!(Insets::left(40), Insets::new(40, 0, 0, 0));
        assert_eq!(Insets::right(40), Insets::new(0, 0, 40, 0));
    }

    proptest! {
        #[test]
        fn prop_rect_roundtrips_origin_and_size(x in -2000i32..2000, y in -2000i32..2000, w in 0i32..2000, h in 0i32..2000) {
            let r = ScreenRect::from_origin_size(Point::new(x, y), Size::new(w, h)).unwrap();
            prop_assert_eq!(r.origin(), Point::new(x, y));
            prop_assert_eq!(r.size(), Size::new(w, h));
        }

        #[test]
        fn prop_center_within_rect(x in -2000i32..2000, y in -2000i32..2000, w in 1i32..2000, h in 1i32..2000) {
            let r = ScreenRect::from_origin_size(Point::new(x, y), Size::new(w, h)).unwrap();
            prop_assert!(r.center_x() >= r.left && r.center_x() < r.right);
            prop_assert!(r.center_y() >= r.top && r.center_y() < r.bottom);
        }
    }
}
