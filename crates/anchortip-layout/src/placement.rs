//! Placement engine: side selection, composition and popup origin.

use anchortip_core::{Color, Composition, Direction, LayoutDirection, Point, ScreenRect};
use serde::{Deserialize, Serialize};

use crate::compose::compose;
use crate::direction::{choose_direction, SideSpace};

/// Default arrow box edge in pixels.
pub const DEFAULT_ARROW_SIZE: i32 = 33;

/// Default distance from the container's leading edge to the arrow.
pub const DEFAULT_MARGIN_FROM_START: i32 = 40;

/// Result of a placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Side of the target the popup opens on
    pub direction: Direction,
    /// Absolute screen position of the popup's top-left corner
    pub origin: Point,
    /// Arrow/content arrangement
    pub composition: Composition,
}

impl Placement {
    /// Tint the arrow glyph.
    #[must_use]
    pub const fn tinted(mut self, tint: Option<Color>) -> Self {
        self.composition.arrow.tint = tint;
        self
    }

    /// Width of the whole popup container.
    #[must_use]
    pub const fn total_width(&self) -> i32 {
        self.composition.total_width
    }
}

/// Computes where a tooltip goes relative to its target.
///
/// The engine holds only the fixed arrow metrics; every call is a pure
/// function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementEngine {
    arrow_size: i32,
    margin_from_start: i32,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ARROW_SIZE, DEFAULT_MARGIN_FROM_START)
    }
}

impl PlacementEngine {
    /// Create an engine with explicit arrow metrics.
    #[must_use]
    pub const fn new(arrow_size: i32, margin_from_start: i32) -> Self {
        Self {
            arrow_size,
            margin_from_start,
        }
    }

    /// Arrow box edge in pixels.
    #[must_use]
    pub const fn arrow_size(&self) -> i32 {
        self.arrow_size
    }

    /// Arrow offset from the container's leading edge.
    #[must_use]
    pub const fn margin_from_start(&self) -> i32 {
        self.margin_from_start
    }

    /// Place a popup whose content is `content_width` pixels wide next to
    /// `target` on a screen `screen_width` pixels wide.
    ///
    /// Returns `None` when the popup's width or origin does not fit in
    /// `i32` screen coordinates.
    #[must_use]
    pub fn compute(
        &self,
        target: ScreenRect,
        content_width: i32,
        screen_width: i32,
        layout_direction: LayoutDirection,
    ) -> Option<Placement> {
        let total_width = content_width.checked_add(self.arrow_size)?;
        let direction = choose_direction(
            SideSpace::around(target, screen_width),
            i64::from(total_width),
        );
        let composition = compose(
            direction,
            layout_direction,
            content_width,
            self.arrow_size,
            self.margin_from_start,
            None,
        )?;

        Some(Placement {
            direction,
            origin: self.origin(direction, layout_direction, target, total_width)?,
            composition,
        })
    }

    /// Top-left corner of the popup so the arrow tip meets the target.
    ///
    /// The two bottom formulas are not mirror images of each other; they are
    /// kept as-is. Returns `None` if the corner falls outside `i32`.
    #[must_use]
    pub fn origin(
        &self,
        direction: Direction,
        layout_direction: LayoutDirection,
        target: ScreenRect,
        total_width: i32,
    ) -> Option<Point> {
        let half_arrow = i64::from(self.arrow_size / 2);
        let margin = i64::from(self.margin_from_start);
        let total_width = i64::from(total_width);
        let center_x = i64::from(target.center_x());
        let bottom = i64::from(target.bottom);
        let side_y = i64::from(target.center_y()) - margin - half_arrow;

        let (x, y) = match (direction, layout_direction) {
            (Direction::Bottom, LayoutDirection::Ltr) => (center_x - margin - half_arrow, bottom),
            (Direction::Bottom, LayoutDirection::Rtl) => {
                (center_x - total_width + margin + half_arrow, bottom)
            }
            (Direction::Left, _) => (i64::from(target.left) - total_width, side_y),
            (Direction::Right, _) => (i64::from(target.right), side_y),
        };

        Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchortip_core::{Insets, Orientation, Slot};

    const TARGET: ScreenRect = ScreenRect::new(300, 100, 340, 130);

    #[test]
    fn test_worked_example_left() {
        let p = PlacementEngine::default().compute(TARGET, 120, 400, LayoutDirection::Ltr).unwrap();
        assert_eq!(p.direction, Direction::Left);
        assert_eq!(p.origin.x, 147);
        assert_eq!(p.origin.y, 59);
        assert_eq!(p.total_width(), 153);
    }

    #[test]
    fn test_worked_example_narrow_screen() {
        let p = PlacementEngine::default().compute(TARGET, 120, 360, LayoutDirection::Ltr).unwrap();
        assert_eq!(p.direction, Direction::Left);
        assert_eq!(p.origin, Point::new(147, 59));
    }

    #[test]
    fn test_right_placement() {
        let target = ScreenRect::new(20, 200, 60, 240);
        let p = PlacementEngine::default().compute(target, 120, 1080, LayoutDirection::Ltr).unwrap();
        assert_eq!(p.direction, Direction::Right);
        assert_eq!(p.origin, Point::new(60, 220 - 40 - 16));
        assert_eq!(p.composition.order, [Slot::Arrow, Slot::Content]);
        assert_eq!(p.composition.arrow.rotation, 270);
    }

    #[test]
    fn test_bottom_ltr() {
        let target = ScreenRect::new(500, 50, 580, 90);
        let p = PlacementEngine::default().compute(target, 200, 1080, LayoutDirection::Ltr).unwrap();
        assert_eq!(p.direction, Direction::Bottom);
        assert_eq!(p.origin, Point::new(540 - 40 - 16, 90));
        assert_eq!(p.composition.orientation, Orientation::Vertical);
        assert_eq!(p.composition.arrow.margins, Insets::left(40));
    }

    #[test]
    fn test_bottom_rtl() {
        let target = ScreenRect::new(500, 50, 580, 90);
        let p = PlacementEngine::default().compute(target, 200, 1080, LayoutDirection::Rtl).unwrap();
        assert_eq!(p.direction, Direction::Bottom);
        assert_eq!(p.origin, Point::new(540 - 233 + 40 + 16, 90));
        assert_eq!(p.composition.arrow.margins, Insets::right(40));
    }

    #[test]
    fn test_custom_metrics() {
        let engine = PlacementEngine::new(20, 10);
        assert_eq!(engine.arrow_size(), 20);
        assert_eq!(engine.margin_from_start(), 10);

        let p = engine.compute(TARGET, 100, 400, LayoutDirection::Ltr).unwrap();
        assert_eq!(p.direction, Direction::Left);
        assert_eq!(p.origin, Point::new(300 - 120, 115 - 10 - 10));
    }

    #[test]
    fn test_tinted() {
        let tint = Color::rgb(255, 0, 0);
        let p = PlacementEngine::default()
            .compute(TARGET, 120, 400, LayoutDirection::Ltr)
            .unwrap()
            .tinted(Some(tint));
        assert_eq!(p.composition.arrow.tint, Some(tint));
    }

    #[test]
    fn test_overflowing_width_is_rejected() {
        let engine = PlacementEngine::default();
        assert!(engine
            .compute(TARGET, i32::MAX, 400, LayoutDirection::Ltr)
            .is_none());
    }

    #[test]
    fn test_origin_off_the_coordinate_range_is_rejected() {
        let engine = PlacementEngine::default();
        let far_left = ScreenRect::new(i32::MIN + 10, 100, i32::MIN + 50, 130);
        // Opens to the right, ending up inside the range.
        assert!(engine
            .compute(far_left, 120, 400, LayoutDirection::Ltr)
            .is_some());

        // Forcing the left side would start past `i32::MIN`.
        let p = engine.origin(Direction::Left, LayoutDirection::Ltr, far_left, 153);
        assert!(p.is_none());

        let top_edge = ScreenRect::new(300, i32::MIN, 340, i32::MIN + 30);
        assert!(engine
            .compute(top_edge, 120, 400, LayoutDirection::Ltr)
            .is_none());
    }
}
