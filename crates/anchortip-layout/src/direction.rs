//! Choosing which side of the target a popup opens on.

use anchortip_core::{Direction, ScreenRect};

/// Horizontal room on either side of a target.
///
/// Widened to `i64` so off-screen targets never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideSpace {
    /// Pixels between the screen's left edge and the target
    pub left: i64,
    /// Pixels between the target and the screen's right edge
    pub right: i64,
}

impl SideSpace {
    /// Measure the space around `target` on a screen `screen_width` wide.
    #[must_use]
    pub fn around(target: ScreenRect, screen_width: i32) -> Self {
        Self {
            left: i64::from(target.left),
            right: i64::from(screen_width) - i64::from(target.right),
        }
    }

    /// Absolute difference between the two sides.
    #[must_use]
    pub const fn imbalance(&self) -> i64 {
        (self.right - self.left).abs()
    }
}

/// Pick a side for a popup `total_width` wide (content plus arrow).
///
/// When neither side beats the other by at least `total_width`, the popup
/// hangs below the target. Otherwise it opens toward the roomier side.
/// Vertical space is not considered.
#[must_use]
pub const fn choose_direction(space: SideSpace, total_width: i64) -> Direction {
    if space.imbalance() < total_width {
        Direction::Bottom
    } else if space.right > space.left {
        Direction::Right
    } else {
        Direction::Left
    }
}
