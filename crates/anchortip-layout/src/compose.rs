//! Arrow/content arrangement for each popup direction.

use anchortip_core::{
    ArrowLayout, Color, Composition, Direction, Insets, LayoutDirection, Orientation, Slot,
};

/// Clockwise arrow rotation that makes the glyph point at the target.
///
/// The glyph is drawn pointing up, which is already correct below a target.
#[must_use]
pub const fn arrow_rotation(direction: Direction) -> u16 {
    match direction {
        Direction::Left => 90,
        Direction::Right => 270,
        Direction::Bottom => 0,
    }
}

/// Margins that offset the arrow from the container's leading edge.
#[must_use]
pub const fn arrow_margins(
    direction: Direction,
    layout_direction: LayoutDirection,
    margin_from_start: i32,
) -> Insets {
    match (direction, layout_direction) {
        (Direction::Left | Direction::Right, _) => Insets::top(margin_from_start),
        (Direction::Bottom, LayoutDirection::Ltr) => Insets::left(margin_from_start),
        (Direction::Bottom, LayoutDirection::Rtl) => Insets::right(margin_from_start),
    }
}

/// Child order so the arrow sits on the edge facing the target.
///
/// Horizontal containers are mirrored by the toolkit under RTL, so the
/// logical order flips as well to keep the arrow on the correct side.
#[must_use]
pub const fn child_order(direction: Direction, layout_direction: LayoutDirection) -> [Slot; 2] {
    match (direction, layout_direction) {
        (Direction::Left, LayoutDirection::Ltr) | (Direction::Right, LayoutDirection::Rtl) => {
            [Slot::Content, Slot::Arrow]
        }
        (Direction::Left, LayoutDirection::Rtl)
        | (Direction::Right, LayoutDirection::Ltr)
        | (Direction::Bottom, _) => [Slot::Arrow, Slot::Content],
    }
}

/// Container axis for a direction.
#[must_use]
pub const fn orientation(direction: Direction) -> Orientation {
    match direction {
        Direction::Left | Direction::Right => Orientation::Horizontal,
        Direction::Bottom => Orientation::Vertical,
    }
}

/// Build the full arrangement of arrow and content.
///
/// Returns `None` if content plus arrow overflows `i32`.
#[must_use]
pub const fn compose(
    direction: Direction,
    layout_direction: LayoutDirection,
    content_width: i32,
    arrow_size: i32,
    margin_from_start: i32,
    tint: Option<Color>,
) -> Option<Composition> {
    let Some(total_width) = content_width.checked_add(arrow_size) else {
        return None;
    };
    Some(Composition {
        orientation: orientation(direction),
        order: child_order(direction, layout_direction),
        arrow: ArrowLayout {
            size: arrow_size,
            margins: arrow_margins(direction, layout_direction, margin_from_start),
            rotation: arrow_rotation(direction),
            tint,
        },
        content_width,
        total_width,
    })
}
