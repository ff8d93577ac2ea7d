//! Descriptors for a composed tooltip popup: which side it opens on, how the
//! arrow and content are stacked, and what the overlay primitive must create.

use crate::color::Color;
use crate::geometry::Insets;
use crate::view::View;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Side of the target the popup is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Popup sits to the left of the target
    Left,
    /// Popup sits to the right of the target
    Right,
    /// Popup hangs below the target
    Bottom,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Bottom];

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing direction of the current locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

impl LayoutDirection {
    /// True for right-to-left locales.
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Stacking axis of the popup container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Arrow and content side by side
    Horizontal,
    /// Arrow above content
    Vertical,
}

/// A child of the popup container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// The arrow glyph
    Arrow,
    /// The caller-supplied content view
    Content,
}

/// Layout parameters of the arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowLayout {
    /// Edge length of the square arrow box
    pub size: i32,
    /// Margins around the arrow box
    pub margins: Insets,
    /// Clockwise rotation of the glyph in degrees (0, 90 or 270)
    pub rotation: u16,
    /// Optional tint applied to the glyph
    pub tint: Option<Color>,
}

/// Arrangement of the arrow and content inside the popup container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// Container stacking axis
    pub orientation: Orientation,
    /// Children in layout order
    pub order: [Slot; 2],
    /// Arrow layout parameters
    pub arrow: ArrowLayout,
    /// Width of the content slot
    pub content_width: i32,
    /// Width of the whole container (content plus arrow)
    pub total_width: i32,
}

impl Composition {
    /// Index of `slot` within the container's children.
    #[must_use]
    pub fn index_of(&self, slot: Slot) -> usize {
        usize::from(self.order[0] != slot)
    }
}

/// Height policy of the popup window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeightPolicy {
    /// Size to the composed children
    WrapContent,
}

/// Everything the overlay primitive needs to build a popup window.
#[derive(Clone)]
pub struct PopupSpec {
    /// Popup window width in pixels
    pub width: i32,
    /// Popup window height policy
    pub height: HeightPolicy,
    /// Arrow/content arrangement
    pub composition: Composition,
    /// The content view placed in the content slot
    pub content: Arc<dyn View>,
    /// Touches outside the popup dismiss it
    pub outside_touchable: bool,
    /// The popup receives touches
    pub touchable: bool,
    /// The popup may take input focus
    pub focusable: bool,
    /// Background drawn behind the children; `None` leaves it transparent
    pub background: Option<Color>,
}

impl PopupSpec {
    /// Popup parameters for a tooltip: borderless, transparent, outside-touch dismissible
    /// and never focusable.
    #[must_use]
    pub fn tooltip(composition: Composition, content: Arc<dyn View>) -> Self {
        Self {
            width: composition.total_width,
            height: HeightPolicy::WrapContent,
            composition,
            content,
            outside_touchable: true,
            touchable: true,
            focusable: false,
            background: None,
        }
    }
}

impl fmt::Debug for PopupSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupSpec")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("composition", &self.composition)
            .field("outside_touchable", &self.outside_touchable)
            .field("touchable", &self.touchable)
            .field("focusable", &self.focusable)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}
