//! Placement engine for anchortip.
//!
//! Given a target's screen rectangle, the content width and the screen width,
//! [`PlacementEngine::compute`] decides whether the tooltip opens to the
//! left, to the right, or below the target, where its top-left corner goes,
//! and how the arrow glyph is stacked against the content.

mod compose;
mod direction;
mod placement;

pub use compose::{arrow_margins, arrow_rotation, child_order, compose, orientation};
pub use direction::{choose_direction, SideSpace};
pub use placement::{Placement, PlacementEngine, DEFAULT_ARROW_SIZE, DEFAULT_MARGIN_FROM_START};
