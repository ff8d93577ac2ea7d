//! Directional tooltips, one at a time.
//!
//! `anchortip` shows a small popup with an arrow next to a target view. The
//! popup opens to the left, to the right, or below the target depending on
//! horizontal room (see [`PlacementEngine`]). A [`TooltipGate`] keeps at most
//! one tooltip on screen and replays parked requests as tooltips dismiss.
//!
//! The display toolkit is reached only through the host traits in
//! [`anchortip_core::host`], bundled as a [`Platform`].
//!
//! ```ignore
//! let gate = TooltipGate::new(platform);
//! gate.show_tooltip(&button, &hint, 180, None);
//! gate.show_tooltip(&other_button, &other_hint, 180, None); // parked
//! gate.dismiss_active_tooltip(); // second hint follows on the UI thread
//! ```

mod config;
mod error;
mod gate;
mod request;
mod window;

pub use anchortip_core::{
    Color, Direction, LayoutDirection, Observer, Platform, Point, ScreenRect, View,
};
pub use anchortip_layout::{Placement, PlacementEngine};
pub use config::TooltipConfig;
pub use error::{ConfigError, TooltipError};
pub use gate::TooltipGate;
pub use request::{LiveRequest, PendingRequest, RequestQueue};
pub use window::TooltipWindow;
