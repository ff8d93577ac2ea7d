//! Core types and host traits for anchortip.
//!
//! This crate provides the foundation shared by the placement engine and the
//! tooltip gate:
//! - Integer screen geometry: [`Point`], [`Size`], [`ScreenRect`], [`Insets`]
//! - Arrow tint colors: [`Color`]
//! - Display-tree views and non-owning [`Observer`] handles
//! - Popup descriptors: [`Direction`], [`Composition`], [`PopupSpec`]
//! - Host collaborators bundled as a [`Platform`]

mod color;
mod geometry;
pub mod host;
mod popup;
mod view;

pub use color::{Color, ColorParseError};
pub use geometry::{Insets, Point, ScreenRect, Size};
pub use host::{
    DismissHook, DisplayMetrics, HostError, LocaleProvider, OverlayHost, Platform, Popup,
    UiDispatcher, UiTask,
};
pub use popup::{
    ArrowLayout, Composition, Direction, HeightPolicy, LayoutDirection, Orientation, PopupSpec,
    Slot,
};
pub use view::{Observer, View};
