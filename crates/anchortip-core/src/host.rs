//! Services the tooltip core borrows from the hosting display toolkit.
//!
//! The core never creates windows, measures text or touches threads itself;
//! it asks these collaborators. In-memory implementations for tests live in
//! the `anchortip-test` crate.

use crate::geometry::Point;
use crate::popup::{LayoutDirection, PopupSpec};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Callback invoked once when a popup is dismissed.
pub type DismissHook = Box<dyn FnOnce() + Send>;

/// Unit of work posted to the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send>;

/// Error reported by a host collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The overlay could not be created.
    #[error("popup creation failed: {0}")]
    CreateFailed(String),

    /// The overlay could not be shown.
    #[error("popup show failed: {0}")]
    ShowFailed(String),

    /// The host window the popup belongs to is gone.
    #[error("host window unavailable")]
    WindowUnavailable,
}

/// A borderless overlay window positioned in absolute screen coordinates.
pub trait Popup: Send + Sync {
    /// Show the popup with its top-left corner at `origin`.
    fn show_at(&self, origin: Point) -> Result<(), HostError>;

    /// Tear the popup down. Fires the dismissal hook if one is set.
    fn dismiss(&self);

    /// Whether the popup is currently on screen.
    fn is_showing(&self) -> bool;

    /// Replace the dismissal hook. The hook runs at most once.
    fn set_on_dismiss(&self, hook: Option<DismissHook>);
}

/// Factory for popup overlays.
pub trait OverlayHost: Send + Sync {
    /// Create (but do not show) a popup described by `spec`.
    fn create_popup(&self, spec: PopupSpec) -> Result<Arc<dyn Popup>, HostError>;
}

/// Screen metrics and unit conversion.
pub trait DisplayMetrics: Send + Sync {
    /// Screen width in device pixels.
    fn screen_width(&self) -> i32;

    /// Convert density-independent pixels to device pixels.
    fn dp_to_px(&self, dp: i32) -> i32;
}

/// Writing direction of the current locale.
pub trait LocaleProvider: Send + Sync {
    /// Current layout direction.
    fn layout_direction(&self) -> LayoutDirection;
}

/// Schedules work on the thread that owns the display tree.
pub trait UiDispatcher: Send + Sync {
    /// Run `task` later on the UI thread. Never runs it inline.
    fn post(&self, task: UiTask);
}

/// The set of host services a tooltip gate needs.
#[derive(Clone)]
pub struct Platform {
    /// Popup factory
    pub overlays: Arc<dyn OverlayHost>,
    /// Screen metrics and unit conversion
    pub metrics: Arc<dyn DisplayMetrics>,
    /// Locale writing direction
    pub locale: Arc<dyn LocaleProvider>,
    /// UI-thread dispatch
    pub dispatcher: Arc<dyn UiDispatcher>,
}

impl Platform {
    /// Bundle host services.
    #[must_use]
    pub fn new(
        overlays: Arc<dyn OverlayHost>,
        metrics: Arc<dyn DisplayMetrics>,
        locale: Arc<dyn LocaleProvider>,
        dispatcher: Arc<dyn UiDispatcher>,
    ) -> Self {
        Self {
            overlays,
            metrics,
            locale,
            dispatcher,
        }
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform")
            .field("screen_width", &self.metrics.screen_width())
            .field("layout_direction", &self.locale.layout_direction())
            .finish_non_exhaustive()
    }
}
