//! A single tooltip popup anchored to a target view.

use anchortip_core::{
    Color, Direction, DismissHook, Observer, Platform, Point, Popup, PopupSpec, View,
};
use anchortip_layout::{Placement, PlacementEngine};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::error::TooltipError;

/// One live tooltip: its placement, computed once, and the popup showing it.
///
/// The target is observed, not owned. The content view travels into the
/// popup, which keeps it alive for as long as the popup exists.
pub struct TooltipWindow {
    target: Observer<dyn View>,
    placement: Placement,
    popup: Arc<dyn Popup>,
    shown: AtomicBool,
}

impl TooltipWindow {
    /// Measure the target, place the tooltip and create its popup.
    ///
    /// `content_width` is in device pixels.
    ///
    /// # Errors
    ///
    /// Fails if the content width is not positive, the target is detached or
    /// has an empty rectangle, the geometry leaves the `i32` coordinate
    /// range, or the overlay host refuses to create a popup.
    pub fn build(
        platform: &Platform,
        engine: &PlacementEngine,
        target: &Arc<dyn View>,
        content: Arc<dyn View>,
        content_width: i32,
        anchor_color: Option<Color>,
    ) -> Result<Self, TooltipError> {
        if content_width <= 0 {
            return Err(TooltipError::InvalidContentWidth(content_width));
        }
        if !target.is_attached() {
            return Err(TooltipError::TargetDetached);
        }

        let rect = target.screen_rect().ok_or(TooltipError::OutOfRange)?;
        if rect.is_empty() {
            return Err(TooltipError::EmptyTarget {
                width: rect.width(),
                height: rect.height(),
            });
        }

        let placement = engine
            .compute(
                rect,
                content_width,
                platform.metrics.screen_width(),
                platform.locale.layout_direction(),
            )
            .ok_or(TooltipError::OutOfRange)?
            .tinted(anchor_color);

        debug!(
            direction = %placement.direction,
            x = placement.origin.x,
            y = placement.origin.y,
            width = placement.total_width(),
            "tooltip placed"
        );

        let popup = platform
            .overlays
            .create_popup(PopupSpec::tooltip(placement.composition, content))?;

        Ok(Self {
            target: Observer::new(target),
            placement,
            popup,
            shown: AtomicBool::new(false),
        })
    }

    /// Show the popup at its computed screen position.
    ///
    /// # Errors
    ///
    /// Returns [`TooltipError::AlreadyShown`] on a second call, or the host's
    /// error if the popup cannot be shown.
    pub fn show(&self) -> Result<Arc<dyn Popup>, TooltipError> {
        if self.shown.swap(true, Ordering::SeqCst) {
            return Err(TooltipError::AlreadyShown);
        }
        self.popup.show_at(self.placement.origin)?;
        Ok(Arc::clone(&self.popup))
    }

    /// Tear the popup down, firing the dismissal hook.
    pub fn dismiss(&self) {
        self.popup.dismiss();
    }

    /// Run `hook` once when the popup is dismissed.
    pub fn set_on_dismiss(&self, hook: DismissHook) {
        self.popup.set_on_dismiss(Some(hook));
    }

    /// Remove a previously installed dismissal hook.
    pub fn clear_on_dismiss(&self) {
        self.popup.set_on_dismiss(None);
    }

    /// Side of the target the popup opens on.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.placement.direction
    }

    /// Absolute screen position of the popup's top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.placement.origin
    }

    /// Full placement result.
    #[must_use]
    pub const fn placement(&self) -> &Placement {
        &self.placement
    }

    /// The target, if it is still alive.
    #[must_use]
    pub fn target(&self) -> Option<Arc<dyn View>> {
        self.target.get()
    }

    /// Underlying popup handle.
    #[must_use]
    pub fn popup(&self) -> &Arc<dyn Popup> {
        &self.popup
    }
}

impl fmt::Debug for TooltipWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipWindow")
            .field("target", &self.target)
            .field("placement", &self.placement)
            .field("shown", &self.shown.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchortip_test::{TestPlatform, TestView};

    fn build(
        test: &TestPlatform,
        target: &Arc<TestView>,
        width: i32,
    ) -> Result<TooltipWindow, TooltipError> {
        TooltipWindow::build(
            &test.platform(),
            &PlacementEngine::default(),
            &target.handle(),
            TestView::content(width, 40).handle(),
            width,
            None,
        )
    }

    #[test]
    fn test_build_places_before_showing() {
        let test = TestPlatform::new(360);
        let target = TestView::at(300, 100, 40, 30);
        let window = build(&test, &target, 120).unwrap();

        assert_eq!(window.direction(), Direction::Left);
        assert_eq!(window.origin(), Point::new(147, 59));
        assert_eq!(window.placement().total_width(), 153);
        assert!(!window.popup().is_showing());
        assert_eq!(test.overlays.created_count(), 1);
    }

    #[test]
    fn test_show_once() {
        let test = TestPlatform::new(360);
        let target = TestView::at(300, 100, 40, 30);
        let window = build(&test, &target, 120).unwrap();

        let popup = window.show().unwrap();
        assert!(popup.is_showing());
        assert!(matches!(window.show(), Err(TooltipError::AlreadyShown)));

        window.dismiss();
        assert!(!popup.is_showing());
    }

    #[test]
    fn test_rejects_unusable_targets() {
        let test = TestPlatform::new(360);

        let target = TestView::at(300, 100, 40, 30);
        assert!(matches!(
            build(&test, &target, 0),
            Err(TooltipError::InvalidContentWidth(0))
        ));

        target.detach();
        assert!(matches!(
            build(&test, &target, 120),
            Err(TooltipError::TargetDetached)
        ));

        let flat = TestView::at(300, 100, 40, 0);
        assert!(matches!(
            build(&test, &flat, 120),
            Err(TooltipError::EmptyTarget {
                width: 40,
                height: 0
            })
        ));
        assert_eq!(test.overlays.created_count(), 0);
    }

    #[test]
    fn test_rejects_geometry_past_coordinate_range() {
        let test = TestPlatform::new(360);

        let past_edge = TestView::at(i32::MAX - 10, 100, 40, 30);
        assert!(matches!(
            build(&test, &past_edge, 120),
            Err(TooltipError::OutOfRange)
        ));

        let target = TestView::at(300, 100, 40, 30);
        assert!(matches!(
            build(&test, &target, i32::MAX),
            Err(TooltipError::OutOfRange)
        ));
        assert_eq!(test.overlays.created_count(), 0);
    }

    #[test]
    fn test_cleared_hook_does_not_fire() {
        let test = TestPlatform::new(360);
        let target = TestView::at(300, 100, 40, 30);
        let window = build(&test, &target, 120).unwrap();
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        window.set_on_dismiss(Box::new(move || flag.store(true, Ordering::SeqCst)));
        window.clear_on_dismiss();

        window.show().unwrap();
        window.dismiss();
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_host_error_propagates() {
        let test = TestPlatform::new(360);
        test.overlays.fail_next_create();
        let target = TestView::at(300, 100, 40, 30);
        assert!(matches!(
            build(&test, &target, 120),
            Err(TooltipError::Host(_))
        ));
    }

    #[test]
    fn test_target_is_observed_not_owned() {
        let test = TestPlatform::new(360);
        let target = TestView::at(300, 100, 40, 30);
        let window = build(&test, &target, 120).unwrap();
        assert!(window.target().is_some());
        drop(target);
        assert!(window.target().is_none());
    }
}
