//! Fixed metrics and locale, and a bundle of every in-memory host service.

use anchortip_core::{DisplayMetrics, LayoutDirection, LocaleProvider, Platform};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

use crate::dispatch::ManualDispatcher;
use crate::overlay::MemoryOverlayHost;

/// Screen metrics with a settable width and a fixed density.
#[derive(Debug)]
pub struct FixedMetrics {
    screen_width: AtomicI32,
    density: f32,
}

impl FixedMetrics {
    /// Metrics for a screen `screen_width` pixels wide at `density` px/dp.
    pub fn new(screen_width: i32, density: f32) -> Self {
        Self {
            screen_width: AtomicI32::new(screen_width),
            density,
        }
    }

    /// Simulate a rotation or window resize.
    pub fn set_screen_width(&self, width: i32) {
        self.screen_width.store(width, Ordering::SeqCst);
    }
}

impl DisplayMetrics for FixedMetrics {
    fn screen_width(&self) -> i32 {
        self.screen_width.load(Ordering::SeqCst)
    }

    fn dp_to_px(&self, dp: i32) -> i32 {
        (dp as f32 * self.density) as i32
    }
}

/// Locale whose writing direction tests can flip.
#[derive(Debug, Default)]
pub struct FixedLocale {
    rtl: AtomicBool,
}

impl FixedLocale {
    /// A locale with the given direction.
    pub fn new(direction: LayoutDirection) -> Self {
        Self {
            rtl: AtomicBool::new(direction.is_rtl()),
        }
    }

    /// Switch writing direction.
    pub fn set(&self, direction: LayoutDirection) {
        self.rtl.store(direction.is_rtl(), Ordering::SeqCst);
    }
}

impl LocaleProvider for FixedLocale {
    fn layout_direction(&self) -> LayoutDirection {
        if self.rtl.load(Ordering::SeqCst) {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        }
    }
}

/// Every in-memory host service, with typed handles kept for assertions.
pub struct TestPlatform {
    /// Recording overlay host
    pub overlays: Arc<MemoryOverlayHost>,
    /// Screen metrics
    pub metrics: Arc<FixedMetrics>,
    /// Locale
    pub locale: Arc<FixedLocale>,
    /// Manually pumped UI dispatcher
    pub dispatcher: Arc<ManualDispatcher>,
}

impl TestPlatform {
    /// LTR platform with a `screen_width`-pixel screen at density 1.
    pub fn new(screen_width: i32) -> Self {
        Self {
            overlays: Arc::new(MemoryOverlayHost::new()),
            metrics: Arc::new(FixedMetrics::new(screen_width, 1.0)),
            locale: Arc::new(FixedLocale::default()),
            dispatcher: Arc::new(ManualDispatcher::new()),
        }
    }

    /// Replace the metrics with a different density.
    #[must_use]
    pub fn with_density(mut self, density: f32) -> Self {
        let width = self.metrics.screen_width();
        self.metrics = Arc::new(FixedMetrics::new(width, density));
        self
    }

    /// Start in a right-to-left locale.
    #[must_use]
    pub fn rtl(self) -> Self {
        self.locale.set(LayoutDirection::Rtl);
        self
    }

    /// The host services as trait objects.
    pub fn platform(&self) -> Platform {
        Platform::new(
            Arc::clone(&self.overlays) as _,
            Arc::clone(&self.metrics) as _,
            Arc::clone(&self.locale) as _,
            Arc::clone(&self.dispatcher) as _,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px_truncates() {
        let metrics = FixedMetrics::new(1080, 2.75);
        assert_eq!(metrics.dp_to_px(100), 275);
        assert_eq!(metrics.dp_to_px(3), 8);
    }

    #[test]
    fn test_locale_toggle() {
        let locale = FixedLocale::default();
        assert_eq!(locale.layout_direction(), LayoutDirection::Ltr);
        locale.set(LayoutDirection::Rtl);
        assert_eq!(locale.layout_direction(), LayoutDirection::Rtl);
        assert!(FixedLocale::new(LayoutDirection::Rtl)
            .layout_direction()
            .is_rtl());
    }

    #[test]
    fn test_platform_bundle() {
        let test = TestPlatform::new(720).with_density(2.0).rtl();
        let platform = test.platform();
        assert_eq!(platform.metrics.screen_width(), 720);
        assert_eq!(platform.metrics.dp_to_px(60), 120);
        assert!(platform.locale.layout_direction().is_rtl());

        test.metrics.set_screen_width(1280);
        assert_eq!(platform.metrics.screen_width(), 1280);
    }
}
