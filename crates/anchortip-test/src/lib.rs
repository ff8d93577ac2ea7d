//! In-memory host services for testing anchortip.
//!
//! Everything here implements the traits in `anchortip_core::host` without a
//! real display toolkit:
//!
//! - [`TestView`]: a view tests can move, resize, detach and drop
//! - [`MemoryOverlayHost`]: records every popup shown and simulates outside
//!   touches
//! - [`ManualDispatcher`]: UI-thread work runs only when the test pumps it
//! - [`TestPlatform`]: all of the above bundled as a `Platform`

mod dispatch;
mod overlay;
mod platform;
mod view;

pub use dispatch::ManualDispatcher;
pub use overlay::{MemoryOverlayHost, MemoryPopup, ShownPopup};
pub use platform::{FixedLocale, FixedMetrics, TestPlatform};
pub use view::TestView;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test writer, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
