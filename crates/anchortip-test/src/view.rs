//! Views whose geometry and attachment tests can change at will.

use anchortip_core::{Point, ScreenRect, Size, View};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy)]
struct ViewState {
    origin: Point,
    size: Size,
    attached: bool,
}

/// An attached view with a fixed on-screen rectangle until told otherwise.
#[derive(Debug)]
pub struct TestView {
    state: Mutex<ViewState>,
}

impl TestView {
    /// Create an attached view covering `rect`.
    pub fn new(rect: ScreenRect) -> Arc<Self> {
        Self::placed(rect.origin(), rect.size())
    }

    /// Create an attached view at `(x, y)` with the given size.
    ///
    /// The far edges may lie past `i32::MAX`; such a view has no
    /// representable screen rectangle.
    pub fn at(x: i32, y: i32, width: i32, height: i32) -> Arc<Self> {
        Self::placed(Point::new(x, y), Size::new(width, height))
    }

    fn placed(origin: Point, size: Size) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ViewState {
                origin,
                size,
                attached: true,
            }),
        })
    }

    /// A content view: attached, placed at the origin.
    pub fn content(width: i32, height: i32) -> Arc<Self> {
        Self::at(0, 0, width, height)
    }

    /// Upcast to a trait object sharing the same allocation.
    pub fn handle(self: &Arc<Self>) -> Arc<dyn View> {
        Arc::clone(self) as Arc<dyn View>
    }

    /// Detach from the window.
    pub fn detach(&self) {
        self.with_state(|s| s.attached = false);
    }

    /// Re-attach to the window.
    pub fn attach(&self) {
        self.with_state(|s| s.attached = true);
    }

    /// Move the top-left corner.
    pub fn move_to(&self, origin: Point) {
        self.with_state(|s| s.origin = origin);
    }

    /// Change the measured size.
    pub fn resize(&self, size: Size) {
        self.with_state(|s| s.size = size);
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl View for TestView {
    fn location_on_screen(&self) -> Point {
        self.with_state(|s| s.origin)
    }

    fn size(&self) -> Size {
        self.with_state(|s| s.size)
    }

    fn is_attached(&self) -> bool {
        self.with_state(|s| s.attached)
    }
}
