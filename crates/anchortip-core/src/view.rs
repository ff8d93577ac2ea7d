//! Views owned by the host display tree, and non-owning observers of them.

use crate::geometry::{Point, ScreenRect, Size};
use std::fmt;
use std::sync::{Arc, Weak};

/// An element of the host display tree that a tooltip can point at or show.
///
/// Implementations answer with live values every call; callers never cache
/// the results across placement passes.
pub trait View: Send + Sync {
    /// Top-left corner of the view in screen coordinates.
    fn location_on_screen(&self) -> Point;

    /// Measured size of the view.
    fn size(&self) -> Size;

    /// Whether the view is currently attached to a window.
    fn is_attached(&self) -> bool;

    /// Snapshot of the view's on-screen rectangle, or `None` if its far
    /// edges are not representable in screen coordinates.
    fn screen_rect(&self) -> Option<ScreenRect> {
        ScreenRect::from_origin_size(self.location_on_screen(), self.size())
    }
}

/// Non-owning handle to a shared value with an explicit liveness check.
///
/// Holding an `Observer` never keeps the observed value alive; once every
/// strong owner drops it, [`Observer::get`] returns `None`.
pub struct Observer<T: ?Sized> {
    inner: Weak<T>,
}

impl<T: ?Sized> Observer<T> {
    /// Observe a value without taking ownership.
    #[must_use]
    pub fn new(value: &Arc<T>) -> Self {
        Self {
            inner: Arc::downgrade(value),
        }
    }

    /// Recover a strong handle if the value is still alive.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.inner.upgrade()
    }

    /// Whether the observed value is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl<T: View + ?Sized> Observer<T> {
    /// Recover the view only if it is alive and attached to a window.
    #[must_use]
    pub fn attached(&self) -> Option<Arc<T>> {
        self.get().filter(|view| view.is_attached())
    }
}

impl<T: ?Sized> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("live", &self.is_live())
            .finish()
    }
}
