//! Recording overlay host.
//!
//! Popups are kept alive by the host while they are showing and released on
//! dismissal, the way a real window manager holds its windows.

use anchortip_core::{
    Composition, DismissHook, HostError, OverlayHost, Point, Popup, PopupSpec,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A popup that was shown at some point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShownPopup {
    /// Popup ID, in creation order
    pub id: usize,
    /// Screen position it was shown at
    pub origin: Point,
    /// Popup window width
    pub width: i32,
    /// Arrow/content arrangement
    pub composition: Composition,
    /// Whether it could take focus
    pub focusable: bool,
    /// Whether outside touches dismiss it
    pub outside_touchable: bool,
}

#[derive(Default)]
struct HostInner {
    next_id: AtomicUsize,
    showing: Mutex<Vec<Arc<MemoryPopup>>>,
    history: Mutex<Vec<ShownPopup>>,
    fail_next_create: AtomicBool,
    fail_next_show: AtomicBool,
    dismiss_next_show: AtomicBool,
}

/// In-memory [`OverlayHost`].
#[derive(Default)]
pub struct MemoryOverlayHost {
    inner: Arc<HostInner>,
}

impl MemoryOverlayHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Popups currently on screen, oldest first.
    pub fn showing(&self) -> Vec<Arc<MemoryPopup>> {
        lock(&self.inner.showing).clone()
    }

    /// Number of popups currently on screen.
    pub fn showing_count(&self) -> usize {
        lock(&self.inner.showing).len()
    }

    /// Most recently shown popup still on screen.
    pub fn top(&self) -> Option<Arc<MemoryPopup>> {
        lock(&self.inner.showing).last().cloned()
    }

    /// Every popup ever shown, in order.
    pub fn history(&self) -> Vec<ShownPopup> {
        lock(&self.inner.history).clone()
    }

    /// Number of popups created, shown or not.
    pub fn created_count(&self) -> usize {
        self.inner.next_id.load(Ordering::SeqCst)
    }

    /// Simulate a touch outside every popup that allows it.
    pub fn touch_outside(&self) {
        let targets: Vec<_> = self
            .showing()
            .into_iter()
            .filter(|popup| popup.spec.outside_touchable)
            .collect();
        for popup in targets {
            popup.dismiss();
        }
    }

    /// Make the next `create_popup` call fail.
    pub fn fail_next_create(&self) {
        self.inner.fail_next_create.store(true, Ordering::SeqCst);
    }

    /// Make the next `show_at` call fail.
    pub fn fail_next_show(&self) {
        self.inner.fail_next_show.store(true, Ordering::SeqCst);
    }

    /// Dismiss the next popup as soon as it appears, before `show_at`
    /// returns.
    pub fn dismiss_next_show(&self) {
        self.inner.dismiss_next_show.store(true, Ordering::SeqCst);
    }
}

impl OverlayHost for MemoryOverlayHost {
    fn create_popup(&self, spec: PopupSpec) -> Result<Arc<dyn Popup>, HostError> {
        if self.inner.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(HostError::CreateFailed("injected failure".to_string()));
        }
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let host = Arc::downgrade(&self.inner);
        let popup = Arc::new_cyclic(|this| MemoryPopup {
            id,
            spec,
            host,
            this: Weak::clone(this),
            state: Mutex::new(PopupState::default()),
            hook: Mutex::new(None),
        });
        Ok(popup as Arc<dyn Popup>)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct PopupState {
    origin: Option<Point>,
    showing: bool,
    dismissed: bool,
}

/// Popup created by [`MemoryOverlayHost`].
pub struct MemoryPopup {
    id: usize,
    spec: PopupSpec,
    host: Weak<HostInner>,
    this: Weak<MemoryPopup>,
    state: Mutex<PopupState>,
    hook: Mutex<Option<DismissHook>>,
}

impl MemoryPopup {
    /// Popup ID, in creation order.
    pub const fn id(&self) -> usize {
        self.id
    }

    /// The spec the popup was created with.
    pub const fn spec(&self) -> &PopupSpec {
        &self.spec
    }

    /// Where the popup was shown, if it was.
    pub fn origin(&self) -> Option<Point> {
        lock(&self.state).origin
    }

    /// Whether the popup has been dismissed.
    pub fn is_dismissed(&self) -> bool {
        lock(&self.state).dismissed
    }

    /// Whether a dismissal hook is installed.
    pub fn has_dismiss_hook(&self) -> bool {
        lock(&self.hook).is_some()
    }
}

impl Popup for MemoryPopup {
    fn show_at(&self, origin: Point) -> Result<(), HostError> {
        let host = self.host.upgrade().ok_or(HostError::WindowUnavailable)?;
        if host.fail_next_show.swap(false, Ordering::SeqCst) {
            return Err(HostError::ShowFailed("injected failure".to_string()));
        }
        {
            let mut state = lock(&self.state);
            if state.showing || state.dismissed {
                return Err(HostError::ShowFailed(format!(
                    "popup {} cannot be shown again",
                    self.id
                )));
            }
            state.origin = Some(origin);
            state.showing = true;
        }

        if let Some(this) = self.this.upgrade() {
            lock(&host.showing).push(this);
        }
        lock(&host.history).push(ShownPopup {
            id: self.id,
            origin,
            width: self.spec.width,
            composition: self.spec.composition,
            focusable: self.spec.focusable,
            outside_touchable: self.spec.outside_touchable,
        });

        if host.dismiss_next_show.swap(false, Ordering::SeqCst) {
            self.dismiss();
        }
        Ok(())
    }

    fn dismiss(&self) {
        {
            let mut state = lock(&self.state);
            if !state.showing {
                return;
            }
            state.showing = false;
            state.dismissed = true;
        }

        if let Some(host) = self.host.upgrade() {
            lock(&host.showing).retain(|popup| popup.id != self.id);
        }

        let hook = lock(&self.hook).take();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn is_showing(&self) -> bool {
        lock(&self.state).showing
    }

    fn set_on_dismiss(&self, hook: Option<DismissHook>) {
        *lock(&self.hook) = hook;
    }
}
