//! One-at-a-time tooltip gate.
//!
//! At most one tooltip is on screen. Requests that arrive while one is
//! showing are parked in a FIFO and replayed, one per dismissal, once the
//! visible tooltip goes away. Requests whose views died or detached in the
//! meantime are dropped.
//!
//! Every public entry point is fail-safe: construction and display errors are
//! traced and swallowed, and a poisoned lock is recovered. A tooltip that
//! cannot render never disturbs the caller.

use anchortip_core::{Color, Platform, Popup, View};
use anchortip_layout::PlacementEngine;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, warn};

use crate::config::TooltipConfig;
use crate::error::TooltipError;
use crate::request::{PendingRequest, RequestQueue};
use crate::window::TooltipWindow;

/// Serializes tooltip display requests.
///
/// Cloning yields another handle to the same gate. Create one per process in
/// the application's composition root and hand it to whoever shows tooltips.
#[derive(Clone)]
pub struct TooltipGate {
    shared: Arc<Shared>,
}

struct Shared {
    platform: Platform,
    engine: PlacementEngine,
    state: Mutex<GateState>,
}

#[derive(Default)]
struct GateState {
    active: Option<Weak<dyn Popup>>,
    queue: RequestQueue,
}

impl GateState {
    fn active_popup(&self) -> Option<Arc<dyn Popup>> {
        self.active
            .as_ref()
            .and_then(Weak::upgrade)
            .filter(|popup| popup.is_showing())
    }
}

impl TooltipGate {
    /// Create a gate with the default arrow metrics.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self::with_config(platform, TooltipConfig::default())
    }

    /// Create a gate with explicit arrow metrics.
    ///
    /// A configuration that fails [`TooltipConfig::validate`] is replaced by
    /// the defaults.
    #[must_use]
    pub fn with_config(platform: Platform, config: TooltipConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(error = %err, "invalid tooltip config, using defaults");
                TooltipConfig::default()
            }
        };
        Self {
            shared: Arc::new(Shared {
                platform,
                engine: config.engine(),
                state: Mutex::new(GateState::default()),
            }),
        }
    }

    /// Show a tooltip for `target`, or park the request if one is visible.
    ///
    /// `content_width_dp` is converted to device pixels by the platform's
    /// display metrics. Never blocks and never fails: a tooltip that cannot
    /// be built is simply not shown.
    pub fn show_tooltip(
        &self,
        target: &Arc<dyn View>,
        content: &Arc<dyn View>,
        content_width_dp: i32,
        anchor_color: Option<Color>,
    ) {
        let mut state = self.shared.lock();
        self.shared.show_locked(
            &mut state,
            target,
            content,
            content_width_dp,
            anchor_color,
        );
    }

    /// Dismiss the visible tooltip, if any.
    ///
    /// Dismissal runs the usual hook, so the next parked request is replayed
    /// on the UI thread. The popup is dismissed outside the gate's lock.
    pub fn dismiss_active_tooltip(&self) {
        let active = self.shared.lock().active_popup();
        if let Some(popup) = active {
            popup.dismiss();
        }
    }

    /// Whether a tooltip is currently visible.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.lock().active_popup().is_some()
    }

    /// Number of parked requests.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.shared.lock().queue.len()
    }

    /// Arrow metrics used by this gate.
    #[must_use]
    pub fn engine(&self) -> PlacementEngine {
        self.shared.engine
    }
}

impl fmt::Debug for TooltipGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("TooltipGate")
            .field("engine", &self.shared.engine)
            .field("active", &state.active_popup().is_some())
            .field("pending", &state.queue.len())
            .finish()
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn show_locked(
        self: &Arc<Self>,
        state: &mut GateState,
        target: &Arc<dyn View>,
        content: &Arc<dyn View>,
        content_width_dp: i32,
        anchor_color: Option<Color>,
    ) {
        if state.active_popup().is_some() {
            state.queue.push(PendingRequest::new(
                target,
                content,
                content_width_dp,
                anchor_color,
            ));
            debug!(pending = state.queue.len(), "tooltip busy, request queued");
            return;
        }

        match self.open(target, content, content_width_dp, anchor_color) {
            Ok(popup) => state.active = Some(Arc::downgrade(&popup)),
            Err(err) => {
                state.active = None;
                warn!(error = %err, "tooltip not shown");
            }
        }
    }

    fn open(
        self: &Arc<Self>,
        target: &Arc<dyn View>,
        content: &Arc<dyn View>,
        content_width_dp: i32,
        anchor_color: Option<Color>,
    ) -> Result<Arc<dyn Popup>, TooltipError> {
        let content_width = self.platform.metrics.dp_to_px(content_width_dp);
        let window = TooltipWindow::build(
            &self.platform,
            &self.engine,
            target,
            Arc::clone(content),
            content_width,
            anchor_color,
        )?;
        // Hooked before showing so a dismissal racing the show still drains.
        let gate = Arc::downgrade(self);
        let shown = Arc::downgrade(window.popup());
        window.set_on_dismiss(Box::new(move || {
            if let Some(shared) = gate.upgrade() {
                let dispatcher = Arc::clone(&shared.platform.dispatcher);
                dispatcher.post(Box::new(move || shared.on_dismissed(&shown)));
            }
        }));

        match window.show() {
            Ok(popup) => Ok(popup),
            Err(err) => {
                window.clear_on_dismiss();
                Err(err)
            }
        }
    }

    /// Runs on the UI dispatcher once `popup` has gone away.
    fn on_dismissed(self: &Arc<Self>, popup: &Weak<dyn Popup>) {
        let mut state = self.lock();
        if state
            .active
            .as_ref()
            .is_some_and(|active| Weak::ptr_eq(active, popup))
        {
            state.active = None;
        }
        self.drain(&mut state);
    }

    /// Replay at most one parked request.
    fn drain(self: &Arc<Self>, state: &mut GateState) {
        if state.active_popup().is_some() {
            debug!(
                pending = state.queue.len(),
                "tooltip already active, drain deferred"
            );
            return;
        }

        if let Some(next) = state.queue.next_live() {
            self.show_locked(
                state,
                &next.target,
                &next.content,
                next.content_width_dp,
                next.anchor_color,
            );
        }
    }
}
