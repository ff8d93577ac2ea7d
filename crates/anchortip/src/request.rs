//! Show-requests parked while another tooltip is visible.

use anchortip_core::{Color, Observer, View};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// A show-request waiting for the active tooltip to go away.
///
/// Target and content are observed, so a queued request never keeps a view
/// alive past its owner.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    target: Observer<dyn View>,
    content: Observer<dyn View>,
    content_width_dp: i32,
    anchor_color: Option<Color>,
}

impl PendingRequest {
    /// Park a request.
    #[must_use]
    pub fn new(
        target: &Arc<dyn View>,
        content: &Arc<dyn View>,
        content_width_dp: i32,
        anchor_color: Option<Color>,
    ) -> Self {
        Self {
            target: Observer::new(target),
            content: Observer::new(content),
            content_width_dp,
            anchor_color,
        }
    }

    /// Requested content width in density-independent pixels.
    #[must_use]
    pub const fn content_width_dp(&self) -> i32 {
        self.content_width_dp
    }

    /// Requested arrow tint.
    #[must_use]
    pub const fn anchor_color(&self) -> Option<Color> {
        self.anchor_color
    }

    /// Recover live views, or `None` if the target is gone or detached or
    /// the content is gone.
    #[must_use]
    pub fn resolve(&self) -> Option<LiveRequest> {
        let target = self.target.attached()?;
        let content = self.content.get()?;
        Some(LiveRequest {
            target,
            content,
            content_width_dp: self.content_width_dp,
            anchor_color: self.anchor_color,
        })
    }
}

/// A queued request whose views are still usable.
#[derive(Clone)]
pub struct LiveRequest {
    /// Target view, alive and attached
    pub target: Arc<dyn View>,
    /// Content view, alive
    pub content: Arc<dyn View>,
    /// Content width in density-independent pixels
    pub content_width_dp: i32,
    /// Arrow tint
    pub anchor_color: Option<Color>,
}

/// FIFO of parked requests.
#[derive(Debug, Default)]
pub struct RequestQueue {
    pending: VecDeque<PendingRequest>,
}

impl RequestQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request at the tail.
    pub fn push(&mut self, request: PendingRequest) {
        self.pending.push_back(request);
    }

    /// Number of parked requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is parked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop from the head until a request resolves.
    ///
    /// Requests that fail to resolve are dropped for good. Requests behind
    /// the first live one stay queued.
    pub fn next_live(&mut self) -> Option<LiveRequest> {
        while let Some(request) = self.pending.pop_front() {
            if let Some(live) = request.resolve() {
                return Some(live);
            }
            debug!(
                remaining = self.pending.len(),
                "dropping stale tooltip request"
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchortip_core::{Point, Size};
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Stub {
        attached: AtomicBool,
    }

    impl View for Stub {
        fn location_on_screen(&self) -> Point {
            Point::new(0, 0)
        }

        fn size(&self) -> Size {
            Size::new(10, 10)
        }

        fn is_attached(&self) -> bool {
            self.attached.load(Ordering::SeqCst)
        }
    }

    fn stub() -> Arc<Stub> {
        Arc::new(Stub {
            attached: AtomicBool::new(true),
        })
    }

    fn request(target: &Arc<Stub>, content: &Arc<Stub>, width: i32) -> PendingRequest {
        let target: Arc<dyn View> = Arc::clone(target) as Arc<dyn View>;
        let content: Arc<dyn View> = Arc::clone(content) as Arc<dyn View>;
        PendingRequest::new(&target, &content, width, None)
    }

    #[test]
    fn test_resolve_live() {
        let (t, c) = (stub(), stub());
        let req = request(&t, &c, 120);
        let live = req.resolve().unwrap();
        assert_eq!(live.content_width_dp, 120);
        assert_eq!(req.content_width_dp(), 120);
        assert!(req.anchor_color().is_none());
    }

    #[test]
    fn test_resolve_fails_when_target_dropped() {
        let (t, c) = (stub(), stub());
        let req = request(&t, &c, 120);
        drop(t);
        assert!(req.resolve().is_none());
    }

    #[test]
    fn test_resolve_fails_when_target_detached() {
        let (t, c) = (stub(), stub());
        let req = request(&t, &c, 120);
        t.attached.store(false, Ordering::SeqCst);
        assert!(req.resolve().is_none());
    }

    #[test]
    fn test_resolve_fails_when_content_dropped() {
        let (t, c) = (stub(), stub());
        let req = request(&t, &c, 120);
        drop(c);
        assert!(req.resolve().is_none());
    }

    #[test]
    fn test_next_live_skips_stale_and_stops_at_first_live() {
        let (a, b, c) = (stub(), stub(), stub());
        let content = stub();
        let mut queue = RequestQueue::new();
        queue.push(request(&a, &content, 1));
        queue.push(request(&b, &content, 2));
        queue.push(request(&c, &content, 3));
        drop(a);

        let live = queue.next_live().unwrap();
        assert_eq!(live.content_width_dp, 2);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_next_live_drains_all_stale() {
        let (a, b) = (stub(), stub());
        let content = stub();
        let mut queue = RequestQueue::new();
        queue.push(request(&a, &content, 1));
        queue.push(request(&b, &content, 2));
        drop(a);
        drop(b);

        assert!(queue.next_live().is_none());
        assert!(queue.is_empty());
    }
}
