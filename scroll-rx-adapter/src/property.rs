use alloc::rc::Weak;
use core::cell::RefCell;

use scroll_rx::{BehaviorSubject, Point, ScrollHost, Subscription};

/// A two-way control property over the host's scroll offset.
///
/// Reading is a replay-latest stream: every new subscriber synchronously
/// receives the current offset before any future value, so a UI layer knows
/// where it is at bind time. Writing scrolls the host directly; the update
/// flows back into the stream through the host's delegate callback, not
/// through an acknowledgement path.
pub struct OffsetProperty<H: ScrollHost> {
    host: Weak<RefCell<H>>,
    values: BehaviorSubject<Point>,
}

impl<H: ScrollHost + 'static> OffsetProperty<H> {
    pub(crate) fn new(host: Weak<RefCell<H>>, values: BehaviorSubject<Point>) -> Self {
        Self { host, values }
    }

    /// The latest known offset.
    pub fn value(&self) -> Point {
        self.values.value()
    }

    /// Subscribes an observer; it immediately receives the latest offset.
    pub fn subscribe(&self, next: impl FnMut(&Point) + 'static) -> Subscription {
        self.values.subscribe(next)
    }

    /// Like [`OffsetProperty::subscribe`], with a completion callback that
    /// runs when the host's proxy is torn down.
    pub fn subscribe_with(
        &self,
        next: impl FnMut(&Point) + 'static,
        complete: impl FnMut() + 'static,
    ) -> Subscription {
        self.values.subscribe_with(next, complete)
    }

    /// The sink half of the binding: writes a new offset into the host.
    /// A no-op if the host is gone.
    pub fn set(&self, offset: Point) {
        if let Some(host) = self.host.upgrade() {
            host.borrow_mut().set_content_offset(offset);
        }
    }

    /// A handle to the underlying replay-latest subject.
    pub fn values(&self) -> BehaviorSubject<Point> {
        self.values.clone()
    }
}
