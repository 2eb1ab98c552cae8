use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use crate::subject::{BehaviorSubject, PublishSubject};
use crate::{Point, ScrollDelegate, ScrollHost};

/// Fans the host's single delegate slot out to any number of observers.
///
/// The proxy implements [`ScrollDelegate`] itself. Each callback is pushed
/// into the subjects that have been materialized, then forwarded to the
/// application delegate, if one is registered. Subjects are created on first
/// access, so a host nobody observes allocates no streams.
///
/// The proxy holds only a weak reference to its host and never extends its
/// lifetime. Obtain proxies through [`crate::ProxyRegistry`], which
/// guarantees one proxy per host.
pub struct DelegateProxy<H: ScrollHost> {
    host: Weak<RefCell<H>>,
    forward: RefCell<Option<Weak<dyn ScrollDelegate>>>,
    offset_subject: RefCell<Option<BehaviorSubject<Point>>>,
    tick_subject: RefCell<Option<PublishSubject<()>>>,
    finished: Cell<bool>,
}

impl<H: ScrollHost> DelegateProxy<H> {
    pub fn new(host: Weak<RefCell<H>>) -> Self {
        rxdebug!("DelegateProxy::new");
        Self {
            host,
            forward: RefCell::new(None),
            offset_subject: RefCell::new(None),
            tick_subject: RefCell::new(None),
            finished: Cell::new(false),
        }
    }

    /// The host this proxy observes, if it is still alive.
    pub fn host(&self) -> Option<Rc<RefCell<H>>> {
        self.host.upgrade()
    }

    /// Registers the application delegate that keeps receiving forwarded
    /// calls. The slot is weak; the application retains its own delegate.
    pub fn set_forward_delegate(&self, delegate: Option<Weak<dyn ScrollDelegate>>) {
        *self.forward.borrow_mut() = delegate;
    }

    pub fn forward_delegate(&self) -> Option<Rc<dyn ScrollDelegate>> {
        self.forward.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Lazily materializes the replay-latest offset subject.
    ///
    /// The first call seeds the subject with the host's current offset (a
    /// zero point if the host is already gone); repeated calls return a
    /// handle to the same subject.
    pub fn content_offset_subject(&self) -> BehaviorSubject<Point> {
        if let Some(subject) = &*self.offset_subject.borrow() {
            return subject.clone();
        }

        let seed = self
            .host
            .upgrade()
            .map(|host| host.borrow().content_offset())
            .unwrap_or_default();
        rxtrace!(seed_x = seed.x, seed_y = seed.y, "materializing offset subject");
        let subject = BehaviorSubject::new(seed);
        *self.offset_subject.borrow_mut() = Some(subject.clone());
        subject
    }

    /// Lazily materializes the per-callback tick subject (no replay, no
    /// seed).
    pub fn scroll_tick_subject(&self) -> PublishSubject<()> {
        if let Some(subject) = &*self.tick_subject.borrow() {
            return subject.clone();
        }

        rxtrace!("materializing tick subject");
        let subject = PublishSubject::new();
        *self.tick_subject.borrow_mut() = Some(subject.clone());
        subject
    }

    pub fn has_offset_subject(&self) -> bool {
        self.offset_subject.borrow().is_some()
    }

    pub fn has_tick_subject(&self) -> bool {
        self.tick_subject.borrow().is_some()
    }

    /// Completes every materialized subject.
    ///
    /// Runs at most once; later calls (including the one from `Drop`) are
    /// no-ops, and a proxy that never materialized a subject finishes
    /// without side effects.
    pub fn finish(&self) {
        if self.finished.replace(true) {
            return;
        }
        rxdebug!("DelegateProxy::finish");

        let offset_subject = self.offset_subject.borrow().clone();
        if let Some(subject) = offset_subject {
            subject.complete();
        }
        let tick_subject = self.tick_subject.borrow().clone();
        if let Some(subject) = tick_subject {
            subject.complete();
        }
    }
}

impl<H: ScrollHost> ScrollDelegate for DelegateProxy<H> {
    /// Subject pushes happen strictly before forwarding, so reactive
    /// observers see a value change no later than imperative code reacting
    /// to the same callback.
    fn did_scroll(&self, offset: Point) {
        // Subject handles are cloned out of their cells before pushing so
        // observers may re-enter the proxy.
        let offset_subject = self.offset_subject.borrow().clone();
        if let Some(subject) = offset_subject {
            subject.next(offset);
        }
        let tick_subject = self.tick_subject.borrow().clone();
        if let Some(subject) = tick_subject {
            subject.next(());
        }
        if let Some(forward) = self.forward_delegate() {
            forward.did_scroll(offset);
        }
    }
}

impl<H: ScrollHost> Drop for DelegateProxy<H> {
    fn drop(&mut self) {
        self.finish();
    }
}
