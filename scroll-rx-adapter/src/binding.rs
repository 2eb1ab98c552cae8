use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use scroll_rx::{DelegateProxy, Point, ProxyRegistry, PublishSubject, ScrollHost};

use crate::{OffsetProperty, ReachedBottom};

/// The reactive surface for one scrollable host.
///
/// A binding is cheap to create: it looks the host's [`DelegateProxy`] up in
/// the registry (installing it on first use) and hands out property objects
/// backed by the proxy's subjects. Bindings hold the host weakly and may
/// outlive it; dropping a binding tears nothing down, since proxy lifetime
/// belongs to the registry.
pub struct ScrollBinding<H: ScrollHost> {
    host: Weak<RefCell<H>>,
    proxy: Rc<DelegateProxy<H>>,
}

impl<H: ScrollHost + 'static> ScrollBinding<H> {
    pub fn new(registry: &ProxyRegistry<H>, host: &Rc<RefCell<H>>) -> Self {
        Self {
            host: Rc::downgrade(host),
            proxy: registry.proxy_for(host),
        }
    }

    pub fn proxy(&self) -> &Rc<DelegateProxy<H>> {
        &self.proxy
    }

    /// Two-way binding over the host's scroll offset.
    ///
    /// The read side replays the latest offset to each new subscriber before
    /// any live update; the write side scrolls the host directly.
    pub fn content_offset(&self) -> OffsetProperty<H> {
        OffsetProperty::new(self.host.clone(), self.proxy.content_offset_subject())
    }

    /// One unit event per delegate callback, with no replay.
    pub fn did_scroll(&self) -> PublishSubject<()> {
        self.proxy.scroll_tick_subject()
    }

    /// Emits each time an offset change lands strictly past the bottom of
    /// the scrollable content.
    pub fn reached_bottom(&self) -> ReachedBottom<H> {
        ReachedBottom::new(self.host.clone(), self.proxy.content_offset_subject())
    }

    /// Programmatically scrolls the host. Fire-and-forget: a dropped host
    /// is a no-op, and the change is reported back through the host's own
    /// delegate callback like any other scroll.
    pub fn set_content_offset(&self, offset: Point) {
        if let Some(host) = self.host.upgrade() {
            host.borrow_mut().set_content_offset(offset);
        }
    }
}
