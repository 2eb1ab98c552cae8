use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{DelegateProxy, ScrollDelegate, ScrollHost};

#[cfg(feature = "std")]
type ProxyMap<H> = HashMap<usize, Rc<DelegateProxy<H>>>;
#[cfg(not(feature = "std"))]
type ProxyMap<H> = BTreeMap<usize, Rc<DelegateProxy<H>>>;

/// An explicit lookup service guaranteeing one [`DelegateProxy`] per host.
///
/// Entries are keyed by the identity of the host's shared handle and created
/// lazily on first lookup. The registry owns the proxies; hosts are only
/// held weakly, so the registry never extends a view's lifetime. Teardown is
/// deterministic: [`ProxyRegistry::release`] and [`ProxyRegistry::purge`]
/// complete a proxy's subjects the moment its entry goes away, rather than
/// leaving completion to drop order.
///
/// The registry is a plain value, not hidden global state. A UI layer
/// typically owns one registry per host type next to its event loop.
pub struct ProxyRegistry<H: ScrollHost> {
    entries: RefCell<ProxyMap<H>>,
}

impl<H: ScrollHost + 'static> ProxyRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(ProxyMap::<H>::new()),
        }
    }

    fn key(host: &Rc<RefCell<H>>) -> usize {
        Rc::as_ptr(host) as usize
    }

    /// Returns the proxy for `host`, creating and installing it on first
    /// lookup.
    ///
    /// Installation takes over the host's delegate slot; a delegate that was
    /// already installed keeps receiving calls through the proxy's forward
    /// slot. An entry whose host has since been dropped is treated as
    /// vacant, so a reused allocation address never aliases a dead proxy.
    pub fn proxy_for(&self, host: &Rc<RefCell<H>>) -> Rc<DelegateProxy<H>> {
        let key = Self::key(host);

        let stale = {
            let entries = self.entries.borrow();
            match entries.get(&key) {
                Some(proxy) if proxy.host().is_some() => return Rc::clone(proxy),
                Some(_) => true,
                None => false,
            }
        };
        if stale {
            if let Some(proxy) = self.entries.borrow_mut().remove(&key) {
                proxy.finish();
            }
        }

        let proxy = Rc::new(DelegateProxy::new(Rc::downgrade(host)));

        // Capture the application delegate before taking over the slot.
        let existing = host.borrow().delegate();
        if let Some(existing) = existing {
            proxy.set_forward_delegate(Some(Rc::downgrade(&existing)));
        }

        let weak = Rc::downgrade(&proxy);
        let delegate: Weak<dyn ScrollDelegate> = weak;
        host.borrow_mut().set_delegate(Some(delegate));
        rxdebug!(key, "installed delegate proxy");

        self.entries.borrow_mut().insert(key, Rc::clone(&proxy));
        proxy
    }

    /// Removes the entry for `host` and completes its subjects.
    ///
    /// The host's delegate slot is handed back to the application delegate
    /// the proxy was forwarding to, if any. Returns `false` if `host` had no
    /// entry.
    pub fn release(&self, host: &Rc<RefCell<H>>) -> bool {
        let removed = self.entries.borrow_mut().remove(&Self::key(host));
        let Some(proxy) = removed else {
            return false;
        };

        let forward = proxy.forward_delegate();
        host.borrow_mut()
            .set_delegate(forward.map(|delegate| Rc::downgrade(&delegate)));
        proxy.finish();
        rxdebug!(key = Self::key(host), "released delegate proxy");
        true
    }

    /// Sweeps entries whose host has been dropped, completing their
    /// subjects. Returns the number of entries removed.
    pub fn purge(&self) -> usize {
        let mut dead = Vec::new();
        {
            let mut entries = self.entries.borrow_mut();
            entries.retain(|_, proxy| {
                if proxy.host().is_some() {
                    true
                } else {
                    dead.push(Rc::clone(proxy));
                    false
                }
            });
        }

        // Completion callbacks run with the map unborrowed; they may look
        // proxies up again.
        for proxy in &dead {
            proxy.finish();
        }
        if !dead.is_empty() {
            rxdebug!(removed = dead.len(), "purged dead registry entries");
        }
        dead.len()
    }

    pub fn contains(&self, host: &Rc<RefCell<H>>) -> bool {
        self.entries.borrow().contains_key(&Self::key(host))
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<H: ScrollHost + 'static> Default for ProxyRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
