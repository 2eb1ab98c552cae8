use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::mem;

type NextFn<T> = Rc<RefCell<dyn FnMut(&T)>>;
type CompleteFn = Rc<RefCell<dyn FnMut()>>;

struct Slot<T> {
    id: u64,
    next: NextFn<T>,
    complete: Option<CompleteFn>,
}

/// Shared observer bookkeeping for both subject kinds.
struct Multicast<T> {
    observers: Vec<Slot<T>>,
    next_id: u64,
    done: bool,
}

impl<T> Multicast<T> {
    fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            done: false,
        }
    }

    fn attach(&mut self, next: NextFn<T>, complete: Option<CompleteFn>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push(Slot { id, next, complete });
        id
    }

    fn remove(&mut self, id: u64) {
        self.observers.retain(|slot| slot.id != id);
    }

    /// Cheap handle copies of every attached observer, so emission can run
    /// with all borrows released and callbacks may re-enter the subject.
    fn snapshot(&self) -> Vec<NextFn<T>> {
        self.observers
            .iter()
            .map(|slot| Rc::clone(&slot.next))
            .collect()
    }

    /// Marks the subject done and drains the observer list, returning the
    /// completion callbacks to run. Empty on a second call.
    fn take_completions(&mut self) -> Vec<CompleteFn> {
        if self.done {
            return Vec::new();
        }
        self.done = true;
        let slots = mem::take(&mut self.observers);
        slots.into_iter().filter_map(|slot| slot.complete).collect()
    }
}

trait Detach {
    fn detach(&self, id: u64);
}

struct BehaviorInner<T> {
    value: T,
    cast: Multicast<T>,
}

impl<T> Detach for RefCell<BehaviorInner<T>> {
    fn detach(&self, id: u64) {
        self.borrow_mut().cast.remove(id);
    }
}

impl<T> Detach for RefCell<Multicast<T>> {
    fn detach(&self, id: u64) {
        self.borrow_mut().remove(id);
    }
}

/// Detaches one observer from the subject it subscribed to.
///
/// Disposal is explicit: dropping the handle without calling
/// [`Subscription::unsubscribe`] leaves the observer attached for the
/// lifetime of the subject.
#[must_use = "dropping a Subscription does not detach the observer"]
pub struct Subscription {
    target: Option<(Weak<dyn Detach>, u64)>,
}

impl Subscription {
    fn attached(target: Weak<dyn Detach>, id: u64) -> Self {
        Self {
            target: Some((target, id)),
        }
    }

    /// A handle with nothing behind it, returned for post-completion
    /// subscriptions.
    fn detached() -> Self {
        Self { target: None }
    }

    /// Stops future deliveries to this observer.
    ///
    /// A no-op if the subject has already completed or been dropped.
    pub fn unsubscribe(self) {
        if let Some((target, id)) = self.target {
            if let Some(target) = target.upgrade() {
                target.detach(id);
            }
        }
    }
}

/// A hot subject that remembers the most recently pushed value and replays
/// it synchronously to every new subscriber.
///
/// Cloning a subject clones a handle to the same shared state. All access is
/// single-threaded; emission is synchronous and reentrant-safe.
pub struct BehaviorSubject<T> {
    inner: Rc<RefCell<BehaviorInner<T>>>,
}

impl<T> Clone for BehaviorSubject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> BehaviorSubject<T> {
    pub fn new(seed: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BehaviorInner {
                value: seed,
                cast: Multicast::new(),
            })),
        }
    }

    /// The most recently pushed value (the seed, if nothing was pushed yet).
    pub fn value(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn is_done(&self) -> bool {
        self.inner.borrow().cast.done
    }

    /// Records `value` for replay, then delivers it to every observer that
    /// was attached when the push began. A no-op once completed.
    pub fn next(&self, value: T) {
        let observers = {
            let mut inner = self.inner.borrow_mut();
            if inner.cast.done {
                return;
            }
            inner.value = value.clone();
            inner.cast.snapshot()
        };
        for next in observers {
            (next.borrow_mut())(&value);
        }
    }

    /// Subscribes an observer; it immediately receives the latest value,
    /// then every future push until it unsubscribes or the subject
    /// completes.
    pub fn subscribe(&self, next: impl FnMut(&T) + 'static) -> Subscription {
        self.subscribe_slot(Rc::new(RefCell::new(next)), None)
    }

    /// Like [`BehaviorSubject::subscribe`], with a completion callback that
    /// runs exactly once when the subject completes. Subscribing after
    /// completion runs `complete` immediately and replays nothing.
    pub fn subscribe_with(
        &self,
        next: impl FnMut(&T) + 'static,
        complete: impl FnMut() + 'static,
    ) -> Subscription {
        self.subscribe_slot(
            Rc::new(RefCell::new(next)),
            Some(Rc::new(RefCell::new(complete))),
        )
    }

    fn subscribe_slot(&self, next: NextFn<T>, complete: Option<CompleteFn>) -> Subscription {
        let (id, replay) = {
            let mut inner = self.inner.borrow_mut();
            if inner.cast.done {
                drop(inner);
                if let Some(complete) = complete {
                    (complete.borrow_mut())();
                }
                return Subscription::detached();
            }
            (inner.cast.attach(Rc::clone(&next), complete), inner.value.clone())
        };
        // Replay runs with the borrow released so the observer may
        // immediately re-enter the subject.
        (next.borrow_mut())(&replay);
        let weak = Rc::downgrade(&self.inner);
        Subscription::attached(weak, id)
    }

    /// Completes the subject: observers receive their completion callback
    /// exactly once and are detached; later pushes deliver nothing.
    pub fn complete(&self) {
        let completions = self.inner.borrow_mut().cast.take_completions();
        for complete in completions {
            (complete.borrow_mut())();
        }
    }
}

/// A hot subject with no replay: subscribers only see pushes that happen
/// after they attach.
pub struct PublishSubject<T> {
    inner: Rc<RefCell<Multicast<T>>>,
}

impl<T> Clone for PublishSubject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> PublishSubject<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Multicast::new())),
        }
    }

    pub fn is_done(&self) -> bool {
        self.inner.borrow().done
    }

    /// Delivers `value` to every observer attached when the push began. A
    /// no-op once completed.
    pub fn next(&self, value: T) {
        let observers = {
            let inner = self.inner.borrow();
            if inner.done {
                return;
            }
            inner.snapshot()
        };
        for next in observers {
            (next.borrow_mut())(&value);
        }
    }

    pub fn subscribe(&self, next: impl FnMut(&T) + 'static) -> Subscription {
        self.subscribe_slot(Rc::new(RefCell::new(next)), None)
    }

    /// Like [`PublishSubject::subscribe`], with a completion callback that
    /// runs exactly once when the subject completes.
    pub fn subscribe_with(
        &self,
        next: impl FnMut(&T) + 'static,
        complete: impl FnMut() + 'static,
    ) -> Subscription {
        self.subscribe_slot(
            Rc::new(RefCell::new(next)),
            Some(Rc::new(RefCell::new(complete))),
        )
    }

    fn subscribe_slot(&self, next: NextFn<T>, complete: Option<CompleteFn>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            if inner.done {
                drop(inner);
                if let Some(complete) = complete {
                    (complete.borrow_mut())();
                }
                return Subscription::detached();
            }
            inner.attach(next, complete)
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription::attached(weak, id)
    }

    pub fn complete(&self) {
        let completions = self.inner.borrow_mut().take_completions();
        for complete in completions {
            (complete.borrow_mut())();
        }
    }
}

impl<T: 'static> Default for PublishSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}
