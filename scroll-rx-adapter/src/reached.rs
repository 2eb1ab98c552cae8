use alloc::rc::Weak;
use core::cell::RefCell;

use scroll_rx::{BehaviorSubject, Point, ScrollHost, Subscription};

/// A derived stream that fires when the scroll position lands strictly past
/// the bottom of the content.
///
/// The threshold is a pure function of the latest offset and the host's
/// geometry *at evaluation time*: nothing is cached, so a resize between two
/// offset events changes the threshold used for the next one. Offsets that
/// arrive while the host is gone are skipped without terminating the stream.
pub struct ReachedBottom<H: ScrollHost> {
    host: Weak<RefCell<H>>,
    offsets: BehaviorSubject<Point>,
}

impl<H: ScrollHost + 'static> ReachedBottom<H> {
    pub(crate) fn new(host: Weak<RefCell<H>>, offsets: BehaviorSubject<Point>) -> Self {
        Self { host, offsets }
    }

    /// Runs `next` once per qualifying offset. Landing exactly on the
    /// threshold does not count as reached.
    ///
    /// Because the offset stream replays, a subscriber that attaches while
    /// the view is already past the bottom fires immediately.
    pub fn subscribe(&self, mut next: impl FnMut() + 'static) -> Subscription {
        let host = self.host.clone();
        self.offsets.subscribe(move |offset| {
            if past_bottom(&host, offset) {
                next();
            }
        })
    }
}

fn past_bottom<H: ScrollHost>(host: &Weak<RefCell<H>>, offset: &Point) -> bool {
    let Some(host) = host.upgrade() else {
        return false;
    };
    let host = host.borrow();

    let inset = host.content_inset();
    let visible_height = host.frame_size().height - inset.top - inset.bottom;
    let y = offset.y + inset.top;
    let threshold = (host.content_size().height - visible_height).max(0.0);

    y > threshold
}
