use crate::*;

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use scroll_rx::{
    EdgeInsets, Point, ProxyRegistry, ScrollDelegate, ScrollHost, Size, notify_did_scroll,
};

#[derive(Default)]
struct MockScrollView {
    offset: Point,
    inset: EdgeInsets,
    frame: Size,
    content: Size,
    delegate: Option<Weak<dyn ScrollDelegate>>,
}

impl ScrollHost for MockScrollView {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset
    }

    fn frame_size(&self) -> Size {
        self.frame
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn delegate(&self) -> Option<Rc<dyn ScrollDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn set_delegate(&mut self, delegate: Option<Weak<dyn ScrollDelegate>>) {
        self.delegate = delegate;
    }
}

fn feed_view(frame_height: f64, content_height: f64) -> Rc<RefCell<MockScrollView>> {
    Rc::new(RefCell::new(MockScrollView {
        frame: Size::new(320.0, frame_height),
        content: Size::new(320.0, content_height),
        ..MockScrollView::default()
    }))
}

fn scroll_to(view: &Rc<RefCell<MockScrollView>>, y: f64) {
    view.borrow_mut().offset = Point::new(0.0, y);
    notify_did_scroll(view);
}

fn bottom_counter(
    binding: &ScrollBinding<MockScrollView>,
) -> (Rc<Cell<usize>>, scroll_rx::Subscription) {
    let count = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&count);
    let sub = binding
        .reached_bottom()
        .subscribe(move || counter.set(counter.get() + 1));
    (count, sub)
}

#[test]
fn offset_property_replays_latest_offset() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    scroll_to(&view, 30.0);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = binding
        .content_offset()
        .subscribe(move |offset| sink.borrow_mut().push(offset.y));

    // 30.0 was pushed before the subject existed; the seed read the host.
    assert_eq!(*seen.borrow(), [30.0]);

    scroll_to(&view, 40.0);
    assert_eq!(*seen.borrow(), [30.0, 40.0]);
    assert_eq!(binding.content_offset().value(), Point::new(0.0, 40.0));
}

#[test]
fn offset_property_set_writes_through_to_host() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let property = binding.content_offset();
    property.set(Point::new(0.0, 25.0));
    assert_eq!(view.borrow().content_offset(), Point::new(0.0, 25.0));

    // The stream reports the change only once the host fires its delegate
    // callback, like any other scroll.
    assert_eq!(property.value(), Point::default());
    notify_did_scroll(&view);
    assert_eq!(property.value(), Point::new(0.0, 25.0));
}

#[test]
fn set_content_offset_on_dropped_host_is_a_no_op() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);
    let property = binding.content_offset();

    drop(view);
    binding.set_content_offset(Point::new(0.0, 10.0));
    property.set(Point::new(0.0, 10.0));
}

#[test]
fn reached_bottom_requires_strictly_past_threshold() {
    // threshold = max(0, 150 - (100 - 0 - 0)) = 50
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let (count, _sub) = bottom_counter(&binding);
    assert_eq!(count.get(), 0); // replay of y = 0 stays below

    scroll_to(&view, 50.0);
    assert_eq!(count.get(), 0); // exactly at the threshold is not "reached"

    scroll_to(&view, 50.01);
    assert_eq!(count.get(), 1);
}

#[test]
fn reached_bottom_emits_per_qualifying_offset() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let (count, _sub) = bottom_counter(&binding);
    scroll_to(&view, 60.0);
    scroll_to(&view, 70.0);
    scroll_to(&view, 10.0);
    scroll_to(&view, 51.0);
    assert_eq!(count.get(), 3);
}

#[test]
fn reached_bottom_accounts_for_insets() {
    // visible = 100 - 10 - 5 = 85, threshold = 150 - 85 = 65, y' = y + 10
    let view = feed_view(100.0, 150.0);
    view.borrow_mut().inset = EdgeInsets::new(10.0, 0.0, 5.0, 0.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let (count, _sub) = bottom_counter(&binding);
    scroll_to(&view, 55.0);
    assert_eq!(count.get(), 0);

    scroll_to(&view, 55.01);
    assert_eq!(count.get(), 1);
}

#[test]
fn reached_bottom_threshold_clamps_at_zero_for_short_content() {
    // Content shorter than the frame: any downward scroll is past bottom.
    let view = feed_view(100.0, 50.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let (count, _sub) = bottom_counter(&binding);
    scroll_to(&view, 0.0);
    assert_eq!(count.get(), 0);

    scroll_to(&view, 0.01);
    assert_eq!(count.get(), 1);
}

#[test]
fn reached_bottom_fires_on_subscribe_when_already_past() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    scroll_to(&view, 80.0);
    let (count, _sub) = bottom_counter(&binding);
    assert_eq!(count.get(), 1); // replayed offset is already past the bottom
}

#[test]
fn reached_bottom_rereads_geometry_per_event() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let (count, _sub) = bottom_counter(&binding);
    scroll_to(&view, 50.01);
    assert_eq!(count.get(), 1);

    // Content grows between events: the old threshold no longer applies.
    view.borrow_mut().content = Size::new(320.0, 300.0);
    scroll_to(&view, 60.0);
    assert_eq!(count.get(), 1);

    scroll_to(&view, 200.01);
    assert_eq!(count.get(), 2);
}

#[test]
fn reached_bottom_skips_events_after_host_is_gone() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let (count, _sub) = bottom_counter(&binding);
    let offsets = binding.content_offset().values();

    drop(view);
    // The proxy (and subject) are still alive via the registry; a push with
    // no host behind it is skipped, not an error.
    offsets.next(Point::new(0.0, 999.0));
    assert_eq!(count.get(), 0);
}

#[test]
fn did_scroll_ticks_have_no_replay() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    scroll_to(&view, 10.0);
    scroll_to(&view, 20.0);

    let count = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&count);
    let _sub = binding
        .did_scroll()
        .subscribe(move |()| counter.set(counter.get() + 1));
    assert_eq!(count.get(), 0);

    scroll_to(&view, 30.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn properties_share_one_subject_per_host() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let first = binding.content_offset();
    let second = ScrollBinding::new(&registry, &view).content_offset();

    scroll_to(&view, 12.0);
    assert_eq!(first.value(), second.value());
}

#[test]
fn release_completes_property_subscribers() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let completed = Rc::new(Cell::new(0usize));
    let done = Rc::clone(&completed);
    let _sub = binding
        .content_offset()
        .subscribe_with(|_| {}, move || done.set(done.get() + 1));

    registry.release(&view);
    assert_eq!(completed.get(), 1);

    // Scrolling still works imperatively; the stream stays quiet.
    scroll_to(&view, 70.0);
    assert_eq!(completed.get(), 1);
}

#[test]
fn unsubscribed_observer_receives_nothing_further() {
    let view = feed_view(100.0, 150.0);
    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let (count, sub) = bottom_counter(&binding);
    scroll_to(&view, 60.0);
    assert_eq!(count.get(), 1);

    sub.unsubscribe();
    scroll_to(&view, 70.0);
    assert_eq!(count.get(), 1);
}
