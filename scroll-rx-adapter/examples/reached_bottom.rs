// Example: infinite-feed style "load more" trigger from the derived
// reached-bottom stream.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scroll_rx::{
    EdgeInsets, Point, ProxyRegistry, ScrollDelegate, ScrollHost, Size, notify_did_scroll,
};
use scroll_rx_adapter::ScrollBinding;

#[derive(Default)]
struct FeedView {
    offset: Point,
    inset: EdgeInsets,
    frame: Size,
    content: Size,
    delegate: Option<Weak<dyn ScrollDelegate>>,
}

impl ScrollHost for FeedView {
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

fn main() {
    let view = Rc::new(RefCell::new(FeedView {
        frame: Size::new(320.0, 480.0),
        content: Size::new(320.0, 1200.0),
        ..FeedView::default()
    }));

    let registry = ProxyRegistry::new();
    let binding = ScrollBinding::new(&registry, &view);

    let pages = Rc::new(RefCell::new(1usize));
    let feed = Rc::clone(&view);
    let page_count = Rc::clone(&pages);
    let _load_more = binding.reached_bottom().subscribe(move || {
        let next = *page_count.borrow() + 1;
        *page_count.borrow_mut() = next;
        // Grow the content like a feed appending a page.
        feed.borrow_mut().content.height += 600.0;
        println!("reached bottom, loading page {next}");
    });

    // threshold = 1200 - 480 = 720; the last step crosses it
    for y in [300.0, 650.0, 720.5] {
        view.borrow_mut().set_content_offset(Point::new(0.0, y));
        notify_did_scroll(&view);
        println!("scrolled to y={y}");
    }

    println!("pages loaded: {}", pages.borrow());
}
