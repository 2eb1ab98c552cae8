// Example: observe a mock scroll view's offset through the delegate proxy.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scroll_rx::{
    EdgeInsets, Point, ProxyRegistry, ScrollDelegate, ScrollHost, Size, notify_did_scroll,
};

#[derive(Default)]
struct DemoScrollView {
    offset: Point,
    inset: EdgeInsets,
    frame: Size,
    content: Size,
    delegate: Option<Weak<dyn ScrollDelegate>>,
}

impl ScrollHost for DemoScrollView {
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
    let view = Rc::new(RefCell::new(DemoScrollView {
        frame: Size::new(320.0, 480.0),
        content: Size::new(320.0, 2000.0),
        ..DemoScrollView::default()
    }));

    let registry = ProxyRegistry::new();
    let proxy = registry.proxy_for(&view);

    // The first subscriber gets the seeded offset immediately.
    let _offsets = proxy
        .content_offset_subject()
        .subscribe(|offset| println!("offset: y={}", offset.y));

    for y in [100.0, 250.0, 400.0] {
        view.borrow_mut().set_content_offset(Point::new(0.0, y));
        notify_did_scroll(&view);
    }

    registry.release(&view);
    println!("released, entries={}", registry.len());
}
