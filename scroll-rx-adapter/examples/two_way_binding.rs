// Example: the offset property as a two-way binding.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scroll_rx::{
    EdgeInsets, Point, ProxyRegistry, ScrollDelegate, ScrollHost, Size, notify_did_scroll,
};
use scroll_rx_adapter::ScrollBinding;

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
    let binding = ScrollBinding::new(&registry, &view);
    let property = binding.content_offset();

    let _log = property.subscribe(|offset| println!("stream saw y={}", offset.y));

    // Write side: scroll programmatically; the host reports the change back
    // through its delegate callback, which feeds the read side.
    property.set(Point::new(0.0, 500.0));
    notify_did_scroll(&view);

    property.set(Point::new(0.0, 1250.0));
    notify_did_scroll(&view);

    println!("final value: y={}", property.value().y);
}
