use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::{EdgeInsets, Point, Size};

/// The scrollable view abstraction.
///
/// This crate never renders anything; a TUI/GUI layer implements this trait
/// over its scrollable view and routes the view's delegate callback through
/// [`ScrollDelegate`]. The proxy only reads geometry from the host, except
/// when a caller binds a new offset back into it.
pub trait ScrollHost {
    fn content_offset(&self) -> Point;

    /// Programmatically scrolls the view. Implementations are expected to
    /// report the change back through their delegate callback, the same way
    /// a user-driven scroll would.
    fn set_content_offset(&mut self, offset: Point);

    fn content_inset(&self) -> EdgeInsets;

    fn frame_size(&self) -> Size;

    /// Total size of the scrollable content, which may exceed the frame.
    fn content_size(&self) -> Size;

    /// The currently installed delegate, if it is still alive.
    fn delegate(&self) -> Option<Rc<dyn ScrollDelegate>>;

    /// Installs a delegate. The slot is weak: the host never owns its
    /// delegate.
    fn set_delegate(&mut self, delegate: Option<Weak<dyn ScrollDelegate>>);
}

/// The host view's delegate protocol.
///
/// Methods have empty default bodies so a delegate only implements the
/// callbacks it cares about.
pub trait ScrollDelegate {
    /// Called by the host whenever its scroll position changes.
    fn did_scroll(&self, _offset: Point) {}
}

/// Invokes the host's delegate with the current offset.
///
/// The offset and delegate are read under a short borrow that is released
/// before the delegate runs, so delegate work may re-enter the host (read
/// geometry, or even scroll it again).
pub fn notify_did_scroll<H: ScrollHost>(host: &Rc<RefCell<H>>) {
    let (offset, delegate) = {
        let host = host.borrow();
        (host.content_offset(), host.delegate())
    };
    if let Some(delegate) = delegate {
        delegate.did_scroll(offset);
    }
}
