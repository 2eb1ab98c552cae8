//! Reactive property surface for the `scroll-rx` crate.
//!
//! The core crate stops at the delegate proxy and its subjects. This crate
//! provides the property objects application code actually binds to:
//!
//! - [`ScrollBinding`]: the per-host entry point
//! - [`OffsetProperty`]: a two-way binding over the host's scroll offset
//! - [`ReachedBottom`]: a derived stream that fires when the offset lands
//!   strictly past the bottom of the content
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui
//! bindings); anything implementing `scroll_rx::ScrollHost` works.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod binding;
mod property;
mod reached;

#[cfg(test)]
mod tests;

pub use binding::ScrollBinding;
pub use property::OffsetProperty;
pub use reached::ReachedBottom;
