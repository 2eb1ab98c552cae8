//! A reactive binding layer for scrollable views.
//!
//! A scrollable host exposes state changes through a single imperative
//! delegate slot. This crate fans that one callback out to any number of
//! independent observers, with value replay for late subscribers, while a
//! pre-existing application delegate keeps working:
//!
//! - [`DelegateProxy`] implements the delegate protocol, pushes each
//!   callback into lazily created subjects, then forwards to the
//!   application delegate.
//! - [`ProxyRegistry`] guarantees one proxy per host and completes every
//!   subject deterministically when a host goes away.
//! - [`BehaviorSubject`] / [`PublishSubject`] are the single-threaded,
//!   synchronous subject primitives the proxy publishes through.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`ScrollHost`] implementation over its scrollable view
//! - delegate invocations routed through [`notify_did_scroll`] (or its own
//!   equivalent)
//!
//! For the public property surface (two-way offset binding, reached-bottom
//! events), see the `scroll-rx-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod proxy;
mod registry;
mod subject;
mod types;


pub use host::{ScrollDelegate, ScrollHost, notify_did_scroll};
pub use proxy::DelegateProxy;
pub use registry::ProxyRegistry;
pub use subject::{BehaviorSubject, PublishSubject, Subscription};
pub use types::{EdgeInsets, Point, Size};
