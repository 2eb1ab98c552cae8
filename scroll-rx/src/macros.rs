#[cfg(feature = "tracing")]
macro_rules! rxtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_rx", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rxtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! rxdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_rx", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rxdebug {
    ($($tt:tt)*) => {};
}
