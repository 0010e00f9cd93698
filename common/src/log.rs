//! Logging shorthands shared by every crate.
//!
//! `success!` is an `info` event on a dedicated target so the terminal
//! formatter can give it its own symbol.

#[doc(hidden)]
pub use tracing as __tracing;

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: "scanlens::success", $($arg)*)
    };
}
