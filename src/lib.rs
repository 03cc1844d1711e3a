//! # mq
//! Named width breakpoints and the CSS media queries built from them.
//!
//! There are four breakpoints, `sm`, `md`, `lg` and `xl`, defaulting to
//! 576px, 768px, 992px and 1200px. A [`BreakpointRegistry`] holds the current
//! widths and formats `max-width` / `min-width` queries from them on every
//! call, so a query always reflects the latest write.
//!
//! ## Example
//! ```rust
//! use mq::{Breakpoint, BreakpointRegistry, PartialBreakpoints};
//!
//! let mut breakpoints = BreakpointRegistry::new();
//! assert_eq!(breakpoints.max().sm(), "@media (max-width: 576px)");
//!
//! breakpoints.set_breakpoint(Breakpoint::Md, 800.0)?;
//! breakpoints.set_breakpoints(PartialBreakpoints::new().with(Breakpoint::Xl, 1440.0))?;
//! assert_eq!(breakpoints.min().md(), "@media (min-width: 800px)");
//! assert_eq!(breakpoints.min().xl(), "@media (min-width: 1440px)");
//!
//! breakpoints.reset_breakpoints();
//! assert_eq!(breakpoints.min().xl(), "@media (min-width: 1200px)");
//! # Ok::<(), mq::Error>(())
//! ```
//!
//! ## Shared registry
//! Code that cannot thread a registry through can use the process-wide one
//! returned by [`shared`], or the free functions below which lock it for the
//! duration of a single call.

pub mod breakpoint;
pub mod error;
pub mod media;
pub mod registry;

pub use breakpoint::{Breakpoint, Breakpoints, PartialBreakpoints};
pub use error::{Error, Result};
pub use media::{MediaFeature, MediaQueries, media_query};
pub use registry::{BreakpointRegistry, shared};

/// `@media (max-width: ..px)` for `bp` in the shared registry.
pub fn max(bp: Breakpoint) -> String {
    shared().read().max().get(bp)
}

/// `@media (min-width: ..px)` for `bp` in the shared registry.
pub fn min(bp: Breakpoint) -> String {
    shared().read().min().get(bp)
}

pub fn set_breakpoint(bp: Breakpoint, px: f64) -> Result<()> {
    shared().write().set_breakpoint(bp, px)
}

pub fn set_breakpoints(partial: PartialBreakpoints) -> Result<()> {
    shared().write().set_breakpoints(partial)
}

pub fn reset_breakpoints() {
    shared().write().reset_breakpoints();
}
