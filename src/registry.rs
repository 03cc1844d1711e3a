//! The breakpoint registry.
//!
//! A [`BreakpointRegistry`] owns the current width of each [`Breakpoint`] and
//! formats media queries from it on demand. Hosts normally create one and
//! hand it to their styling layer; [`shared`] provides a process-wide
//! instance for code that has nowhere to keep one.

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    breakpoint::{Breakpoint, Breakpoints, PartialBreakpoints},
    error::{Error, Result},
    media::{MediaFeature, MediaQueries},
};

static SHARED: RwLock<BreakpointRegistry> = RwLock::new(BreakpointRegistry::new());

/// The process-wide registry, starting at [`Breakpoints::DEFAULT`].
pub fn shared() -> &'static RwLock<BreakpointRegistry> {
    &SHARED
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointRegistry {
    breakpoints: Breakpoints,
}

impl Default for BreakpointRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakpointRegistry {
    pub const fn new() -> Self {
        Self {
            breakpoints: Breakpoints::DEFAULT,
        }
    }

    pub fn with_breakpoints(breakpoints: Breakpoints) -> Result<Self> {
        for bp in Breakpoint::all() {
            check_width(bp, breakpoints.get(bp))?;
        }
        Ok(Self { breakpoints })
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    pub fn width(&self, bp: Breakpoint) -> f64 {
        self.breakpoints.get(bp)
    }

    /// `@media (max-width: ..px)` queries.
    pub fn max(&self) -> MediaQueries<'_> {
        MediaQueries::new(&self.breakpoints, MediaFeature::Max)
    }

    /// `@media (min-width: ..px)` queries.
    pub fn min(&self) -> MediaQueries<'_> {
        MediaQueries::new(&self.breakpoints, MediaFeature::Min)
    }

    pub fn media_query(&self, feature: MediaFeature, bp: Breakpoint) -> String {
        MediaQueries::new(&self.breakpoints, feature).get(bp)
    }

    /// Set the width of a single breakpoint. The others are left alone.
    pub fn set_breakpoint(&mut self, bp: Breakpoint, px: f64) -> Result<()> {
        check_width(bp, px)?;
        *self.breakpoints.slot_mut(bp) = px;
        debug!(breakpoint = %bp, px, "breakpoint set");
        Ok(())
    }

    /// Like [`set_breakpoint`](Self::set_breakpoint) for untyped input, e.g.
    /// values read from a JSON config. `name` must be a string naming a
    /// breakpoint and `value` must be a number.
    pub fn set_breakpoint_value(&mut self, name: &Value, value: &Value) -> Result<()> {
        let (Some(name), Some(px)) = (name.as_str(), value.as_f64()) else {
            let err = Error::InvalidArgument(
                "Must provide a string breakpoint name and a number value to set_breakpoint."
                    .to_string(),
            );
            warn!(%err, "rejected breakpoint");
            return Err(err);
        };
        let bp =
            Breakpoint::parse(name).inspect_err(|err| warn!(%err, "rejected breakpoint"))?;
        self.set_breakpoint(bp, px)
    }

    /// Set several breakpoints at once.
    ///
    /// Every present width is checked before any is written, so a failed
    /// call leaves the registry unchanged.
    pub fn set_breakpoints(&mut self, partial: PartialBreakpoints) -> Result<()> {
        for (bp, px) in partial.entries() {
            check_width(bp, px)?;
        }
        for (bp, px) in partial.entries() {
            *self.breakpoints.slot_mut(bp) = px;
        }
        debug!(?partial, "breakpoints set");
        Ok(())
    }

    /// Like [`set_breakpoints`](Self::set_breakpoints) for untyped input.
    ///
    /// `value` must be an object whose keys are breakpoint names and whose
    /// values are numbers.
    pub fn set_breakpoints_value(&mut self, value: &Value) -> Result<()> {
        let partial =
            partial_from_value(value).inspect_err(|err| warn!(%err, "rejected breakpoints"))?;
        self.set_breakpoints(partial)
    }

    /// Restore [`Breakpoints::DEFAULT`].
    pub fn reset_breakpoints(&mut self) {
        self.breakpoints = Breakpoints::DEFAULT;
        debug!("breakpoints reset");
    }
}

fn check_width(bp: Breakpoint, px: f64) -> Result<()> {
    if px.is_finite() {
        return Ok(());
    }
    let err = Error::value_not_a_number(bp);
    warn!(breakpoint = %bp, px, "rejected breakpoint width");
    Err(err)
}

fn partial_from_value(value: &Value) -> Result<PartialBreakpoints> {
    let Value::Object(map) = value else {
        return Err(Error::InvalidArgument(
            "Must provide an object containing breakpoints as keys and numerical values as values to set_breakpoints."
                .to_string(),
        ));
    };
    for key in map.keys() {
        Breakpoint::parse(key)?;
    }
    let mut partial = PartialBreakpoints::new();
    for bp in Breakpoint::all() {
        let key: &str = bp.as_ref();
        if let Some(entry) = map.get(key) {
            let px = entry
                .as_f64()
                .ok_or_else(|| Error::value_not_a_number(bp))?;
            partial = partial.with(bp, px);
        }
    }
    Ok(partial)
}
