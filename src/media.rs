use std::fmt;

use crate::breakpoint::{Breakpoint, Breakpoints};

/// The width feature a media query tests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFeature {
    /// `max-width`
    Max,
    /// `min-width`
    Min,
}

impl MediaFeature {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaFeature::Max => "max-width",
            MediaFeature::Min => "min-width",
        }
    }
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format `@media ({feature}: {px}px)`.
///
/// `px` uses `f64`'s `Display`, so whole numbers carry no fractional part.
/// Negative zero is written as `0`.
pub fn media_query(feature: MediaFeature, px: f64) -> String {
    let px = if px == 0.0 { 0.0 } else { px };
    format!("@media ({feature}: {px}px)")
}

/// Media-query accessors for one [`MediaFeature`], borrowed from a registry.
///
/// Every call formats a fresh string from the borrowed widths.
#[derive(Debug, Clone, Copy)]
pub struct MediaQueries<'a> {
    breakpoints: &'a Breakpoints,
    feature: MediaFeature,
}

impl<'a> MediaQueries<'a> {
    pub(crate) fn new(breakpoints: &'a Breakpoints, feature: MediaFeature) -> Self {
        Self {
            breakpoints,
            feature,
        }
    }

    pub fn get(&self, bp: Breakpoint) -> String {
        media_query(self.feature, self.breakpoints.get(bp))
    }

    pub fn sm(&self) -> String {
        self.get(Breakpoint::Sm)
    }

    pub fn md(&self) -> String {
        self.get(Breakpoint::Md)
    }

    pub fn lg(&self) -> String {
        self.get(Breakpoint::Lg)
    }

    pub fn xl(&self) -> String {
        self.get(Breakpoint::Xl)
    }
}
