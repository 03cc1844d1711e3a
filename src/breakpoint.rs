use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Error, Result};

/// One of the four named width breakpoints.
///
/// Iteration order is `Sm`, `Md`, `Lg`, `Xl`, which is also the order bulk
/// updates are processed in.
#[derive(
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    Copy,
    Debug,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Parse a breakpoint name, mapping unknown names to
    /// [`Error::InvalidArgument`].
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| Error::InvalidArgument(format!("Unknown breakpoint \"{name}\".")))
    }

    pub fn all() -> impl Iterator<Item = Breakpoint> {
        Breakpoint::iter()
    }
}

/// Width breakpoints in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl Breakpoints {
    pub const DEFAULT: Breakpoints = Breakpoints {
        sm: 576.0,
        md: 768.0,
        lg: 992.0,
        xl: 1200.0,
    };

    pub fn get(&self, bp: Breakpoint) -> f64 {
        match bp {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    pub(crate) fn slot_mut(&mut self, bp: Breakpoint) -> &mut f64 {
        match bp {
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A bulk update: `None` leaves the breakpoint untouched.
///
/// Deserializes from a mapping whose keys are a subset of `sm`, `md`, `lg`
/// and `xl`. Any other key is rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialBreakpoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<f64>,
}

impl PartialBreakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, bp: Breakpoint, px: f64) -> Self {
        *self.slot_mut(bp) = Some(px);
        self
    }

    pub fn get(&self, bp: Breakpoint) -> Option<f64> {
        match bp {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    fn slot_mut(&mut self, bp: Breakpoint) -> &mut Option<f64> {
        match bp {
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }

    /// Present entries in `sm`, `md`, `lg`, `xl` order.
    pub fn entries(&self) -> impl Iterator<Item = (Breakpoint, f64)> + '_ {
        Breakpoint::iter().filter_map(|bp| self.get(bp).map(|px| (bp, px)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

impl FromIterator<(Breakpoint, f64)> for PartialBreakpoints {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |partial, (bp, px)| partial.with(bp, px))
    }
}

#[cfg(test)]
mod tests {
    use super::{Breakpoint, Breakpoints, PartialBreakpoints};

    #[test]
    fn names_round_trip() {
        for bp in Breakpoint::all() {
            assert_eq!(Breakpoint::parse(bp.as_ref()).unwrap(), bp);
        }
        assert_eq!(Breakpoint::Lg.to_string(), "lg");
    }

    #[test]
    fn unknown_name_rejected() {
        assert!(Breakpoint::parse("xxl").is_err());
        assert!(Breakpoint::parse("SM").is_err());
        assert!(Breakpoint::parse("").is_err());
    }

    #[test]
    fn iteration_order() {
        let order: Vec<_> = Breakpoint::all().collect();
        assert_eq!(
            order,
            [Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg, Breakpoint::Xl]
        );
    }

    #[test]
    fn defaults() {
        let bps = Breakpoints::default();
        assert_eq!(bps.get(Breakpoint::Sm), 576.0);
        assert_eq!(bps.get(Breakpoint::Md), 768.0);
        assert_eq!(bps.get(Breakpoint::Lg), 992.0);
        assert_eq!(bps.get(Breakpoint::Xl), 1200.0);
    }

    #[test]
    fn partial_entries_skip_absent() {
        let partial: PartialBreakpoints = [(Breakpoint::Xl, 1.0), (Breakpoint::Sm, 2.0)]
            .into_iter()
            .collect();
        let entries: Vec<_> = partial.entries().collect();
        assert_eq!(entries, [(Breakpoint::Sm, 2.0), (Breakpoint::Xl, 1.0)]);
        assert!(PartialBreakpoints::new().is_empty());
    }

    #[test]
    fn partial_rejects_unknown_keys() {
        let res: Result<PartialBreakpoints, _> =
            serde_json::from_str(r#"{ "sm": 1, "xxl": 2 }"#);
        assert!(res.is_err());

        let ok: PartialBreakpoints = serde_json::from_str(r#"{ "md": 640 }"#).unwrap();
        assert_eq!(ok, PartialBreakpoints::new().with(Breakpoint::Md, 640.0));
    }
}
