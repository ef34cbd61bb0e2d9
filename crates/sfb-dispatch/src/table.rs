//! Capability tables.

use std::fmt;
use std::marker::PhantomData;

use sfb_core::{ContinuousUnivariate, Precision, PrecisionKind, Real};

use crate::family::Family;
use crate::slot::{Slot, SlotSet};

/// A constructed distribution handle of precision `P`.
///
/// The table exclusively owns its adapter. Every query reads the same adapter
/// for the whole lifetime of the table; dropping the table (or calling
/// [`release`](Self::release)) destroys it.
///
/// Slot accessors return `None` when the family does not provide the slot and
/// `Some(NaN)` for a domain error (argument outside the support, probability
/// outside `[0, 1]`, moment that does not exist).
pub struct CapabilityTable<P: Precision> {
    family: &'static Family,
    context: Box<dyn ContinuousUnivariate>,
    _precision: PhantomData<P>,
}

impl<P: Precision> CapabilityTable<P> {
    pub(crate) fn new(family: &'static Family, context: Box<dyn ContinuousUnivariate>) -> Self {
        Self { family, context, _precision: PhantomData }
    }

    /// Registry name of the family.
    pub fn family(&self) -> &'static str {
        self.family.name
    }

    /// Precision the table was constructed for.
    pub fn precision(&self) -> PrecisionKind {
        P::KIND
    }

    /// Present slots.
    pub fn slots(&self) -> SlotSet {
        self.family.slots()
    }

    /// `true` if `slot` is present.
    pub fn has(&self, slot: Slot) -> bool {
        self.family.provides(slot)
    }

    /// The adapter behind the table.
    pub fn context(&self) -> &dyn ContinuousUnivariate {
        self.context.as_ref()
    }

    /// Evaluate a pointwise query slot.
    ///
    /// Returns `None` for absent slots and for slots that take no argument.
    pub fn call(&self, slot: Slot, x: P::Value) -> Option<P::Value> {
        if !slot.is_pointwise() || !self.has(slot) {
            return None;
        }
        let d = self.context.as_ref();
        let x = x.to_f64();
        let y = match slot {
            Slot::Density => d.pdf(x),
            Slot::LnDensity => d.ln_pdf(x),
            Slot::Cdf => d.cdf(x),
            Slot::Survival => d.sf(x),
            Slot::Hazard => d.hazard(x),
            Slot::CumulativeHazard => d.cumulative_hazard(x),
            Slot::Quantile => d.quantile(x),
            Slot::QuantileComplement => d.quantile_complement(x),
            _ => return None,
        };
        Some(P::Value::from_f64(y))
    }

    /// Evaluate a scalar descriptive slot.
    ///
    /// Returns `None` for absent slots, pointwise slots, [`Slot::Support`] (use
    /// [`support`](Self::support)) and [`Slot::Release`].
    pub fn describe(&self, slot: Slot) -> Option<P::Value> {
        if !self.has(slot) {
            return None;
        }
        let d = self.context.as_ref();
        let y = match slot {
            Slot::Mean => d.mean(),
            Slot::Variance => d.variance(),
            Slot::StdDev => d.std_dev(),
            Slot::Mode => d.mode(),
            Slot::Median => d.median(),
            Slot::Skewness => d.skewness(),
            Slot::Kurtosis => d.kurtosis(),
            Slot::KurtosisExcess => d.kurtosis_excess(),
            Slot::Entropy => d.entropy(),
            _ => return None,
        };
        Some(P::Value::from_f64(y))
    }

    /// Probability density at `x`.
    pub fn density(&self, x: P::Value) -> Option<P::Value> {
        self.call(Slot::Density, x)
    }

    /// Log-density at `x`.
    pub fn ln_density(&self, x: P::Value) -> Option<P::Value> {
        self.call(Slot::LnDensity, x)
    }

    /// `P(X <= x)`.
    pub fn cdf(&self, x: P::Value) -> Option<P::Value> {
        self.call(Slot::Cdf, x)
    }

    /// `P(X > x)`.
    pub fn survival(&self, x: P::Value) -> Option<P::Value> {
        self.call(Slot::Survival, x)
    }

    /// Hazard at `x`.
    pub fn hazard(&self, x: P::Value) -> Option<P::Value> {
        self.call(Slot::Hazard, x)
    }

    /// Cumulative hazard at `x`.
    pub fn cumulative_hazard(&self, x: P::Value) -> Option<P::Value> {
        self.call(Slot::CumulativeHazard, x)
    }

    /// Smallest `x` with `cdf(x) >= p`.
    pub fn quantile(&self, p: P::Value) -> Option<P::Value> {
        self.call(Slot::Quantile, p)
    }

    /// `x` with `survival(x) == q`.
    pub fn quantile_complement(&self, q: P::Value) -> Option<P::Value> {
        self.call(Slot::QuantileComplement, q)
    }

    /// Closed support `(lower, upper)`; bounds may be infinite.
    pub fn support(&self) -> Option<(P::Value, P::Value)> {
        if !self.has(Slot::Support) {
            return None;
        }
        let (lo, hi) = self.context.support();
        Some((P::Value::from_f64(lo), P::Value::from_f64(hi)))
    }

    /// Mean.
    pub fn mean(&self) -> Option<P::Value> {
        self.describe(Slot::Mean)
    }

    /// Variance.
    pub fn variance(&self) -> Option<P::Value> {
        self.describe(Slot::Variance)
    }

    /// Standard deviation.
    pub fn std_dev(&self) -> Option<P::Value> {
        self.describe(Slot::StdDev)
    }

    /// Mode.
    pub fn mode(&self) -> Option<P::Value> {
        self.describe(Slot::Mode)
    }

    /// Median.
    pub fn median(&self) -> Option<P::Value> {
        self.describe(Slot::Median)
    }

    /// Skewness.
    pub fn skewness(&self) -> Option<P::Value> {
        self.describe(Slot::Skewness)
    }

    /// Kurtosis.
    pub fn kurtosis(&self) -> Option<P::Value> {
        self.describe(Slot::Kurtosis)
    }

    /// Excess kurtosis.
    pub fn kurtosis_excess(&self) -> Option<P::Value> {
        self.describe(Slot::KurtosisExcess)
    }

    /// Differential entropy.
    pub fn entropy(&self) -> Option<P::Value> {
        self.describe(Slot::Entropy)
    }

    /// Destroy the table and its adapter.
    pub fn release(self) {
        log::trace!("releasing {} table ({})", self.family.name, P::KIND);
        drop(self);
    }

    /// Split into the family descriptor and the owned adapter.
    pub fn into_parts(self) -> (&'static Family, Box<dyn ContinuousUnivariate>) {
        (self.family, self.context)
    }
}

impl<P: Precision> fmt::Debug for CapabilityTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityTable")
            .field("family", &self.family.name)
            .field("precision", &P::KIND)
            .field("context", &self.context)
            .field("slots", &self.slots())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use sfb_core::{Reduced, Standard};
    use sfb_prob::{Arcsine, Gamma};

    fn gamma_table() -> CapabilityTable<Standard> {
        let family = registry::lookup("gamma").unwrap();
        CapabilityTable::new(family, Box::new(Gamma::new(2.0, 1.0).unwrap()))
    }

    #[test]
    fn test_call_rejects_descriptive_slots() {
        let t = gamma_table();
        assert_eq!(t.call(Slot::Mean, 1.0), None);
        assert_eq!(t.call(Slot::Release, 1.0), None);
        assert_eq!(t.describe(Slot::Density), None);
        assert_eq!(t.describe(Slot::Support), None);
        assert_eq!(t.describe(Slot::Mean), Some(2.0));
    }

    #[test]
    fn test_absent_slot_is_none() {
        let family = registry::lookup("arcsine").unwrap();
        let t: CapabilityTable<Reduced> =
            CapabilityTable::new(family, Box::new(Arcsine::new(0.0, 1.0).unwrap()));
        assert!(!t.has(Slot::Mode));
        assert_eq!(t.mode(), None);
        assert_eq!(t.support(), Some((0.0f32, 1.0f32)));
        assert_eq!(t.precision(), PrecisionKind::Reduced);
    }

    #[test]
    fn test_domain_error_is_some_nan() {
        let t = gamma_table();
        assert!(t.quantile(1.5).unwrap().is_nan());
        assert!(t.density(-1.0).unwrap().is_nan());
    }

    #[test]
    fn test_into_parts() {
        let (family, ctx) = gamma_table().into_parts();
        assert_eq!(family.name, "gamma");
        assert_eq!(ctx.family(), "gamma");
    }
}
