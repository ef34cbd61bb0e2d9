//! Operation slots of a capability table.
//!
//! The layout is fixed and identical for every family: eight pointwise query
//! slots, ten descriptive slots and the release slot. A family advertises which
//! of them it provides through a [`SlotSet`].

use bitflags::bitflags;
use std::fmt;

/// One operation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Slot {
    /// Probability density.
    Density = 0,
    /// Natural log of the density.
    LnDensity,
    /// Cumulative probability `P(X <= x)`.
    Cdf,
    /// Survival probability `P(X > x)`.
    Survival,
    /// Hazard `pdf / sf`.
    Hazard,
    /// Cumulative hazard `-ln sf`.
    CumulativeHazard,
    /// Inverse of the CDF.
    Quantile,
    /// Inverse of the survival function.
    QuantileComplement,
    /// Closed support `(lower, upper)`.
    Support,
    /// Mean.
    Mean,
    /// Variance.
    Variance,
    /// Standard deviation.
    StdDev,
    /// Mode.
    Mode,
    /// Median.
    Median,
    /// Skewness.
    Skewness,
    /// Kurtosis (non-excess).
    Kurtosis,
    /// Excess kurtosis.
    KurtosisExcess,
    /// Differential entropy in nats.
    Entropy,
    /// Destroys the context.
    Release,
}

impl Slot {
    /// Number of slots in the table layout.
    pub const COUNT: usize = 19;

    /// Every slot in layout order.
    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::Density,
        Slot::LnDensity,
        Slot::Cdf,
        Slot::Survival,
        Slot::Hazard,
        Slot::CumulativeHazard,
        Slot::Quantile,
        Slot::QuantileComplement,
        Slot::Support,
        Slot::Mean,
        Slot::Variance,
        Slot::StdDev,
        Slot::Mode,
        Slot::Median,
        Slot::Skewness,
        Slot::Kurtosis,
        Slot::KurtosisExcess,
        Slot::Entropy,
        Slot::Release,
    ];

    /// Position in the table layout.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case slot name, as used in logs and the C header.
    pub const fn name(self) -> &'static str {
        match self {
            Slot::Density => "density",
            Slot::LnDensity => "ln_density",
            Slot::Cdf => "cdf",
            Slot::Survival => "survival",
            Slot::Hazard => "hazard",
            Slot::CumulativeHazard => "cumulative_hazard",
            Slot::Quantile => "quantile",
            Slot::QuantileComplement => "quantile_complement",
            Slot::Support => "support",
            Slot::Mean => "mean",
            Slot::Variance => "variance",
            Slot::StdDev => "std_dev",
            Slot::Mode => "mode",
            Slot::Median => "median",
            Slot::Skewness => "skewness",
            Slot::Kurtosis => "kurtosis",
            Slot::KurtosisExcess => "kurtosis_excess",
            Slot::Entropy => "entropy",
            Slot::Release => "release",
        }
    }

    /// `true` for slots taking one input value.
    pub const fn is_pointwise(self) -> bool {
        (self as u8) <= (Slot::QuantileComplement as u8)
    }

    /// The single-slot set for this slot.
    pub const fn flag(self) -> SlotSet {
        SlotSet::from_bits_retain(1 << (self as u32))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of slots; bit `i` is the slot with [`Slot::index`] `i`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SlotSet: u32 {
        /// [`Slot::Density`].
        const DENSITY = 1 << 0;
        /// [`Slot::LnDensity`].
        const LN_DENSITY = 1 << 1;
        /// [`Slot::Cdf`].
        const CDF = 1 << 2;
        /// [`Slot::Survival`].
        const SURVIVAL = 1 << 3;
        /// [`Slot::Hazard`].
        const HAZARD = 1 << 4;
        /// [`Slot::CumulativeHazard`].
        const CUMULATIVE_HAZARD = 1 << 5;
        /// [`Slot::Quantile`].
        const QUANTILE = 1 << 6;
        /// [`Slot::QuantileComplement`].
        const QUANTILE_COMPLEMENT = 1 << 7;
        /// [`Slot::Support`].
        const SUPPORT = 1 << 8;
        /// [`Slot::Mean`].
        const MEAN = 1 << 9;
        /// [`Slot::Variance`].
        const VARIANCE = 1 << 10;
        /// [`Slot::StdDev`].
        const STD_DEV = 1 << 11;
        /// [`Slot::Mode`].
        const MODE = 1 << 12;
        /// [`Slot::Median`].
        const MEDIAN = 1 << 13;
        /// [`Slot::Skewness`].
        const SKEWNESS = 1 << 14;
        /// [`Slot::Kurtosis`].
        const KURTOSIS = 1 << 15;
        /// [`Slot::KurtosisExcess`].
        const KURTOSIS_EXCESS = 1 << 16;
        /// [`Slot::Entropy`].
        const ENTROPY = 1 << 17;
        /// [`Slot::Release`].
        const RELEASE = 1 << 18;
    }
}

impl SlotSet {
    /// `true` if `slot` is in the set.
    pub const fn has(self, slot: Slot) -> bool {
        self.contains(slot.flag())
    }

    /// Slots in layout order.
    pub fn slots(self) -> impl Iterator<Item = Slot> {
        Slot::ALL.into_iter().filter(move |s| self.has(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_order_matches_index() {
        for (i, s) in Slot::ALL.iter().enumerate() {
            assert_eq!(s.index(), i, "{}", s);
        }
        assert_eq!(Slot::Release.index(), Slot::COUNT - 1);
    }

    #[test]
    fn test_pointwise_split() {
        let pointwise: Vec<_> = Slot::ALL.iter().filter(|s| s.is_pointwise()).collect();
        assert_eq!(pointwise.len(), 8);
        assert!(!Slot::Support.is_pointwise());
        assert!(!Slot::Release.is_pointwise());
    }

    #[test]
    fn test_flags_match_layout() {
        assert_eq!(Slot::Density.flag(), SlotSet::DENSITY);
        assert_eq!(Slot::Entropy.flag(), SlotSet::ENTROPY);
        assert_eq!(Slot::Release.flag(), SlotSet::RELEASE);
        assert_eq!(SlotSet::all().bits().count_ones() as usize, Slot::COUNT);
        let listed: Vec<_> = SlotSet::all().slots().collect();
        assert_eq!(listed, Slot::ALL.to_vec());
    }

    #[test]
    fn test_set_operations() {
        let absent = SlotSet::ENTROPY | SlotSet::MODE;
        let present = SlotSet::all().difference(absent);
        assert_eq!(present.bits().count_ones() as usize, Slot::COUNT - 2);
        assert!(!present.has(Slot::Entropy));
        assert!(present.has(Slot::Release));
        assert!(SlotSet::empty().is_empty());
        assert_eq!(absent.slots().collect::<Vec<_>>(), vec![Slot::Mode, Slot::Entropy]);
    }
}
