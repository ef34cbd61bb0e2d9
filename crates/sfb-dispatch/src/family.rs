//! Family descriptors: parameter schema, absent slots and adapter constructor.

use sfb_core::{ContinuousUnivariate, Error, Result, SolverConfig};

use crate::slot::{Slot, SlotSet};

/// Numeric domain a parameter value must lie in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Any finite value.
    Finite,
    /// Finite and strictly positive.
    Positive,
}

impl Domain {
    /// `true` if `value` lies in the domain. NaN never does.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Domain::Finite => value.is_finite(),
            Domain::Positive => value.is_finite() && value > 0.0,
        }
    }

    /// Human-readable description used in error messages.
    pub fn expected(self) -> &'static str {
        match self {
            Domain::Finite => "finite",
            Domain::Positive => "finite and > 0",
        }
    }
}

/// Schema entry for one named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Exact, case-sensitive name.
    pub name: &'static str,
    /// Whether construction fails without it.
    pub required: bool,
    /// Accepted values.
    pub domain: Domain,
}

impl ParamSpec {
    /// Required parameter.
    pub const fn required(name: &'static str, domain: Domain) -> Self {
        Self { name, required: true, domain }
    }

    /// Optional parameter; the adapter constructor supplies the default.
    pub const fn optional(name: &'static str, domain: Domain) -> Self {
        Self { name, required: false, domain }
    }
}

/// Adapter constructor: validated parameters in, boxed adapter out.
pub type BuildFn = fn(&ResolvedParams, &SolverConfig) -> Result<Box<dyn ContinuousUnivariate>>;

/// A registered distribution family.
#[derive(Clone, Copy)]
pub struct Family {
    /// Registry key, e.g. `"gamma"`.
    pub name: &'static str,
    /// Parameter schema.
    pub params: &'static [ParamSpec],
    /// Slots this family does not provide.
    pub absent: SlotSet,
    /// Adapter constructor.
    pub build: BuildFn,
}

impl Family {
    /// Slots present in tables of this family.
    pub fn slots(&self) -> SlotSet {
        SlotSet::all().difference(self.absent)
    }

    /// `true` if tables of this family provide `slot`.
    pub fn provides(&self, slot: Slot) -> bool {
        self.slots().has(slot)
    }
}

impl std::fmt::Debug for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Family")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("absent", &self.absent)
            .finish()
    }
}

/// Parameter values after schema validation, aligned with [`Family::params`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParams {
    family: &'static str,
    specs: &'static [ParamSpec],
    values: Vec<Option<f64>>,
}

impl ResolvedParams {
    pub(crate) fn new(
        family: &'static str,
        specs: &'static [ParamSpec],
        values: Vec<Option<f64>>,
    ) -> Self {
        debug_assert_eq!(specs.len(), values.len());
        Self { family, specs, values }
    }

    /// Family the values were resolved for.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Value of `name`, or `None` when it was not supplied (or is not declared).
    pub fn get(&self, name: &str) -> Option<f64> {
        self.specs.iter().position(|s| s.name == name).and_then(|i| self.values[i])
    }

    /// Value of a required parameter.
    pub fn require(&self, name: &'static str) -> Result<f64> {
        self.get(name).ok_or(Error::MissingParameter { family: self.family, name })
    }
}
