//! Static registry of distribution families.
//!
//! The registry is closed: the set of families is fixed at compile time and
//! never mutated. Lookup is by exact, case-sensitive name.

use sfb_core::{ContinuousUnivariate, Result, SolverConfig};
use sfb_prob::{Arcsine, Beta, ChiSquared, Exponential, FisherF, Gamma, Normal, StudentT};

use crate::family::{Domain, Family, ParamSpec, ResolvedParams};
use crate::slot::SlotSet;

type Built = Result<Box<dyn ContinuousUnivariate>>;

static FAMILIES: &[Family] = &[
    Family {
        name: "gamma",
        params: &[
            ParamSpec::required("k", Domain::Positive),
            ParamSpec::required("theta", Domain::Positive),
        ],
        absent: SlotSet::empty(),
        build: build_gamma,
    },
    Family {
        name: "student_t",
        params: &[ParamSpec::required("v", Domain::Positive)],
        absent: SlotSet::empty(),
        build: build_student_t,
    },
    Family {
        name: "fisher_f",
        params: &[
            ParamSpec::required("df1", Domain::Positive),
            ParamSpec::required("df2", Domain::Positive),
        ],
        absent: SlotSet::ENTROPY,
        build: build_fisher_f,
    },
    Family {
        name: "arcsine",
        params: &[
            ParamSpec::optional("x_min", Domain::Finite),
            ParamSpec::optional("x_max", Domain::Finite),
        ],
        absent: SlotSet::MODE,
        build: build_arcsine,
    },
    Family {
        name: "normal",
        params: &[
            ParamSpec::optional("mean", Domain::Finite),
            ParamSpec::optional("sd", Domain::Positive),
        ],
        absent: SlotSet::empty(),
        build: build_normal,
    },
    Family {
        name: "exponential",
        params: &[ParamSpec::optional("lambda", Domain::Positive)],
        absent: SlotSet::empty(),
        build: build_exponential,
    },
    Family {
        name: "beta",
        params: &[
            ParamSpec::required("alpha", Domain::Positive),
            ParamSpec::required("beta", Domain::Positive),
        ],
        absent: SlotSet::empty(),
        build: build_beta,
    },
    Family {
        name: "chi_squared",
        params: &[ParamSpec::required("v", Domain::Positive)],
        absent: SlotSet::empty(),
        build: build_chi_squared,
    },
];

/// All registered families, in registration order.
pub fn families() -> &'static [Family] {
    FAMILIES
}

/// Find a family by exact name.
pub fn lookup(name: &str) -> Option<&'static Family> {
    FAMILIES.iter().find(|f| f.name == name)
}

fn build_gamma(p: &ResolvedParams, solver: &SolverConfig) -> Built {
    let g = Gamma::new(p.require("k")?, p.require("theta")?)?.with_solver(*solver);
    Ok(Box::new(g))
}

fn build_student_t(p: &ResolvedParams, solver: &SolverConfig) -> Built {
    Ok(Box::new(StudentT::new(p.require("v")?)?.with_solver(*solver)))
}

fn build_fisher_f(p: &ResolvedParams, solver: &SolverConfig) -> Built {
    let f = FisherF::new(p.require("df1")?, p.require("df2")?)?.with_solver(*solver);
    Ok(Box::new(f))
}

// Closed-form quantiles: the solver settings do not apply.
fn build_arcsine(p: &ResolvedParams, _: &SolverConfig) -> Built {
    Ok(Box::new(Arcsine::with_defaults(p.get("x_min"), p.get("x_max"))?))
}

fn build_normal(p: &ResolvedParams, _: &SolverConfig) -> Built {
    Ok(Box::new(Normal::with_defaults(p.get("mean"), p.get("sd"))?))
}

fn build_exponential(p: &ResolvedParams, _: &SolverConfig) -> Built {
    Ok(Box::new(Exponential::with_defaults(p.get("lambda"))?))
}

fn build_beta(p: &ResolvedParams, solver: &SolverConfig) -> Built {
    let b = Beta::new(p.require("alpha")?, p.require("beta")?)?.with_solver(*solver);
    Ok(Box::new(b))
}

fn build_chi_squared(p: &ResolvedParams, solver: &SolverConfig) -> Built {
    Ok(Box::new(ChiSquared::new(p.require("v")?)?.with_solver(*solver)))
}
