//! Distribution backend adapters for SFBridge.
//!
//! Each family module holds the minimal immutable parameters of one
//! distribution and implements [`sfb_core::ContinuousUnivariate`] on top of the
//! `statrs` special functions:
//! - closed forms where they exist (density, moments, entropy)
//! - guarded incomplete gamma/beta for the CDF and survival function
//! - a bisection [`solver`] for quantiles with no closed-form inverse

pub mod math;
pub mod solver;

pub mod arcsine;
pub mod beta;
pub mod chi_squared;
pub mod exponential;
pub mod fisher_f;
pub mod gamma;
pub mod normal;
pub mod student_t;

pub use arcsine::Arcsine;
pub use beta::Beta;
pub use chi_squared::ChiSquared;
pub use exponential::Exponential;
pub use fisher_f::FisherF;
pub use gamma::Gamma;
pub use normal::Normal;
pub use student_t::StudentT;
