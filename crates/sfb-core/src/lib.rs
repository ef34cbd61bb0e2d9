//! # sfb-core
//!
//! Core vocabulary for SFBridge: the error type, the precision markers and
//! value-width trait, named construction parameters, configuration, and the
//! backend adapter contract consumed by the dispatch layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod params;
pub mod precision;
pub mod scalar;
pub mod traits;

pub use config::{DispatchConfig, SolverConfig};
pub use error::{Error, Result};
pub use params::{NamedParam, named};
pub use precision::{Extended, Precision, PrecisionKind, Reduced, Standard};
pub use scalar::Real;
pub use traits::ContinuousUnivariate;
