//! # sfb-dispatch
//!
//! Generic dispatch layer for SFBridge distributions.
//!
//! A caller asks for a distribution by family name and a list of named
//! parameters; the factory validates the parameters against the family's
//! schema and returns a [`CapabilityTable`] that answers pointwise queries
//! (density, CDF, quantile, ...) and descriptive queries (mean, variance,
//! entropy, ...) in the caller's precision.
//!
//! ```
//! use sfb_core::{Standard, named};
//!
//! let t = sfb_dispatch::construct::<Standard>("gamma", &named(&[("k", 2.0), ("theta", 1.0)]))?;
//! let median = t.quantile(0.5).unwrap();
//! assert!((t.cdf(median).unwrap() - 0.5).abs() < 1e-9);
//! # Ok::<(), sfb_core::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The registry is a static slice of [`Family`] descriptors. Each descriptor
//! owns its parameter schema, its absent slots and a constructor producing a
//! boxed [`sfb_core::ContinuousUnivariate`] adapter from `sfb-prob`. The table
//! holds that adapter and converts values at the precision boundary; the
//! adapters themselves always evaluate in `f64`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// `construct` / `construct_with_config`.
pub mod factory;
/// Family descriptors and parameter schemas.
pub mod family;
/// The static family registry.
pub mod registry;
/// Parameter validation against a schema.
pub mod resolve;
/// Operation slot identifiers and slot sets.
pub mod slot;
/// Capability tables.
pub mod table;

pub use factory::{construct, construct_with_config};
pub use family::{Domain, Family, ParamSpec, ResolvedParams};
pub use registry::{families, lookup};
pub use slot::{Slot, SlotSet};
pub use table::CapabilityTable;
