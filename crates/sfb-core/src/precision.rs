//! Precision markers.
//!
//! Every capability table is specialized by one of three zero-sized markers.
//! The marker fixes the value type seen by the caller; the dispatch logic is
//! identical for all three.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scalar::Real;

/// Runtime tag for a precision marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionKind {
    /// Single precision (`float`).
    Reduced,
    /// Double precision (`double`).
    Standard,
    /// Extended precision (`long double` on the C side).
    Extended,
}

impl fmt::Display for PrecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrecisionKind::Reduced => "reduced",
            PrecisionKind::Standard => "standard",
            PrecisionKind::Extended => "extended",
        };
        f.write_str(s)
    }
}

/// Compile-time precision selector.
pub trait Precision: Copy + fmt::Debug + Send + Sync + 'static {
    /// Value type carried by tables of this precision.
    type Value: Real;

    /// Runtime tag.
    const KIND: PrecisionKind;
}

/// `f32` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reduced;

/// `f64` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

/// Extended-precision tables.
///
/// Stable Rust has no `long double`, so values are carried and evaluated as
/// `f64`; the marker keeps the table type distinct from [`Standard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Extended;

impl Precision for Reduced {
    type Value = f32;
    const KIND: PrecisionKind = PrecisionKind::Reduced;
}

impl Precision for Standard {
    type Value = f64;
    const KIND: PrecisionKind = PrecisionKind::Standard;
}

impl Precision for Extended {
    type Value = f64;
    const KIND: PrecisionKind = PrecisionKind::Extended;
}
