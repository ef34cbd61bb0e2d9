//! Parameter resolution against a family's schema.

use sfb_core::{Error, NamedParam, Real, Result};

use crate::family::{Family, ResolvedParams};

/// Validate `params` against `family.params`.
///
/// Checks, in order: duplicate names, names the family does not declare (only
/// when `reject_unknown` is set), missing required names, then the domain of
/// every supplied value. Values are widened to `f64` before the domain check,
/// so reduced and standard tables reject exactly the same inputs.
pub fn resolve<T: Real>(
    family: &Family,
    params: &[NamedParam<'_, T>],
    reject_unknown: bool,
) -> Result<ResolvedParams> {
    let mut values: Vec<Option<f64>> = vec![None; family.params.len()];

    for (i, p) in params.iter().enumerate() {
        if params[..i].iter().any(|q| q.name == p.name) {
            return Err(Error::DuplicateParameter { family: family.name, name: p.name.to_string() });
        }
        match family.params.iter().position(|s| s.name == p.name) {
            Some(slot) => values[slot] = Some(p.value.to_f64()),
            None if reject_unknown => {
                return Err(Error::UnexpectedParameter {
                    family: family.name,
                    name: p.name.to_string(),
                });
            }
            None => log::warn!("{}: ignoring unknown parameter {:?}", family.name, p.name),
        }
    }

    for (spec, value) in family.params.iter().zip(&values) {
        if spec.required && value.is_none() {
            return Err(Error::MissingParameter { family: family.name, name: spec.name });
        }
    }

    for (spec, value) in family.params.iter().zip(&values) {
        match *value {
            Some(v) if !spec.domain.accepts(v) => {
                return Err(Error::InvalidParameter {
                    family: family.name,
                    name: spec.name,
                    value: v,
                    expected: spec.domain.expected(),
                });
            }
            _ => {}
        }
    }

    Ok(ResolvedParams::new(family.name, family.params, values))
}
