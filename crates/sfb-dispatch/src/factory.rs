//! Name-keyed construction of capability tables.

use sfb_core::{DispatchConfig, Error, NamedParam, Precision, Result};

use crate::registry;
use crate::resolve::resolve;
use crate::table::CapabilityTable;

/// Construct a table for `family_name` with default configuration.
///
/// # Errors
/// - [`Error::UnknownFamily`] if the name is not registered
/// - [`Error::DuplicateParameter`], [`Error::UnexpectedParameter`],
///   [`Error::MissingParameter`], [`Error::InvalidParameter`] for schema
///   violations
/// - [`Error::Validation`] for cross-parameter constraints checked by the
///   adapter (e.g. `x_min >= x_max`), or for a configuration that fails
///   [`DispatchConfig::validate`]
///
/// On error nothing is allocated and no table exists.
pub fn construct<P: Precision>(
    family_name: &str,
    params: &[NamedParam<'_, P::Value>],
) -> Result<CapabilityTable<P>> {
    construct_with_config(family_name, params, &DispatchConfig::default())
}

/// Construct a table for `family_name` using `config`.
pub fn construct_with_config<P: Precision>(
    family_name: &str,
    params: &[NamedParam<'_, P::Value>],
    config: &DispatchConfig,
) -> Result<CapabilityTable<P>> {
    let result = build::<P>(family_name, params, config);
    match &result {
        Ok(_) => log::debug!("constructed {} table ({})", family_name, P::KIND),
        Err(e) => log::debug!("rejected {:?} ({}): {}", family_name, P::KIND, e),
    }
    result
}

fn build<P: Precision>(
    family_name: &str,
    params: &[NamedParam<'_, P::Value>],
    config: &DispatchConfig,
) -> Result<CapabilityTable<P>> {
    config.validate()?;
    let family = registry::lookup(family_name)
        .ok_or_else(|| Error::UnknownFamily(family_name.to_string()))?;
    let resolved = resolve(family, params, config.reject_unknown_parameters)?;
    let context = (family.build)(&resolved, &config.solver)?;
    Ok(CapabilityTable::new(family, context))
}
