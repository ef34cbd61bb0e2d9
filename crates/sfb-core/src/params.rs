//! Named construction parameters.

use crate::scalar::Real;

/// One `(name, value)` construction argument.
///
/// Names are matched exactly (case-sensitive); the order of a parameter list
/// carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedParam<'a, T: Real> {
    /// Parameter name, e.g. `"theta"`.
    pub name: &'a str,
    /// Parameter value.
    pub value: T,
}

impl<'a, T: Real> NamedParam<'a, T> {
    /// Create a named parameter.
    pub fn new(name: &'a str, value: T) -> Self {
        Self { name, value }
    }
}

impl<'a, T: Real> From<(&'a str, T)> for NamedParam<'a, T> {
    fn from((name, value): (&'a str, T)) -> Self {
        Self { name, value }
    }
}

/// Build a parameter list from `(name, value)` pairs.
pub fn named<'a, T: Real>(pairs: &[(&'a str, T)]) -> Vec<NamedParam<'a, T>> {
    pairs.iter().copied().map(NamedParam::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_preserves_order() {
        let ps = named(&[("k", 2.0f64), ("theta", 1.0)]);
        assert_eq!(ps.len(), 2);
        assert_eq!(ps[0].name, "k");
        assert_eq!(ps[1], NamedParam::new("theta", 1.0));
    }
}
