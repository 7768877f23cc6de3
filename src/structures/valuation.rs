/*!
Valuations, aka. assignments of truth values to atoms.

A valuation is a partial function from atoms to booleans, and any atom without a value is read as false.

Valuations are not used by the passes or by resolution, as neither need to know the value of any atom.
Instead, valuations support checking a formula against its [transformations](crate::transform), as each pass preserves the value of a formula on every valuation.

```rust
# use otter_resolution::structures::valuation::Valuation;
let valuations = Valuation::all_over(&["p", "q"]).collect::<Vec<_>>();
assert_eq!(valuations.len(), 4);
assert!(valuations.iter().any(|v| v.value_of("p") && !v.value_of("q")));
```
*/

use std::collections::BTreeMap;

/// A valuation over named atoms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    values: BTreeMap<String, bool>,
}

impl Valuation {
    /// Sets the value of an atom, returning the previous value, if any.
    pub fn set(&mut self, atom: impl Into<String>, value: bool) -> Option<bool> {
        self.values.insert(atom.into(), value)
    }

    /// The value of an atom, where an atom without a value is false.
    pub fn value_of(&self, atom: &str) -> bool {
        self.values.get(atom).copied().unwrap_or(false)
    }

    /// Every valuation over the given atoms.
    ///
    /// There are 2^n valuations over n atoms, and so this is only of use for small vocabularies.
    ///
    /// # Panics
    /// If given 64 or more atoms, as valuations are counted by a `u64`.
    pub fn all_over<'a>(atoms: &'a [&'a str]) -> impl Iterator<Item = Valuation> + 'a {
        let count = u32::try_from(atoms.len())
            .ok()
            .and_then(|n| 1_u64.checked_shl(n));
        let Some(count) = count else {
            panic!("valuations over {} atoms cannot be counted", atoms.len());
        };

        (0..count).map(move |mask| {
            let mut valuation = Valuation::default();
            for (index, atom) in atoms.iter().enumerate() {
                valuation.set(*atom, mask & (1 << index) != 0);
            }
            valuation
        })
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut the_string = String::default();
        for (atom, value) in &self.values {
            match value {
                true => the_string.push_str(format!("{atom} ").as_str()),
                false => the_string.push_str(format!("-{atom} ").as_str()),
            }
        }
        the_string.pop();
        write!(f, "{the_string}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valuation_once() {
        let valuations = Valuation::all_over(&["p", "q", "r"]).collect::<Vec<_>>();
        assert_eq!(valuations.len(), 8);

        let distinct = valuations.iter().map(|v| v.to_string()).collect::<std::collections::BTreeSet<_>>();
        assert_eq!(distinct.len(), 8);
        assert!(distinct.contains("p -q r"));
    }

    #[test]
    fn no_atoms() {
        let valuations = Valuation::all_over(&[]).collect::<Vec<_>>();
        assert_eq!(valuations, vec![Valuation::default()]);
    }

    #[test]
    #[should_panic(expected = "cannot be counted")]
    fn too_many_atoms() {
        let names = (0..64).map(|i| format!("a{i}")).collect::<Vec<_>>();
        let atoms = names.iter().map(String::as_str).collect::<Vec<_>>();
        let _ = Valuation::all_over(&atoms);
    }
}
