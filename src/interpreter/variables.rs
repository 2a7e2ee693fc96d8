use std::{collections::BTreeMap, str::FromStr};

use crate::error::BindingError;

/// Maps single-character names to values.
///
/// The table only stores values; whether a name can be referenced is decided
/// when an operand is resolved. Iteration is ordered by name.
///
/// # Example
/// ```
/// use foldcalc::interpreter::variables::VariableTable;
///
/// let mut table = VariableTable::new();
/// table.set('x', 3.0);
///
/// assert_eq!(table.get('x'), Some(3.0));
/// assert_eq!(table.get('y'), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    values: BTreeMap<char, f64>,
}

impl VariableTable {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: char, value: f64) {
        self.values.insert(name, value);
    }

    #[must_use]
    pub fn get(&self, name: char) -> Option<f64> {
        self.values.get(&name).copied()
    }

    /// Removes a binding and returns its former value.
    pub fn remove(&mut self, name: char) -> Option<f64> {
        self.values.remove(&name)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.values.iter().map(|(&name, &value)| (name, value))
    }
}

impl FromIterator<(char, f64)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

/// A `name=value` assignment, as accepted by the command line.
///
/// # Example
/// ```
/// use foldcalc::interpreter::variables::Binding;
///
/// let binding: Binding = "x = 3.5".parse().unwrap();
/// assert_eq!(binding.name, 'x');
/// assert_eq!(binding.value, 3.5);
///
/// assert!("xy=1".parse::<Binding>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    /// The variable name.
    pub name:  char,
    /// The bound value.
    pub value: f64,
}

impl FromStr for Binding {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) =
            s.split_once('=')
             .ok_or_else(|| BindingError::MissingSeparator { binding: s.to_string() })?;

        let name = name.trim();
        let mut chars = name.chars();
        let name = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => return Err(BindingError::InvalidName { name: name.to_string() }),
        };

        let value = value.trim();
        let value = value.replace(',', ".")
                         .parse::<f64>()
                         .ok()
                         .filter(|v| v.is_finite())
                         .ok_or_else(|| BindingError::InvalidValue { value: value.to_string() })?;

        Ok(Self { name, value })
    }
}
