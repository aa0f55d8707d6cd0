use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or reading a [`ParameterSet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Parameter {name:?} is missing")]
    MissingParameter { name: String },
    #[error("Parameter {name:?} is declared twice")]
    DuplicateParameter { name: String },
    #[error("Got {names} parameter names but {values} values")]
    LengthMismatch { names: usize, values: usize },
}

/// Ordered, named parameter values for one objective evaluation.
///
/// The optimization host works with a flat `f64` vector in declaration order;
/// model bodies read parameters by name (or by position, via
/// [`fetch_params!`](crate::fetch_params)). [`ParameterSet::from_slice`]
/// bridges the two: it pairs the host's trial point with the declared names,
/// and [`ParameterSet::to_vec`] flattens back in the same order.
///
/// # Example
///
/// ```
/// use stocksol::ParameterSet;
///
/// let params = ParameterSet::from_slice(&["log_R0", "h"], &[8.5, 0.8]).unwrap();
/// assert_eq!(params.value("h").unwrap(), 0.8);
/// assert_eq!(params.to_vec(), vec![8.5, 0.8]);
/// assert_eq!(params[0], 8.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    entries: Vec<(String, f64)>,
}

impl ParameterSet {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Pair declared names with the host's value vector, in declaration
    /// order. Fails if the lengths differ or a name repeats.
    pub fn from_slice(names: &[&str], values: &[f64]) -> Result<Self, ParameterError> {
        if names.len() != values.len() {
            return Err(ParameterError::LengthMismatch {
                names: names.len(),
                values: values.len(),
            });
        }
        let mut set = Self::new();
        for (name, value) in names.iter().zip(values) {
            set.push(*name, *value)?;
        }
        Ok(set)
    }

    /// Append a named parameter. Duplicate names are rejected.
    pub fn push(&mut self, name: impl Into<String>, value: f64) -> Result<(), ParameterError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(ParameterError::DuplicateParameter { name });
        }
        self.entries.push((name, value));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| *value)
    }

    /// Read a parameter by name.
    pub fn value(&self, name: &str) -> Result<f64, ParameterError> {
        self.get(name).ok_or_else(|| ParameterError::MissingParameter {
            name: name.to_string(),
        })
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Values flattened in declaration order, the host optimizer's view.
    pub fn to_vec(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<usize> for ParameterSet {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.entries[index].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_pairs_names_with_values_in_order() {
        let params = ParameterSet::from_slice(&["log_R0", "h", "tau"], &[8.5, 0.8, 0.1]).unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["log_R0", "h", "tau"]);
        assert_eq!(params.to_vec(), vec![8.5, 0.8, 0.1]);
        assert_eq!(params[2], 0.1);
    }

    #[test]
    fn from_slice_rejects_length_mismatch() {
        let err = ParameterSet::from_slice(&["a", "b"], &[1.0]).unwrap_err();
        assert_eq!(err, ParameterError::LengthMismatch { names: 2, values: 1 });
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = ParameterSet::from_slice(&["h", "h"], &[0.7, 0.8]).unwrap_err();
        assert_eq!(
            err,
            ParameterError::DuplicateParameter {
                name: "h".to_string()
            }
        );
    }

    #[test]
    fn missing_parameter_is_a_typed_error() {
        let params = ParameterSet::from_slice(&["h"], &[0.8]).unwrap();
        assert_eq!(
            params.value("M"),
            Err(ParameterError::MissingParameter {
                name: "M".to_string()
            })
        );
    }
}
