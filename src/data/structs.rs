use std::collections::BTreeMap;
use std::fmt;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::builder::AssessmentDataBuilder;

/// Errors raised when a model body reads from [`AssessmentData`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// No slot with this name was supplied by the host
    #[error("Data slot {name:?} is missing")]
    MissingSlot { name: String },
    /// The slot exists but holds a different kind of value
    #[error("Data slot {name:?} holds a {found}, expected a {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A single named input value supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    Scalar(f64),
    Vector(Array1<f64>),
    Matrix(Array2<f64>),
}

impl DataValue {
    /// Kind label used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DataValue::Scalar(_) => "scalar",
            DataValue::Vector(_) => "vector",
            DataValue::Matrix(_) => "matrix",
        }
    }
}

/// The named inputs for one assessment.
///
/// [AssessmentData] is the collection of everything the host supplies to a
/// model besides the estimated parameters: catch and effort series, survey
/// indices, age/weight matrices, fixed biological constants. Model bodies
/// read slots by name; the set is immutable for the lifetime of an
/// [`ObjectiveFunction`](crate::ObjectiveFunction), and evaluation never
/// mutates it.
///
/// Series with missing observations carry `f64::NAN` entries so every slot
/// keeps its full length.
///
/// # Examples
///
/// ```
/// use stocksol::AssessmentData;
///
/// let data = AssessmentData::builder()
///     .scalar("M", 0.2)
///     .series("catch_obs", vec![110.0, 95.0, 130.0])
///     .series("cpue", vec![1.1, f64::NAN, 0.8])
///     .build();
///
/// assert_eq!(data.scalar("M").unwrap(), 0.2);
/// assert_eq!(data.vector("catch_obs").unwrap().len(), 3);
/// assert!(data.vector("effort").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentData {
    slots: BTreeMap<String, DataValue>,
}

impl AssessmentData {
    /// An empty data set.
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Fluent construction; see [`AssessmentDataBuilder`].
    pub fn builder() -> AssessmentDataBuilder {
        AssessmentDataBuilder::new()
    }

    /// Insert a slot, replacing and returning any previous value under the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, value: DataValue) -> Option<DataValue> {
        self.slots.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&DataValue> {
        self.slots.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Slot names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read a scalar slot.
    pub fn scalar(&self, name: &str) -> Result<f64, DataError> {
        match self.get(name) {
            Some(DataValue::Scalar(value)) => Ok(*value),
            Some(other) => Err(self.wrong_kind(name, "scalar", other)),
            None => Err(self.missing(name)),
        }
    }

    /// Read a vector slot.
    pub fn vector(&self, name: &str) -> Result<&Array1<f64>, DataError> {
        match self.get(name) {
            Some(DataValue::Vector(values)) => Ok(values),
            Some(other) => Err(self.wrong_kind(name, "vector", other)),
            None => Err(self.missing(name)),
        }
    }

    /// Read a matrix slot.
    pub fn matrix(&self, name: &str) -> Result<&Array2<f64>, DataError> {
        match self.get(name) {
            Some(DataValue::Matrix(values)) => Ok(values),
            Some(other) => Err(self.wrong_kind(name, "matrix", other)),
            None => Err(self.missing(name)),
        }
    }

    fn missing(&self, name: &str) -> DataError {
        DataError::MissingSlot {
            name: name.to_string(),
        }
    }

    fn wrong_kind(&self, name: &str, expected: &'static str, found: &DataValue) -> DataError {
        DataError::WrongKind {
            name: name.to_string(),
            expected,
            found: found.kind(),
        }
    }
}

impl fmt::Display for AssessmentData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AssessmentData ({} slots)", self.slots.len())?;
        for (name, value) in &self.slots {
            match value {
                DataValue::Scalar(v) => writeln!(f, "  {}: scalar = {}", name, v)?,
                DataValue::Vector(v) => writeln!(f, "  {}: vector [{}]", name, v.len())?,
                DataValue::Matrix(m) => {
                    writeln!(f, "  {}: matrix [{} x {}]", name, m.nrows(), m.ncols())?
                }
            }
        }
        Ok(())
    }
}
