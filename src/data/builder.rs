use ndarray::{Array1, Array2};

use crate::data::structs::{AssessmentData, DataValue};

/// Fluent builder for [`AssessmentData`].
///
/// Later slots replace earlier ones under the same name, matching
/// [`AssessmentData::insert`].
///
/// # Example
///
/// ```
/// use stocksol::AssessmentData;
///
/// let data = AssessmentData::builder()
///     .scalar("M", 0.2)
///     .scalar("nyears", 25.0)
///     .series("catch_obs", vec![110.0, 95.0, 130.0])
///     .build();
///
/// assert_eq!(data.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssessmentDataBuilder {
    data: AssessmentData,
}

impl AssessmentDataBuilder {
    pub fn new() -> Self {
        Self {
            data: AssessmentData::new(),
        }
    }

    /// Add a scalar slot.
    pub fn scalar(mut self, name: impl Into<String>, value: f64) -> Self {
        self.data.insert(name, DataValue::Scalar(value));
        self
    }

    /// Add a vector slot. Accepts `Vec<f64>` as well as `Array1<f64>`.
    pub fn series(mut self, name: impl Into<String>, values: impl Into<Array1<f64>>) -> Self {
        self.data.insert(name, DataValue::Vector(values.into()));
        self
    }

    /// Add a matrix slot.
    pub fn matrix(mut self, name: impl Into<String>, values: Array2<f64>) -> Self {
        self.data.insert(name, DataValue::Matrix(values));
        self
    }

    pub fn build(self) -> AssessmentData {
        self.data
    }
}
