use std::collections::BTreeMap;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::Deserialize;

use super::DatafileError;
use crate::data::structs::{AssessmentData, DataValue};

/// One slot as it appears in the datafile: a bare number, a vector, or a
/// row-major nested matrix.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSlot {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
}

/// Read a JSON datafile into an [`AssessmentData`].
///
/// The file holds one object mapping slot names to scalars, vectors, or
/// row-major matrices, mirroring the named input list the host would
/// otherwise build in code:
///
/// ```json
/// {
///   "M": 0.2,
///   "cpue": [1.1, 0.9, 0.8],
///   "waa": [[0.5, 1.0], [0.6, 1.2]]
/// }
/// ```
pub fn read_json(path: impl AsRef<Path>) -> Result<AssessmentData, DatafileError> {
    let contents =
        std::fs::read_to_string(path.as_ref()).map_err(|e| DatafileError::JSONError(e.to_string()))?;
    parse_json(&contents)
}

/// Parse JSON datafile text; see [`read_json`].
pub fn parse_json(contents: &str) -> Result<AssessmentData, DatafileError> {
    let slots: BTreeMap<String, JsonSlot> =
        serde_json::from_str(contents).map_err(|e| DatafileError::JSONError(e.to_string()))?;

    let mut data = AssessmentData::new();
    for (name, slot) in slots {
        let value = match slot {
            JsonSlot::Scalar(v) => DataValue::Scalar(v),
            JsonSlot::Vector(v) => DataValue::Vector(Array1::from(v)),
            JsonSlot::Matrix(rows) => DataValue::Matrix(matrix_from_rows(&name, rows)?),
        };
        data.insert(name, value);
    }
    Ok(data)
}

fn matrix_from_rows(name: &str, rows: Vec<Vec<f64>>) -> Result<Array2<f64>, DatafileError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(nrows * ncols);
    for (row, values) in rows.into_iter().enumerate() {
        if values.len() != ncols {
            return Err(DatafileError::RaggedMatrix {
                name: name.to_string(),
                row,
                expected: ncols,
                found: values.len(),
            });
        }
        flat.extend(values);
    }
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| DatafileError::JSONError(e.to_string()))
}
