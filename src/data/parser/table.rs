use std::path::Path;

use ndarray::Array1;

use super::DatafileError;
use crate::data::structs::{AssessmentData, DataValue};

/// Read a wide-format CSV datafile into an [`AssessmentData`].
///
/// Each named column becomes a vector slot of the same name; rows are
/// observations (usually one per year). Lines starting with `#` are comments.
/// Empty, `NA`, and `NaN` cells become `f64::NAN`, so series with missing
/// observations keep their full length. Any other non-numeric cell is a
/// [`DatafileError::BadNumber`] naming the column and record.
///
/// Scalar inputs (natural mortality, weights for priors) are not part of the
/// table format; add them afterwards with [`AssessmentData::insert`].
///
/// # Example
///
/// ```rust,no_run
/// use stocksol::read_table;
///
/// let data = read_table("data/assessment.csv").unwrap();
/// println!("Columns: {}", data.len());
/// ```
pub fn read_table(path: impl AsRef<Path>) -> Result<AssessmentData, DatafileError> {
    let contents =
        std::fs::read_to_string(path.as_ref()).map_err(|e| DatafileError::CSVError(e.to_string()))?;
    parse_table(&contents)
}

/// Parse wide-format CSV text; see [`read_table`].
pub fn parse_table(contents: &str) -> Result<AssessmentData, DatafileError> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DatafileError::CSVError(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(DatafileError::EmptyTable);
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for (record_index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DatafileError::CSVError(e.to_string()))?;
        for (column, field) in record.iter().enumerate() {
            let value = parse_cell(field).ok_or_else(|| DatafileError::BadNumber {
                column: headers[column].clone(),
                record: record_index + 1,
                value: field.to_string(),
            })?;
            columns[column].push(value);
        }
    }

    let mut data = AssessmentData::new();
    for (header, column) in headers.into_iter().zip(columns) {
        data.insert(header, DataValue::Vector(Array1::from(column)));
    }
    Ok(data)
}

/// Missing observations are encoded as empty cells, `NA`, or `NaN`.
fn parse_cell(field: &str) -> Option<f64> {
    if field.is_empty() || field == "NA" || field.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_columns_into_named_series() {
        let data = parse_table(
            "# annual inputs\n\
             year,catch_obs,cpue\n\
             1990,110.0,1.1\n\
             1991,95.0,NA\n\
             1992,130.0,0.8\n",
        )
        .unwrap();

        assert_eq!(data.names().collect::<Vec<_>>(), vec!["catch_obs", "cpue", "year"]);
        assert_eq!(data.vector("catch_obs").unwrap().len(), 3);
        assert_eq!(data.vector("year").unwrap()[2], 1992.0);
    }

    #[test]
    fn missing_markers_become_nan() {
        let data = parse_table(
            "year,cpue\n1990,1.1\n1991,\n1992,NA\n1993,nan\n1994,0.8\n",
        )
        .unwrap();
        let cpue = data.vector("cpue").unwrap();
        assert_eq!(cpue.len(), 5);
        assert!(cpue[1].is_nan());
        assert!(cpue[2].is_nan());
        assert!(cpue[3].is_nan());
        assert_eq!(cpue[4], 0.8);
    }

    #[test]
    fn non_numeric_cell_names_column_and_record() {
        let err = parse_table("year,cpue\n1990,1.1\n1991,high\n").unwrap_err();
        assert_eq!(
            err,
            DatafileError::BadNumber {
                column: "cpue".to_string(),
                record: 2,
                value: "high".to_string(),
            }
        );
    }

    #[test]
    fn ragged_records_are_csv_errors() {
        assert!(matches!(
            parse_table("a,b\n1.0\n").unwrap_err(),
            DatafileError::CSVError(_)
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_table("").unwrap_err(), DatafileError::EmptyTable);
    }
}
