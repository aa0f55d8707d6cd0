//! Integration tests for datafile ingest: CSV tables and JSON input lists
//! read from disk into [AssessmentData].

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use stocksol::{read_json, read_table, AssessmentData, DataValue};

/// Create a unique temp path for each test to avoid race conditions
fn unique_temp_path(extension: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let pid = std::process::id();
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("stocksol_test_{}_{}.{}", pid, count, extension))
}

#[test]
fn csv_table_reads_into_named_series() {
    let path = unique_temp_path("csv");
    std::fs::write(
        &path,
        "# catch and survey index by year\n\
         year,catch_obs,cpue\n\
         1990,110.0,1.1\n\
         1991,95.0,NA\n\
         1992,130.0,0.8\n",
    )
    .unwrap();

    let data = read_table(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(data.len(), 3);
    let cpue = data.vector("cpue").unwrap();
    assert_eq!(cpue.len(), 3);
    assert!(cpue[1].is_nan());
    assert_eq!(data.vector("catch_obs").unwrap()[2], 130.0);
}

#[test]
fn csv_scalars_are_added_after_the_table() {
    let path = unique_temp_path("csv");
    std::fs::write(&path, "cpue,catch_obs\n1.1,110.0\n0.8,130.0\n").unwrap();

    let mut data = read_table(&path).unwrap();
    std::fs::remove_file(&path).ok();

    data.insert("M", DataValue::Scalar(0.2));
    assert_eq!(data.scalar("M").unwrap(), 0.2);
    assert_eq!(data.len(), 3);
}

#[test]
fn json_input_list_reads_every_slot_kind() {
    let path = unique_temp_path("json");
    std::fs::write(
        &path,
        r#"{
            "M": 0.2,
            "cpue": [1.1, 0.9, 0.8],
            "waa": [[0.5, 1.0], [0.6, 1.2]]
        }"#,
    )
    .unwrap();

    let data = read_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(data.scalar("M").unwrap(), 0.2);
    assert_eq!(data.vector("cpue").unwrap().len(), 3);
    assert_eq!(data.matrix("waa").unwrap().nrows(), 2);
}

#[test]
fn missing_files_surface_as_datafile_errors() {
    let path = unique_temp_path("csv");
    assert!(read_table(&path).is_err());
    assert!(read_json(path.with_extension("json")).is_err());
}

#[test]
fn data_round_trips_through_serde_json() {
    let data = AssessmentData::builder()
        .scalar("M", 0.2)
        .series("cpue", vec![1.1, 0.9, 0.8])
        .build();

    let path = unique_temp_path("json");
    std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    let back: AssessmentData =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(back, data);
}
