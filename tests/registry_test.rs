//! Loader tests over real files: happy path, date formats, fail-fast
//! behavior for missing and malformed inputs.

use std::fs;

use chrono::NaiveDate;
use cohort_etl::registry::{self, EVENTS_FILE, FEATURE_MAP_FILE, MORTALITY_FILE};
use cohort_etl::EtlError;

fn write_default_tables(dir: &std::path::Path) {
    fs::write(
        dir.join(EVENTS_FILE),
        "patient_id,event_id,event_description,timestamp,value\n\
         1001,LAB3013682,Hematocrit,2017-01-11,0.8\n\
         1001,DRUG19065818,Acetaminophen,2017-03-22,\n\
         1002,DIAG319049,Acute respiratory failure,2017-02-20,3.0\n",
    )
    .unwrap();
    fs::write(
        dir.join(MORTALITY_FILE),
        "patient_id,timestamp,label\n1002,2017-04-11,1\n",
    )
    .unwrap();
    fs::write(
        dir.join(FEATURE_MAP_FILE),
        "idx,event_id\n100,LAB3013682\n2900,DRUG19065818\n3000,DIAG319049\n",
    )
    .unwrap();
}

#[test]
fn test_load_source_tables() {
    let dir = tempfile::tempdir().unwrap();
    write_default_tables(dir.path());

    let tables = registry::load_source_tables(dir.path()).unwrap();

    assert_eq!(tables.events.len(), 3);
    assert_eq!(tables.mortality.len(), 1);
    assert_eq!(tables.feature_map.len(), 3);

    let first = &tables.events[0];
    assert_eq!(first.patient_id, 1001);
    assert_eq!(first.event_id, "LAB3013682");
    assert_eq!(
        first.timestamp,
        NaiveDate::from_ymd_opt(2017, 1, 11).unwrap()
    );
    assert_eq!(first.value, Some(0.8));

    // Empty value cells load as None, never zero.
    assert_eq!(tables.events[1].value, None);
}

#[test]
fn test_us_style_dates_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    write_default_tables(dir.path());
    fs::write(
        dir.path().join(MORTALITY_FILE),
        "patient_id,timestamp,label\n1002,04/11/2017,1\n",
    )
    .unwrap();

    let tables = registry::load_source_tables(dir.path()).unwrap();
    assert_eq!(
        tables.mortality[0].timestamp,
        NaiveDate::from_ymd_opt(2017, 4, 11).unwrap()
    );
}

#[test]
fn test_missing_events_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = registry::load_source_tables(dir.path()).unwrap_err();
    match err {
        EtlError::Io { path, .. } => assert!(path.ends_with(EVENTS_FILE)),
        other => panic!("expected an I/O error, got {other}"),
    }
}

#[test]
fn test_malformed_date_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_default_tables(dir.path());
    fs::write(
        dir.path().join(EVENTS_FILE),
        "patient_id,event_id,event_description,timestamp,value\n\
         1001,LAB3013682,Hematocrit,eleventh of January,0.8\n",
    )
    .unwrap();

    let err = registry::load_source_tables(dir.path()).unwrap_err();
    match err {
        EtlError::Csv { path, .. } => assert!(path.ends_with(EVENTS_FILE)),
        other => panic!("expected a parse error, got {other}"),
    }
}

#[test]
fn test_malformed_row_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_default_tables(dir.path());
    fs::write(
        dir.path().join(FEATURE_MAP_FILE),
        "idx,event_id\nnot-a-number,LAB3013682\n",
    )
    .unwrap();

    let err = registry::load_source_tables(dir.path()).unwrap_err();
    match err {
        EtlError::Csv { path, .. } => assert!(path.ends_with(FEATURE_MAP_FILE)),
        other => panic!("expected a parse error, got {other}"),
    }
}

#[test]
fn test_input_path_must_be_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("not_a_dir");
    fs::write(&file_path, "").unwrap();

    let err = registry::load_source_tables(&file_path).unwrap_err();
    assert!(matches!(err, EtlError::Directory { .. }));
}
