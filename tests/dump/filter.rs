//! Tests for label filters.

use crate::support::*;
use secretdump::cli::dump;
use secretdump::core::writer::Format;

#[test]
fn test_filter_selects_labeled_secrets() {
    let t = Test::new();
    let service = labeled_service();
    let config = t.config(PROJECT, Some("labels.env=stage"), Format::Stdout, ".env");

    let mut out: Vec<u8> = Vec::new();
    dump::run(&service, &config, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "DB_PASSWORD=hunter2\nREDIS_URL=redis://localhost:6379\n"
    );
}

#[test]
fn test_filter_reaches_service_unmodified() {
    let filters = [
        "labels.env=stage",
        "labels.env = stage",
        "name:db-* AND labels.team=core",
        "LABELS.ENV=STAGE",
    ];

    for filter in filters {
        let t = Test::new();
        let service = labeled_service();
        let config = t.config(PROJECT, Some(filter), Format::Stdout, ".env");

        let _ = dump::run(&service, &config, &mut std::io::sink());

        assert_eq!(
            service.list_calls(),
            vec![("projects/demo".to_string(), Some(filter.to_string()))],
            "filter {filter:?} was altered"
        );
    }
}

#[test]
fn test_no_filter_lists_everything() {
    let t = Test::new();
    let service = labeled_service();
    let config = t.config(PROJECT, None, Format::Stdout, ".env");

    let mut out: Vec<u8> = Vec::new();
    dump::run(&service, &config, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap().lines().count(), LABELED_SECRETS.len());
    assert_eq!(service.list_calls()[0].1, None);
}

#[test]
fn test_only_latest_versions_requested() {
    let t = Test::new();
    let service = demo_service();
    let config = t.config(PROJECT, None, Format::Stdout, ".env");

    dump::run(&service, &config, &mut std::io::sink()).unwrap();

    assert_eq!(
        service.access_calls(),
        vec![
            "projects/demo/secrets/DB-HOST/versions/latest".to_string(),
            "projects/demo/secrets/API-KEY/versions/latest".to_string(),
        ]
    );
}
