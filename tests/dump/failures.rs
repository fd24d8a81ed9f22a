//! Tests for fail-fast behavior: errors never leave partial output.

use crate::support::*;
use secretdump::cli::dump;
use secretdump::core::service::MemorySecretService;
use secretdump::core::writer::Format;
use secretdump::error::Error;
use std::fs;

#[test]
fn test_empty_filter_result_is_fatal() {
    let t = Test::new();
    let service = labeled_service();
    let config = t.config(PROJECT, Some("labels.env=none"), Format::Env, ".env");

    let err = dump::run(&service, &config, &mut std::io::sink()).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("demo"), "missing project: {msg}");
    assert!(msg.contains("labels.env=none"), "missing filter: {msg}");
    assert!(service.access_calls().is_empty());
    assert!(t.files().is_empty());
}

#[test]
fn test_empty_project_is_fatal() {
    let t = Test::new();
    let service = MemorySecretService::new(PROJECT);
    let config = t.config(PROJECT, None, Format::Json, "out");

    let err = dump::run(&service, &config, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, Error::NoSecrets { filter: None, .. }));
    assert!(t.files().is_empty());
}

#[test]
fn test_denied_secret_aborts_without_output() {
    let t = Test::new();
    let service = demo_service().deny("API-KEY");
    let config = t.config(PROJECT, None, Format::Env, ".env");

    let err = dump::run(&service, &config, &mut std::io::sink()).unwrap_err();

    assert!(err.to_string().contains("permission denied"));
    assert!(t.files().is_empty());
}

#[test]
fn test_failed_run_leaves_previous_file_untouched() {
    let t = Test::new();
    fs::write(t.path(".env"), "KEEP='me'\n").unwrap();
    let service = demo_service().deny("DB-HOST");
    let config = t.config(PROJECT, None, Format::Env, ".env");

    assert!(dump::run(&service, &config, &mut std::io::sink()).is_err());

    assert_eq!(fs::read_to_string(t.path(".env")).unwrap(), "KEEP='me'\n");
}

#[test]
fn test_stdout_failure_prints_nothing() {
    let t = Test::new();
    let service = demo_service().deny("API-KEY");
    let config = t.config(PROJECT, None, Format::Stdout, ".env");

    let mut out: Vec<u8> = Vec::new();
    assert!(dump::run(&service, &config, &mut out).is_err());

    assert!(out.is_empty());
}

#[test]
fn test_non_utf8_secret_is_fatal() {
    let t = Test::new();
    let service = MemorySecretService::new(PROJECT)
        .with_secret("ok", "fine")
        .with_labeled_secret("binary", &[0xc3, 0x28], &[]);
    let config = t.config(PROJECT, None, Format::Env, ".env");

    let err = dump::run(&service, &config, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, Error::InvalidPayload { .. }));
    assert!(t.files().is_empty());
}

#[test]
fn test_unknown_project_is_service_error() {
    let t = Test::new();
    let service = demo_service();
    let config = t.config("other-project", None, Format::Env, ".env");

    let err = dump::run(&service, &config, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, Error::Service(_)));
    assert!(err.hint().is_some());
}

#[test]
fn test_missing_output_directory_is_io_error() {
    let t = Test::new();
    let service = demo_service();
    let config = t.config(PROJECT, None, Format::Env, "nested/dir/.env");

    let err = dump::run(&service, &config, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}
